pub mod app;
pub mod chat;
pub mod directory;
pub mod upload;

pub use app::{health_check, index, route_not_found};
pub use chat::chat;
pub use directory::{contacts, locations, timetable};
pub use upload::upload_pdf;
