pub mod assistant;
pub mod directory;
pub mod providers;
pub mod storage;

pub use assistant::CampusAssistant;
pub use directory::CampusDirectory;
pub use storage::{LocalUploadStore, UploadStore};
