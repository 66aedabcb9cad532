use chrono::{DateTime, Utc};

use crate::models::campus::{
    CampusLocation, FacultyDirectory, FacultyMember, LocationMap, Timetable, WeekSchedule,
};

/// Read-only campus reference data. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct CampusDirectory {
    timetable: Timetable,
    faculty: FacultyDirectory,
    locations: LocationMap,
    loaded_at: DateTime<Utc>,
}

impl CampusDirectory {
    pub fn new(timetable: Timetable, faculty: FacultyDirectory, locations: LocationMap) -> Self {
        Self {
            timetable,
            faculty,
            locations,
            loaded_at: Utc::now(),
        }
    }

    /// The built-in sample tables.
    pub fn sample() -> Self {
        let mut timetable = Timetable::new();
        timetable.insert(
            "Computer Science",
            WeekSchedule {
                monday: vec![
                    "9:00-10:30 AM - Data Structures (Room 301)",
                    "11:00-12:30 PM - Algorithms (Lab 3)",
                ],
                tuesday: vec![
                    "10:00-11:30 AM - Database Systems (Room 302)",
                    "2:00-4:00 PM - Web Dev Lab",
                ],
                wednesday: vec![
                    "9:00-10:30 AM - Mathematics (Room 201)",
                    "11:00-12:30 PM - Computer Networks",
                ],
                thursday: vec![
                    "10:00-11:30 AM - Software Engineering",
                    "2:00-4:00 PM - Project Work",
                ],
                friday: vec![
                    "9:00-10:30 AM - AI Fundamentals",
                    "11:00-12:30 PM - Seminar",
                ],
            },
        );

        let mut faculty = FacultyDirectory::new();
        faculty.insert(
            "Computer Science",
            vec![
                FacultyMember {
                    name: "Dr. Sarah Chen",
                    email: "schen@college.edu",
                    office: "Room 301",
                    subjects: vec!["Data Structures", "Algorithms"],
                },
                FacultyMember {
                    name: "Prof. Mike Rodriguez",
                    email: "mrodriguez@college.edu",
                    office: "Room 302",
                    subjects: vec!["Database Systems", "Web Development"],
                },
                FacultyMember {
                    name: "Dr. Priya Patel",
                    email: "ppatel@college.edu",
                    office: "Lab 3",
                    subjects: vec!["AI", "Machine Learning"],
                },
            ],
        );

        let mut locations = LocationMap::new();
        locations.insert(
            "Library",
            CampusLocation {
                building: "Main Building",
                floor: "2nd Floor",
                hours: "8:00 AM - 8:00 PM",
                features: vec!["Books", "Study Rooms", "Computers"],
            },
        );
        locations.insert(
            "Computer Lab",
            CampusLocation {
                building: "Tech Building",
                floor: "1st Floor",
                hours: "9:00 AM - 6:00 PM",
                features: vec!["Programming", "Project Work"],
            },
        );
        locations.insert(
            "Cafeteria",
            CampusLocation {
                building: "Student Center",
                floor: "Ground Floor",
                hours: "7:00 AM - 8:00 PM",
                features: vec!["Food Court", "Coffee Shop"],
            },
        );

        Self::new(timetable, faculty, locations)
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn faculty(&self) -> &FacultyDirectory {
        &self.faculty
    }

    pub fn locations(&self) -> &LocationMap {
        &self.locations
    }

    /// When the tables were built; reported as the timetable's `lastUpdated`.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
