//! Timetable seed configuration.
//!
//! A seed lists the professors, classrooms, courses and lessons to start
//! a timetable with. Seeds are written in TOML:
//!
//! ```toml
//! [[professors]]
//! id = 1
//! name = "Dr. Smith"
//! department = "Mathematics"
//!
//! [[classrooms]]
//! number = "101"
//! capacity = 30
//! hasProjector = true
//!
//! [[courses]]
//! id = 1
//! name = "Algebra"
//! type = "Lecture"
//!
//! [[lessons]]
//! courseId = 1
//! professorId = 1
//! classroomNumber = "101"
//! dayOfWeek = "Monday"
//! timeSlot = "8:30-10:00"
//! ```
//!
//! Lessons are placed through the conflict validator, so a seed cannot
//! produce a double-booked timetable.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::{Classroom, Course, DayOfWeek, Lesson, Professor, ScheduleConflict, TimeSlot};
use crate::scheduler::Timetable;

/// Timetable seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableConfig {
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl TimetableConfig {
    /// Reads a seed from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a seed from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Built-in demo seed: three professors, rooms 101-103, three courses
    /// and one lesson each on Monday, Tuesday and Wednesday.
    pub fn demo() -> Self {
        Self {
            professors: vec![
                Professor::new(1, "Dr. Smith").with_department("Mathematics"),
                Professor::new(2, "Dr. Brown").with_department("Physics"),
                Professor::new(3, "Dr. Taylor").with_department("Computer Science"),
            ],
            classrooms: vec![
                Classroom::new("101", 30).with_projector(),
                Classroom::new("102", 20),
                Classroom::new("103", 40).with_projector(),
            ],
            courses: vec![
                Course::lecture(1, "Algebra"),
                Course::lecture(2, "Quantum Physics"),
                Course::lab(3, "Data Structures"),
            ],
            lessons: vec![
                Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First),
                Lesson::new(2, 2, "102", DayOfWeek::Tuesday, TimeSlot::Second),
                Lesson::new(3, 3, "103", DayOfWeek::Wednesday, TimeSlot::Third),
            ],
        }
    }
}

impl FromStr for TimetableConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

impl Timetable {
    /// Builds a timetable from a seed.
    ///
    /// Professors, classrooms and courses are registered as listed. Lessons
    /// go through [`Timetable::add_lesson`]; the ones rejected for a
    /// conflict are returned instead of placed.
    pub fn from_config(config: TimetableConfig) -> (Self, Vec<ScheduleConflict>) {
        let mut timetable = Timetable::new();
        for professor in config.professors {
            timetable.add_professor(professor);
        }
        for classroom in config.classrooms {
            timetable.add_classroom(classroom);
        }
        for course in config.courses {
            timetable.add_course(course);
        }

        let mut rejected = Vec::new();
        for lesson in config.lessons {
            if let Err(err) = timetable.add_lesson(lesson) {
                if let Some(conflict) = err.conflict() {
                    rejected.push(conflict.clone());
                }
            }
        }

        if !rejected.is_empty() {
            warn!("{} seed lesson(s) rejected due to conflicts", rejected.len());
        }
        info!(
            "Timetable loaded: {} professors, {} classrooms, {} courses, {} lessons",
            timetable.registry().professors().len(),
            timetable.registry().classrooms().len(),
            timetable.registry().courses().len(),
            timetable.lessons().len()
        );

        (timetable, rejected)
    }
}
