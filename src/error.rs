//! Error types for timetable operations.
//!
//! Every failure is recoverable: a rejected mutation leaves the timetable
//! unchanged and the caller may retry with corrected input.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ScheduleConflict;

/// Result type for timetable mutations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Why a timetable mutation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The lesson would double-book a professor or classroom.
    #[error("schedule conflict: {0}")]
    Conflict(ScheduleConflict),

    /// No lesson belongs to the given course.
    #[error("no lesson found for course {course_id}")]
    LessonNotFound { course_id: u32 },
}

impl ScheduleError {
    /// The conflict behind this error, if any.
    pub fn conflict(&self) -> Option<&ScheduleConflict> {
        match self {
            ScheduleError::Conflict(c) => Some(c),
            ScheduleError::LessonNotFound { .. } => None,
        }
    }
}

impl From<ScheduleConflict> for ScheduleError {
    fn from(conflict: ScheduleConflict) -> Self {
        ScheduleError::Conflict(conflict)
    }
}

/// Errors raised while loading a timetable seed file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid timetable description.
    #[error("invalid timetable seed: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Lesson, TimeSlot};

    #[test]
    fn test_conflict_accessor() {
        let lesson = Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First);
        let err: ScheduleError = ScheduleConflict::classroom(lesson.clone()).into();
        assert_eq!(err.conflict().map(|c| &c.lesson), Some(&lesson));
        assert!(err.to_string().starts_with("schedule conflict: room 101"));

        let missing = ScheduleError::LessonNotFound { course_id: 7 };
        assert!(missing.conflict().is_none());
        assert_eq!(missing.to_string(), "no lesson found for course 7");
    }
}
