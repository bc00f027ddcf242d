//! Timetable domain models.
//!
//! Provides the data types of a weekly university timetable: the fixed
//! week grid, the resources a lesson occupies, courses, lessons, and the
//! conflict value produced when a lesson would double-book a resource.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling term |
//! |-------------|-----------------|
//! | Professor | Human resource |
//! | Classroom | Primary resource (room) |
//! | Course | Task category |
//! | Lesson | Assignment to a grid cell |

mod course;
mod lesson;
mod resource;
mod week;

pub use course::{Course, CourseType};
pub use lesson::{ConflictType, Lesson, ScheduleConflict};
pub use resource::{Classroom, Professor};
pub use week::{DayOfWeek, ParseLabelError, TimeSlot, WEEKLY_CELLS};
