//! Weekly university timetable for the U-Engine ecosystem.
//!
//! Tracks professors, classrooms, courses and lessons on a fixed
//! Monday-Friday, five-slot week, and keeps the lesson list free of
//! double bookings.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Professor`, `Classroom`, `Course`,
//!   `Lesson`, `DayOfWeek`, `TimeSlot`, `ScheduleConflict`
//! - **`registry`**: Insertion-ordered entity collections
//! - **`validation`**: Lesson conflict checks and registry audits
//! - **`scheduler`**: `Timetable` service (mutators, queries) and KPIs
//! - **`config`**: TOML seed loading
//! - **`error`**: Error types
//!
//! # Conflict Rule
//!
//! No two lessons may share a professor, or a classroom, in the same
//! (day, slot) cell. Every lesson mutation is validated against this rule
//! before it is committed.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod scheduler;
pub mod validation;

pub use config::TimetableConfig;
pub use error::{ConfigError, ScheduleError};
pub use scheduler::{Timetable, TimetableKpi};
