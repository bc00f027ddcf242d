//! Timetable service and KPI evaluation.
//!
//! # Service
//!
//! `Timetable` owns the entity registry and exposes the conflict-gated
//! lesson mutators (add, reassign classroom, cancel) together with the
//! read-only queries (free classrooms, professor schedule, utilization,
//! most popular course type).
//!
//! # KPI
//!
//! `TimetableKpi` summarizes a timetable: lesson count, per-classroom and
//! average utilization, busiest classroom and most popular course type.

mod kpi;
mod timetable;

pub use kpi::TimetableKpi;
pub use timetable::Timetable;
