//! Timetable demo binary.
//!
//! Seeds a timetable and walks through every query and mutation, printing
//! the results.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo seed
//! cargo run --bin timetable-demo
//!
//! # Custom seed file
//! TIMETABLE_SEED=seed.toml cargo run --bin timetable-demo
//! ```
//!
//! # Environment Variables
//!
//! - `TIMETABLE_SEED`: Path to a TOML seed (default: built-in demo seed)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use u_timetable::models::{DayOfWeek, Lesson, TimeSlot};
use u_timetable::validation::audit_registry;
use u_timetable::{Timetable, TimetableConfig, TimetableKpi};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::var("TIMETABLE_SEED") {
        Ok(path) => {
            info!("Loading seed from {}", path);
            match TimetableConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Err(_) => TimetableConfig::demo(),
    };

    let (mut timetable, rejected) = Timetable::from_config(config);
    for conflict in &rejected {
        println!("Rejected seed lesson: {conflict}");
    }
    if let Err(errors) = audit_registry(timetable.registry()) {
        for e in errors {
            println!("Audit: {}", e.message);
        }
    }

    print_registry(&timetable);

    println!("\nFree classrooms on Monday 8:30-10:00:");
    println!(
        "{:?}",
        timetable.find_available_classrooms(TimeSlot::First, DayOfWeek::Monday)
    );
    println!("Free classrooms on Wednesday 12:15-13:45:");
    println!(
        "{:?}",
        timetable.find_available_classrooms(TimeSlot::Third, DayOfWeek::Wednesday)
    );

    for professor in timetable.registry().professors() {
        println!("\nSchedule of {}:", professor.name);
        for lesson in timetable.professor_schedule(professor.id) {
            println!("  {lesson}");
        }
    }

    let candidate = Lesson::new(1, 1, "102", DayOfWeek::Monday, TimeSlot::First);
    println!("\nConflict check for ({candidate}):");
    match timetable.validate(&candidate) {
        Some(conflict) => println!("  {conflict}"),
        None => println!("  no conflict"),
    }

    println!("\nReassigning course 1 to room 102:");
    match timetable.reassign_classroom(1, "102") {
        Ok(()) => println!("  classroom changed"),
        Err(e) => println!("  failed: {e}"),
    }
    print_lessons(&timetable);

    println!("\nCancelling course 1:");
    println!("  {} lesson(s) removed", timetable.cancel_lesson(1));
    print_lessons(&timetable);

    for room in ["101", "103"] {
        println!(
            "\nUtilization of room {room}: {}%",
            timetable.classroom_utilization(room)
        );
    }

    match timetable.most_popular_course_type() {
        Some(course_type) => println!("\nMost popular course type: {course_type}"),
        None => println!("\nMost popular course type: n/a (no lessons)"),
    }

    let kpi = TimetableKpi::calculate(&timetable);
    println!(
        "\nSummary: {} lessons, average utilization {:.1}%, busiest room {}",
        kpi.lesson_count,
        kpi.avg_utilization,
        kpi.busiest_classroom.as_deref().unwrap_or("n/a")
    );

    ExitCode::SUCCESS
}

fn print_registry(timetable: &Timetable) {
    let registry = timetable.registry();

    println!("Professors:");
    for p in registry.professors() {
        println!("  #{} {} ({})", p.id, p.name, p.department);
    }

    println!("Classrooms:");
    for c in registry.classrooms() {
        let projector = if c.has_projector { ", projector" } else { "" };
        println!("  {} ({} seats{projector})", c.number, c.capacity);
    }

    println!("Courses:");
    for c in registry.courses() {
        println!("  #{} {} [{}]", c.id, c.name, c.course_type);
    }

    print_lessons(timetable);
}

fn print_lessons(timetable: &Timetable) {
    println!("Lessons:");
    for lesson in timetable.lessons() {
        println!("  {lesson}");
    }
}
