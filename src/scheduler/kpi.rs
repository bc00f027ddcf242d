//! Timetable summary metrics (KPIs).
//!
//! Computes a one-shot snapshot of how busy the week is.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Lesson count | Placed lessons |
//! | Utilization | Booked cells / 25, in percent, per classroom |
//! | Avg Utilization | Mean over registered classrooms |
//! | Busiest Classroom | Highest utilization, first registered wins ties |
//! | Most Popular Type | Course type with the most lessons |

use crate::models::CourseType;

use super::Timetable;

/// Timetable performance indicators.
///
/// Percentages are in the 0.0..=100.0 range.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableKpi {
    /// Number of placed lessons.
    pub lesson_count: usize,
    /// Per-classroom utilization, in registry order.
    pub utilization_by_classroom: Vec<(String, f64)>,
    /// Mean utilization across registered classrooms.
    pub avg_utilization: f64,
    /// Classroom with the highest utilization.
    pub busiest_classroom: Option<String>,
    /// Course type with the most lessons.
    pub most_popular_course_type: Option<CourseType>,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable.
    pub fn calculate(timetable: &Timetable) -> Self {
        let utilization_by_classroom: Vec<(String, f64)> = timetable
            .registry()
            .classrooms()
            .iter()
            .map(|c| (c.number.clone(), timetable.classroom_utilization(&c.number)))
            .collect();

        let avg_utilization = if utilization_by_classroom.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_classroom.iter().map(|(_, u)| u).sum();
            sum / utilization_by_classroom.len() as f64
        };

        let busiest_classroom = utilization_by_classroom
            .iter()
            .filter(|(_, u)| *u > 0.0)
            .fold(None::<&(String, f64)>, |best, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .map(|(number, _)| number.clone());

        Self {
            lesson_count: timetable.lessons().len(),
            utilization_by_classroom,
            avg_utilization,
            busiest_classroom,
            most_popular_course_type: timetable.most_popular_course_type(),
        }
    }

    /// Utilization of one classroom, if registered.
    pub fn utilization_of(&self, classroom_number: &str) -> Option<f64> {
        self.utilization_by_classroom
            .iter()
            .find(|(number, _)| number == classroom_number)
            .map(|(_, u)| *u)
    }
}
