//! Weekly grid model.
//!
//! The timetable covers one fixed teaching week: five weekdays, each split
//! into five fixed time slots. A (day, slot) pair is a grid cell; a
//! classroom or professor can hold at most one lesson per cell.
//!
//! # Wire Format
//! Days and slots serialize as their human labels (`"Monday"`,
//! `"8:30-10:00"`), matching the labels used in seed files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of addressable (day, slot) cells in one week.
pub const WEEKLY_CELLS: usize = DayOfWeek::ALL.len() * TimeSlot::ALL.len();

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// One of the five fixed daily time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 8:30-10:00
    #[serde(rename = "8:30-10:00")]
    First,
    /// 10:15-11:45
    #[serde(rename = "10:15-11:45")]
    Second,
    /// 12:15-13:45
    #[serde(rename = "12:15-13:45")]
    Third,
    /// 14:00-15:30
    #[serde(rename = "14:00-15:30")]
    Fourth,
    /// 15:45-17:15
    #[serde(rename = "15:45-17:15")]
    Fifth,
}

/// Error returned when a day or slot label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: '{label}'")]
pub struct ParseLabelError {
    kind: &'static str,
    label: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

impl DayOfWeek {
    /// All teaching days in week order.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Human label (`"Monday"`).
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
        }
    }
}

impl TimeSlot {
    /// All slots in daily order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::First,
        TimeSlot::Second,
        TimeSlot::Third,
        TimeSlot::Fourth,
        TimeSlot::Fifth,
    ];

    /// Human label (`"8:30-10:00"`).
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::First => "8:30-10:00",
            TimeSlot::Second => "10:15-11:45",
            TimeSlot::Third => "12:15-13:45",
            TimeSlot::Fourth => "14:00-15:30",
            TimeSlot::Fifth => "15:45-17:15",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayOfWeek {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLabelError::new("day", s))
    }
}

impl FromStr for TimeSlot {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .ok_or_else(|| ParseLabelError::new("time slot", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_cells() {
        assert_eq!(WEEKLY_CELLS, 25);
    }

    #[test]
    fn test_labels_parse_back() {
        for day in DayOfWeek::ALL {
            assert_eq!(day.label().parse::<DayOfWeek>(), Ok(day));
        }
        for slot in TimeSlot::ALL {
            assert_eq!(slot.to_string().parse::<TimeSlot>(), Ok(slot));
        }
    }

    #[test]
    fn test_day_parse_is_case_insensitive() {
        assert_eq!("monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!(" FRIDAY ".parse::<DayOfWeek>(), Ok(DayOfWeek::Friday));
    }

    #[test]
    fn test_unknown_labels() {
        let err = "Saturday".parse::<DayOfWeek>().unwrap_err();
        assert_eq!(err.to_string(), "unknown day label: 'Saturday'");
        assert!("9:00-10:30".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&TimeSlot::Second).unwrap();
        assert_eq!(json, "\"10:15-11:45\"");
        let slot: TimeSlot = serde_json::from_str("\"15:45-17:15\"").unwrap();
        assert_eq!(slot, TimeSlot::Fifth);
        let day: DayOfWeek = serde_json::from_str("\"Wednesday\"").unwrap();
        assert_eq!(day, DayOfWeek::Wednesday);
    }

    #[test]
    fn test_grid_order() {
        assert!(TimeSlot::First < TimeSlot::Fifth);
        assert!(DayOfWeek::Monday < DayOfWeek::Friday);
    }
}
