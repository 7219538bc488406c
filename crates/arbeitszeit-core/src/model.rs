use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of time slots read per day: start/end of two intervals.
pub const TIME_SLOTS: usize = 4;

/// One calendar-day row as it appears in the timesheet table, before any
/// time parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDayRow {
    pub page_number: usize,
    pub date: String,
    pub weekday: String,
    /// `HH:MM` tokens in document order: von1, bis1, von2, bis2.
    pub raw_times: Vec<String>,
}

impl RawDayRow {
    /// The token in slot `i`, or `""` when the row has fewer tokens.
    pub fn slot(&self, i: usize) -> &str {
        self.raw_times.get(i).map(|s| s.as_str()).unwrap_or("")
    }
}

/// A time of day with hour in 0..=23 and minute in 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Returns `None` when either component is out of range. Values are never
    /// clamped.
    pub fn new(hour: u32, minute: u32) -> Option<TimeOfDay> {
        if hour <= 23 && minute <= 59 {
            Some(TimeOfDay {
                hour: hour as u8,
                minute: minute as u8,
            })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDayRecord {
    pub date: String,
    pub weekday: String,
    pub intervals: [Interval; 2],
    pub overall_start: Option<TimeOfDay>,
    pub overall_end: Option<TimeOfDay>,
}

impl NormalizedDayRecord {
    pub fn is_weekend(&self) -> bool {
        is_weekend(&self.weekday)
    }
}

/// One line of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTableRow {
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Wochentag")]
    pub weekday: String,
    #[serde(rename = "Von_gesamt_Stunde")]
    pub start_hour: Option<u8>,
    #[serde(rename = "Von_gesamt_Minute")]
    pub start_minute: Option<u8>,
    #[serde(rename = "Bis_gesamt_Stunde")]
    pub end_hour: Option<u8>,
    #[serde(rename = "Bis_gesamt_Minute")]
    pub end_minute: Option<u8>,
}

impl DayTableRow {
    pub fn is_weekend(&self) -> bool {
        is_weekend(&self.weekday)
    }

    /// The four time cells in column order.
    pub fn time_cells(&self) -> [Option<u8>; 4] {
        [
            self.start_hour,
            self.start_minute,
            self.end_hour,
            self.end_minute,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetTable {
    pub rows: Vec<DayTableRow>,
}

impl TimesheetTable {
    pub const COLUMNS: [&'static str; 6] = [
        "Datum",
        "Wochentag",
        "Von_gesamt_Stunde",
        "Von_gesamt_Minute",
        "Bis_gesamt_Stunde",
        "Bis_gesamt_Minute",
    ];

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// True for Saturday/Sunday abbreviations (German `Sa`/`So`, English
/// `Sat`/`Sun`).
pub fn is_weekend(weekday: &str) -> bool {
    let lower = weekday.trim().trim_end_matches('.').to_lowercase();
    matches!(lower.as_str(), "sa" | "so" | "sat" | "sun")
}
