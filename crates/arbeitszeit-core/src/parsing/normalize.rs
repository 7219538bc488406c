use crate::model::{DayTableRow, Interval, NormalizedDayRecord, RawDayRow, TimesheetTable};
use crate::parsing::time::parse_valid_time;

/// Turn a raw day row into validated times.
///
/// The overall start is interval 1's start. The overall end is interval 2's
/// end when that token is non-blank, otherwise interval 1's end. A non-blank
/// interval 2 end that fails to parse leaves the overall end empty rather
/// than falling back.
pub fn normalize_row(row: &RawDayRow) -> NormalizedDayRecord {
    let intervals = [
        Interval {
            start: parse_valid_time(row.slot(0)),
            end: parse_valid_time(row.slot(1)),
        },
        Interval {
            start: parse_valid_time(row.slot(2)),
            end: parse_valid_time(row.slot(3)),
        },
    ];

    let overall_start = parse_valid_time(row.slot(0));
    let overall_end = if row.slot(3).trim().is_empty() {
        parse_valid_time(row.slot(1))
    } else {
        parse_valid_time(row.slot(3))
    };

    NormalizedDayRecord {
        date: row.date.clone(),
        weekday: row.weekday.clone(),
        intervals,
        overall_start,
        overall_end,
    }
}

pub fn normalize_rows(rows: &[RawDayRow]) -> Vec<NormalizedDayRecord> {
    rows.iter().map(normalize_row).collect()
}

/// Project records onto the export columns, keeping document order.
/// Repeated dates stay repeated.
pub fn project(records: &[NormalizedDayRecord]) -> TimesheetTable {
    let rows = records
        .iter()
        .map(|r| DayTableRow {
            date: r.date.clone(),
            weekday: r.weekday.clone(),
            start_hour: r.overall_start.map(|t| t.hour()),
            start_minute: r.overall_start.map(|t| t.minute()),
            end_hour: r.overall_end.map(|t| t.hour()),
            end_minute: r.overall_end.map(|t| t.minute()),
        })
        .collect();

    TimesheetTable { rows }
}
