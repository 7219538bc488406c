use crate::extraction::table::Table;
use crate::model::{RawDayRow, TIME_SLOTS};
use crate::options::FirstRowPolicy;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static TIME_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{2}:[0-9]{2}").unwrap());
static DAY_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.").unwrap());
/// A bare `DD.MM.` token; `01.04.2025` (print stamps, dated remarks) is not a day.
static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.$").unwrap());
static DAY_OF_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.").unwrap());

/// Extract the calendar-day rows from the tables of a document.
///
/// The header row of each table is skipped. A data row becomes a day row when
/// its text starts with `DD.MM.` and its day of month is 01–31; everything
/// else (totals, carry-overs, footnotes) is dropped. The first-row policy is
/// applied once, to the first surviving row of the whole document.
pub fn extract_day_rows(tables: &[Table], policy: FirstRowPolicy) -> Vec<RawDayRow> {
    let mut rows: Vec<RawDayRow> = tables
        .iter()
        .flat_map(|table| {
            table
                .data_rows()
                .iter()
                .filter_map(move |cells| try_parse_day_row(table.page_number, cells))
        })
        .filter(|row| {
            let in_range = DAY_OF_MONTH.is_match(&row.date);
            if !in_range {
                trace!(date = %row.date, "day of month out of range, dropping row");
            }
            in_range
        })
        .collect();

    apply_first_row_policy(&mut rows, policy);
    rows
}

/// Try to read a table row as a day entry.
///
/// Returns None if the row text does not start with a `DD.MM.` date, or if
/// the date token continues past the month (`01.04.2025`).
pub fn try_parse_day_row(page_number: usize, cells: &[String]) -> Option<RawDayRow> {
    let blob = row_blob(cells);
    if !DAY_ENTRY.is_match(&blob) {
        trace!(page = page_number, row = %blob, "not a day entry");
        return None;
    }

    let date_token = blob.split_whitespace().next().unwrap_or("");
    if !DATE_TOKEN.is_match(date_token) {
        trace!(page = page_number, row = %blob, "date token is not DD.MM., not a day entry");
        return None;
    }

    let raw_times = TIME_TOKEN
        .find_iter(&blob)
        .take(TIME_SLOTS)
        .map(|m| m.as_str().to_string())
        .collect();

    let (date, weekday) = date_and_weekday(cells);

    Some(RawDayRow {
        page_number,
        date,
        weekday,
        raw_times,
    })
}

/// Non-empty cells joined by single spaces.
fn row_blob(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Column 0 is the date and column 1 the weekday. When the layout text puts
/// both into one cell (`"01.03. Sa"`), the first cell is split instead.
fn date_and_weekday(cells: &[String]) -> (String, String) {
    let first = cells.first().map(|c| c.trim()).unwrap_or("");

    if let Some((date, rest)) = first.split_once(char::is_whitespace) {
        if DAY_ENTRY.is_match(date) {
            let weekday = rest.split_whitespace().next().unwrap_or("");
            return (date.to_string(), weekday.to_string());
        }
    }

    let weekday = cells.get(1).map(|c| c.trim()).unwrap_or("");
    (first.to_string(), weekday.to_string())
}

fn day_of_month(date: &str) -> Option<u32> {
    date.get(..2)?.parse().ok()
}

fn apply_first_row_policy(rows: &mut Vec<RawDayRow>, policy: FirstRowPolicy) {
    let Some(first) = rows.first() else {
        return;
    };

    let should_drop = match policy {
        FirstRowPolicy::Keep => false,
        FirstRowPolicy::DropFirst => true,
        FirstRowPolicy::DropPreviousMonth => {
            matches!(day_of_month(&first.date), Some(28..=31))
        }
    };

    if should_drop {
        debug!(date = %first.date, %policy, "dropping first day row");
        rows.remove(0);
    }
}
