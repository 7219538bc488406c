use crate::model::TimeOfDay;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading 1–2 hour digits, an optional `:` or `.`, then two minute digits.
/// Anchored at the start only; trailing text is ignored.
static TIME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})[:.]?([0-9]{2})").unwrap());

/// Parse a time token into raw `(hour, minute)` numbers.
///
/// Lenient on the separator and the hour width so that `"9.30"` and `"930"`
/// still parse. The result is not range-checked; see [`validate`].
///
/// - "08:15" -> (8, 15)
/// - "9.30"  -> (9, 30)
/// - "930"   -> (9, 30)
/// - "123:45" -> (1, 23)
/// - "" or "ab:cd" -> None
pub fn parse_time(token: &str) -> Option<(u32, u32)> {
    let caps = TIME_TOKEN.captures(token)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    Some((hour, minute))
}

/// Range-check a parsed pair. Out-of-range values are dropped, never clamped.
pub fn validate(hour: u32, minute: u32) -> Option<TimeOfDay> {
    TimeOfDay::new(hour, minute)
}

pub fn parse_valid_time(token: &str) -> Option<TimeOfDay> {
    parse_time(token).and_then(|(h, m)| validate(h, m))
}
