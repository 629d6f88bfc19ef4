//! Best-effort date formatting and age/quarter helpers.
//!
//! Stored date fields come from several generations of data entry, so
//! formatting is total: anything unparseable passes through unchanged
//! rather than failing a whole masterlist render.

use chrono::{DateTime, Datelike, NaiveDate};

/// Month abbreviations for the `MMM-DD-YYYY` display format.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a raw date string as `MMM-DD-YYYY`.
///
/// Parse order: RFC 3339 timestamp, then plain `YYYY-MM-DD`, then an
/// already-formatted `MMM-DD-YYYY` token split. If nothing parses the
/// input is returned unchanged: `"Never"`, empty strings, and garbage
/// all survive the round trip. Never fails.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return format_naive(dt.date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format_naive(date);
    }

    // Token split for values already in MMM-DD-YYYY shape; re-emitting
    // them normalizes casing of the month abbreviation.
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() == 3 {
        let month = MONTH_ABBREVS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(parts[0]));
        if let (Some(m), Ok(d), Ok(y)) = (month, parts[1].parse::<u32>(), parts[2].parse::<i32>()) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m as u32 + 1, d) {
                return format_naive(date);
            }
        }
    }

    raw.to_string()
}

/// Render a parsed date as `MMM-DD-YYYY`.
pub fn format_naive(date: NaiveDate) -> String {
    format!(
        "{}-{:02}-{}",
        MONTH_ABBREVS[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Whole years elapsed between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Calendar quarter (1..=4) a claim date falls in.
pub fn claim_quarter(date: NaiveDate) -> u8 {
    ((date.month0() / 3) + 1) as u8
}
