//! Best-effort parsing of loose date tokens found in schedule text
//!
//! Schedule PDFs carry dates in whatever shape the author typed them:
//! `3/14/2024`, `03-14-24`, sometimes `May 1, 2024` in a sentence. This
//! module turns such a token into a `NaiveDate` or reports "unparseable"
//! with `None`. It never panics; a failed parse is an expected outcome,
//! not an error.

use chrono::{NaiveDate, TimeDelta};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Numeric month/day/year token, `/` or `-` separated. Matched against the
/// cleaned input; only the first such group in the token is used.
static NUMERIC_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})").unwrap());

/// Fallback formats tried against the original (uncleaned) input when the
/// token is not numeric month/day/year shaped.
const FREEFORM_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a date from a string in various formats.
///
/// Interprets numeric tokens positionally as month/day/year. Two-digit
/// years are pivoted at 50: `00-49` become `2000-2049`, `50-99` become
/// `1950-1999`. Out-of-range months and days roll over into adjacent
/// months and years rather than failing, so `2/31/2024` is March 2nd.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Drop everything that is not part of a numeric date token
    let cleaned: String =
        raw.chars().filter(|&c| c.is_ascii_digit() || c == '/' || c == '-').collect();

    if let Some(caps) = NUMERIC_DATE_RE.captures(&cleaned) {
        let month: i32 = caps[1].parse().ok()?;
        let day: i64 = caps[2].parse().ok()?;
        let mut year: i32 = caps[3].parse().ok()?;

        // Handle 2-digit and 4-digit years
        if year < 100 {
            year += if year < 50 { 2000 } else { 1900 };
        }

        return rollover_ymd(year, month - 1, day);
    }

    // Fallback to generic parsing of the original string
    freeform_date(raw)
}

/// Build a date from a year, 0-based month and 1-based day, letting
/// out-of-range components overflow into neighbouring months/years.
fn rollover_ymd(year: i32, month0: i32, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = (month0.rem_euclid(12) + 1) as u32;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::days(day - 1))
}

fn freeform_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in FREEFORM_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    debug!("could not parse date from {:?}", raw);
    None
}
