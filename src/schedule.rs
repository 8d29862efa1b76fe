//! Schedule extraction from raw document text
//!
//! Given the concatenated text layer of a schedule PDF, infer discrete
//! calendar entries. Three strategies are tried in order and the first
//! one that applies wins:
//!
//! 1. structured label/value fields (`Date:`, `Title:`, `Notes:` ...)
//! 2. bare date-shaped substrings with the rest of the line as title
//! 3. a single generic item so the caller always has something to show
//!
//! Extraction is a pure function over the input text: no I/O, no state
//! between calls, and it returns a (possibly empty) list rather than
//! failing.

use chrono::{Local, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::date_parser::parse_date;

// Structured fields: label, colon, value. Matched case-insensitively over
// the whole document, every occurrence.
static DATE_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Date|On|Schedule for|Due):\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap()
});
static TITLE_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Title|Topic|Subject|Task):\s*([^\n]+)").unwrap());
static DESC_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Description|Details|Notes):\s*([^\n]+)").unwrap());

// Unlabelled date-shaped substring, e.g. "6/10/2024" or "6-10-24".
static BARE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").unwrap());

/// One inferred study-calendar entry.
///
/// `title` and `description` are always non-empty (placeholders are
/// substituted where the source text had nothing usable); `date` is
/// `None` when no parseable date was found for the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedScheduleItem {
    pub date: Option<NaiveDate>,
    pub title: String,
    pub description: String,
}

/// Extract schedule items from the full text of a document.
///
/// `total_pages` is the page count of the source document, reported in
/// the description of items inferred from bare dates. The returned list
/// is ordered by position of discovery in the text and is never empty:
/// when no date pattern of any kind is found, a single generic item
/// dated today is returned instead.
pub fn extract_schedule(full_text: &str, total_pages: usize) -> Vec<ExtractedScheduleItem> {
    extract_schedule_at(full_text, total_pages, Local::now().date_naive())
}

/// Same as [`extract_schedule`] but with an explicit "today" for the
/// last-resort fallback item, so callers and tests stay deterministic.
pub fn extract_schedule_at(
    full_text: &str,
    total_pages: usize,
    today: NaiveDate,
) -> Vec<ExtractedScheduleItem> {
    debug!("scanning {} characters of document text", full_text.len());

    let date_fields: Vec<&str> = DATE_FIELD_RE
        .captures_iter(full_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    let mut items = if date_fields.is_empty() {
        // No structured fields, try to infer items from bare dates
        extract_inferred(full_text, total_pages)
    } else {
        extract_structured(full_text, &date_fields)
    };

    // If nothing could be extracted, create a single generic item
    if items.is_empty() {
        debug!("no date patterns found, emitting fallback item");
        items.push(fallback_item(full_text, today));
    }

    debug!("extracted {} schedule item(s)", items.len());
    items
}

/// Structured extraction: pair the i-th date field with the i-th title
/// and description fields. Field counts may differ; missing sides get
/// placeholders, and an item without a date field parses to `date: None`.
fn extract_structured(full_text: &str, date_fields: &[&str]) -> Vec<ExtractedScheduleItem> {
    let titles: Vec<&str> = TITLE_FIELD_RE
        .captures_iter(full_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    let descriptions: Vec<&str> = DESC_FIELD_RE
        .captures_iter(full_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    debug!(
        "structured fields: {} date(s), {} title(s), {} description(s)",
        date_fields.len(),
        titles.len(),
        descriptions.len()
    );

    (0..date_fields.len().max(titles.len()))
        .map(|i| ExtractedScheduleItem {
            date: date_fields.get(i).and_then(|raw| parse_date(raw)),
            title: titles
                .get(i)
                .map(|t| t.to_string())
                .unwrap_or_else(|| format!("Study Session {}", i + 1)),
            description: descriptions
                .get(i)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "Extracted from uploaded schedule".to_string()),
        })
        .collect()
}

/// Unstructured inference: every bare date becomes an item, titled with
/// whatever follows the date on the first line that contains it.
fn extract_inferred(full_text: &str, total_pages: usize) -> Vec<ExtractedScheduleItem> {
    BARE_DATE_RE
        .find_iter(full_text)
        .enumerate()
        .map(|(i, m)| {
            let date_str = m.as_str();

            // Title is the trailing text of the first line carrying this date
            let title = full_text
                .lines()
                .find(|line| line.contains(date_str))
                .and_then(|line| line.split(date_str).nth(1))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Study Session {}", i + 1));

            ExtractedScheduleItem {
                date: parse_date(date_str),
                title,
                description: format!("Extracted from schedule PDF (page {})", total_pages),
            }
        })
        .collect()
}

fn fallback_item(full_text: &str, today: NaiveDate) -> ExtractedScheduleItem {
    let preview: String = full_text.chars().take(100).collect();
    ExtractedScheduleItem {
        date: Some(today),
        title: "Study Session from PDF".to_string(),
        description: format!("{}...", preview),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_pairing_with_placeholders() {
        // Two titles against one date: the second item has no date and a
        // placeholder description
        let text = "Date: 5/1/2024\nTitle: Algebra\nTitle: Geometry";
        let items = extract_schedule(text, 1);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Algebra");
        assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(items[1].title, "Geometry");
        assert_eq!(items[1].date, None);
        assert_eq!(items[1].description, "Extracted from uploaded schedule");
    }

    #[test]
    fn test_field_labels_are_case_insensitive() {
        let text = "due: 5/1/2024\ntask: Read chapter 4";
        let items = extract_schedule(text, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Read chapter 4");
        assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_inferred_title_from_line_remainder() {
        let items = extract_schedule("Review session 6/10/2024 in room 204", 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "in room 204");
        assert_eq!(items[0].description, "Extracted from schedule PDF (page 2)");
    }

    #[test]
    fn test_fallback_preview_is_char_safe() {
        // Multi-byte input must not split a character in the preview
        let text = "é".repeat(150);
        let items = extract_schedule_at(&text, 1, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description.chars().count(), 103);
    }
}
