use chrono::{Datelike, NaiveDate};
use studyscan::parse_date;
use test_case::test_case;

#[test]
fn test_round_trip_formatting() {
    let samples = [(2024, 3, 14), (1999, 12, 31), (2001, 1, 1), (2049, 6, 30), (1776, 7, 4)];
    for (year, month, day) in samples {
        let formatted = format!("{:02}/{:02}/{:04}", month, day, year);
        let parsed = parse_date(&formatted).unwrap_or_else(|| panic!("failed to parse {}", formatted));
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day()),
            (year, month, day),
            "round trip failed for {}",
            formatted
        );
    }
}

#[test_case("01/01/00", 2000; "zero maps to 2000")]
#[test_case("01/01/49", 2049; "forty nine maps to 2049")]
#[test_case("01/01/50", 1950; "fifty maps to 1950")]
#[test_case("01/01/99", 1999; "ninety nine maps to 1999")]
fn test_two_digit_year_pivot(input: &str, year: i32) {
    assert_eq!(parse_date(input), NaiveDate::from_ymd_opt(year, 1, 1));
}

#[test]
fn test_four_digit_year_passes_through() {
    assert_eq!(parse_date("7/4/1776"), NaiveDate::from_ymd_opt(1776, 7, 4));
}

#[test]
fn test_separator_equivalence() {
    let slash = parse_date("3/14/2024");
    let dash = parse_date("3-14-2024");
    assert!(slash.is_some());
    assert_eq!(slash, dash);
}

#[test]
fn test_extra_groups_use_first_three() {
    // Only the leading month/day/year shaped group matters
    assert_eq!(parse_date("1/2/33/44"), NaiveDate::from_ymd_opt(2033, 1, 2));
}

#[test]
fn test_unparseable_inputs_return_none() {
    for input in ["", "   ", "no date here", "a/b/c", "99", "12/31", "//--//"] {
        assert_eq!(parse_date(input), None, "expected None for {:?}", input);
    }
}

#[test]
fn test_freeform_parse_of_original_string() {
    // Not numeric-token shaped, recovered by the generic fallback
    assert_eq!(parse_date("April 10, 2025"), NaiveDate::from_ymd_opt(2025, 4, 10));
    assert_eq!(parse_date("2024-5-1"), NaiveDate::from_ymd_opt(2024, 5, 1));
}
