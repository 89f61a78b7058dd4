/// Utilities for the dates shown and picked on the rentals page
///
/// The backend sends ISO date-times; the page only ever works with the
/// `YYYY-MM-DD` day portion.
use chrono::{Local, NaiveDate};
use contracts::domain::a001_rental::date_part;
use serde::Deserialize;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Day portion of an ISO datetime string
/// Example: "2024-07-01T14:00:00+02:00" -> "2024-07-01"
pub fn format_day(datetime_str: &str) -> String {
    date_part(datetime_str).to_string()
}

/// Current local day, default for the selected date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse the value of an `<input type="date">` (yyyy-mm-dd)
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

/// Render a day for an `<input type="date">`
pub fn input_value(day: NaiveDate) -> String {
    day.format(INPUT_FORMAT).to_string()
}

#[derive(Debug, Default, Deserialize)]
struct DayQuery {
    date: Option<String>,
}

/// Selected day passed in the page URL, e.g. `?date=2024-07-01`
pub fn day_from_query(search: &str) -> Option<NaiveDate> {
    let query: DayQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.date.as_deref().and_then(parse_input_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        assert_eq!(format_day("2024-07-01T14:00:00+02:00"), "2024-07-01");
        assert_eq!(format_day("2024-07-01"), "2024-07-01");
    }

    #[test]
    fn test_input_round_trip() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(input_value(day), "2024-07-01");
        assert_eq!(parse_input_date("2024-07-01"), Some(day));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("01/07/2024"), None);
    }

    #[test]
    fn test_day_from_query() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert_eq!(day_from_query("?date=2024-07-02"), Some(day));
        assert_eq!(day_from_query("date=2024-07-02&foo=bar"), Some(day));
        assert_eq!(day_from_query(""), None);
        assert_eq!(day_from_query("?date=tomorrow"), None);
    }
}
