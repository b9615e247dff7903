//! Date formatting for admin lists and date inputs

use chrono::{DateTime, NaiveDate, Utc};

/// "2024-03-15T14:02:26Z" -> "Mar 15, 2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

/// "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Value for `<input type="date">`
pub fn to_date_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// `<input type="date">` value to the end of that day (UTC); blank or invalid gives `None`
pub fn parse_date_input(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(23, 59, 59)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&t), "Mar 5, 2024 14:02");
        assert_eq!(format_date(&t), "Mar 5, 2024");
        assert_eq!(to_date_input(&t), "2024-03-05");
    }

    #[test]
    fn test_parse_date_input() {
        let parsed = parse_date_input("2024-12-31").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap());
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("31.12.2024"), None);
    }
}
