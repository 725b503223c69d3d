/// Utilities for date formatting and the invoice date/number.
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Format an ISO date or datetime as DD/MM/YYYY.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Today's date as `YYYY-MM-DD`, the value a date input expects.
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Sale number `SALE-<year>-<n>` with `n` in `0..1000` from the clock.
pub fn sale_number(now: DateTime<Utc>) -> String {
    format!("SALE-{}-{}", now.year(), now.timestamp_millis() % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_sale_number() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let number = sale_number(now);
        assert!(number.starts_with("SALE-2024-"));
        let suffix: u64 = number.rsplit('-').next().unwrap().parse().unwrap();
        assert!(suffix < 1000);
    }
}
