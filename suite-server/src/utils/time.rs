//! Business-day helpers
//!
//! Records carry UTC timestamps; "today" is always computed in the
//! configured business timezone.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Current business date
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Business date a timestamp falls on
pub fn business_date(ts: DateTime<Utc>, tz: Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}

/// Reject dates after today (business timezone)
pub fn validate_not_future(date: NaiveDate, tz: Tz) -> AppResult<()> {
    let today = today(tz);
    if date > today {
        return Err(AppError::validation(format!(
            "Date {} is in the future (today is {})",
            date, today
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Africa::Casablanca;

    #[test]
    fn parse_date_accepts_iso_only() {
        assert_eq!(
            parse_date("2025-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(parse_date("09/03/2025").is_err());
    }

    #[test]
    fn business_date_uses_timezone() {
        // 23:30 UTC on Jan 1st is already Jan 2nd in UTC+1
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 23, 30, 0).unwrap();
        assert_eq!(
            business_date(ts, chrono_tz::Europe::Paris),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        );
        assert_eq!(
            business_date(ts, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn future_dates_are_rejected() {
        let tomorrow = today(Casablanca).succ_opt().unwrap();
        assert!(validate_not_future(tomorrow, Casablanca).is_err());
        assert!(validate_not_future(today(Casablanca), Casablanca).is_ok());
    }
}
