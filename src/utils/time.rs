use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rand::Rng;

/// Day/month/year without padding. `en-IN`, `hi-IN` and `te-IN` all print
/// short dates this way, with Latin digits.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Indian Standard Time, UTC+05:30.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Hour and minute of a chat message timestamp, in IST.
pub fn format_clock(dt: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(ist) => dt.with_timezone(&ist).format("%H:%M").to_string(),
        None => dt.format("%H:%M").to_string(),
    }
}

/// Minutes shown in the "last updated" badge, random in `[0, 30)`.
pub fn last_updated_minutes() -> u32 {
    rand::thread_rng().gen_range(0..30)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_are_unpadded() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date(date), "5/3/2025");
        let date = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
        assert_eq!(format_date(date), "28/12/2025");
    }

    #[test]
    fn clock_is_zero_padded() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 20, 3, 5, 0).unwrap();
        assert_eq!(format_clock(dt), "08:35");
    }

    #[test]
    fn clock_shows_indian_time() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 20, 9, 5, 0).unwrap();
        assert_eq!(format_clock(dt), "14:35");
        let late = Utc.with_ymd_and_hms(2025, 1, 20, 20, 45, 0).unwrap();
        assert_eq!(format_clock(late), "02:15");
    }

    #[test]
    fn last_updated_is_under_half_an_hour() {
        for _ in 0..100 {
            assert!(last_updated_minutes() < 30);
        }
    }
}
