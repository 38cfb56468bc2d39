//! Deadline Classifier
//!
//! Maps a card's due date to an urgency tier by calendar day.

use chrono::{Local, NaiveDate};

/// How many days ahead (inclusive) still count as "soon"
const SOON_WINDOW_DAYS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Expired,
    Soon,
    Normal,
}

impl DeadlineStatus {
    /// CSS class used on the card badge
    pub fn css_class(self) -> &'static str {
        match self {
            DeadlineStatus::Expired => "expired",
            DeadlineStatus::Soon => "soon",
            DeadlineStatus::Normal => "normal",
        }
    }
}

/// Classify a due date against a reference day. Time-of-day never enters:
/// both sides are calendar days.
pub fn classify(due: NaiveDate, today: NaiveDate) -> DeadlineStatus {
    let days_left = (due - today).num_days();
    if days_left < 0 {
        DeadlineStatus::Expired
    } else if days_left <= SOON_WINDOW_DAYS {
        DeadlineStatus::Soon
    } else {
        DeadlineStatus::Normal
    }
}

/// Classify against the local wall-clock day
pub fn classify_today(due: NaiveDate) -> DeadlineStatus {
    classify(due, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_window() {
        let today = day(2026, 8, 26);

        assert_eq!(classify(today - Days::new(1), today), DeadlineStatus::Expired);
        assert_eq!(classify(today, today), DeadlineStatus::Soon);
        assert_eq!(classify(today + Days::new(2), today), DeadlineStatus::Soon);
        assert_eq!(classify(today + Days::new(3), today), DeadlineStatus::Normal);
    }

    #[test]
    fn test_classify_across_month_boundary() {
        let today = day(2026, 8, 31);
        assert_eq!(classify(day(2026, 9, 2), today), DeadlineStatus::Soon);
        assert_eq!(classify(day(2026, 9, 3), today), DeadlineStatus::Normal);
        assert_eq!(classify(day(2026, 7, 31), today), DeadlineStatus::Expired);
    }
}
