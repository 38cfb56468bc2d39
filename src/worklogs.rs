//! Worklog Aggregation
//!
//! The card's hours badge is always recomputed from the full worklog list
//! after a mutation, never adjusted incrementally, so it cannot drift from
//! what the backend last confirmed.

use crate::models::Worklog;

/// Sum of logged hours. Pure, order-independent, never below zero;
/// entries whose hours failed the lenient decode contribute 0.0.
pub fn total_hours(entries: &[Worklog]) -> f64 {
    entries
        .iter()
        .map(|wl| if wl.hours.is_finite() { wl.hours } else { 0.0 })
        .sum::<f64>()
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: u32, hours: f64) -> Worklog {
        Worklog {
            id,
            card_id: Some(1),
            hours,
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            note: None,
            user_id: None,
        }
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(total_hours(&[]), 0.0);
    }

    #[test]
    fn test_sum_ignores_order() {
        let a = [entry(1, 1.5), entry(2, 2.0), entry(3, 0.25)];
        let b = [entry(3, 0.25), entry(1, 1.5), entry(2, 2.0)];
        assert_eq!(total_hours(&a), total_hours(&b));
        assert_eq!(total_hours(&a), 3.75);
    }

    #[test]
    fn test_undecodable_hours_count_as_zero() {
        // "bad" on the wire decodes to 0.0 (models::lenient_hours)
        let entries: Vec<Worklog> = serde_json::from_str(
            r#"[
                {"id": 1, "hours": 1.5, "date": "2026-08-01"},
                {"id": 2, "hours": 2, "date": "2026-08-02"},
                {"id": 3, "hours": "bad", "date": "2026-08-03"}
            ]"#,
        )
        .unwrap();
        assert_eq!(total_hours(&entries), 3.5);
    }

    #[test]
    fn test_total_tracks_the_list_after_a_delete() {
        let mut entries = vec![entry(1, 1.5), entry(2, 2.0), entry(3, 0.25)];
        entries.retain(|wl| wl.id != 2);
        assert_eq!(total_hours(&entries), 1.75);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(total_hours(&[entry(1, f64::NAN)]), 0.0);
    }
}
