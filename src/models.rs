//! Frontend Models
//!
//! Typed records for backend entities, decoded once at the api boundary
//! so the rest of the app never branches on wire shape.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// The fixed board columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Todo = 1,
    InProgress = 2,
    Done = 3,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Column> {
        match id {
            1 => Some(Column::Todo),
            2 => Some(Column::InProgress),
            3 => Some(Column::Done),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Todo => "To do",
            Column::InProgress => "In progress",
            Column::Done => "Done",
        }
    }
}

/// Card as the backend sends it.
///
/// `list_id` may be absent, null or out of range on older rows; it is
/// normalized to a `Column` by the registry, never rewritten here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardDto {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub board_id: Option<u32>,
    #[serde(default)]
    pub list_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub total_hours: f64,
}

/// Card as the board works with it
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub column: Column,
    pub total_hours: f64,
}

/// Worklog data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Worklog {
    pub id: u32,
    #[serde(default)]
    pub card_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub hours: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub user_id: Option<u32>,
}

/// Signed-in user identity, as much of it as the session knows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
}

/// Accept hours as a number, a numeric string, or anything else (=> 0.0).
/// Mirrors what the backend has historically emitted for this field.
fn lenient_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) if n.is_finite() => n,
        Raw::Num(_) => 0.0,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
        Raw::Other(_) => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_dto_minimal() {
        let dto: CardDto = serde_json::from_str(r#"{"id": 7, "title": "Triage"}"#).unwrap();
        assert_eq!(dto.id, 7);
        assert_eq!(dto.list_id, None);
        assert_eq!(dto.due_date, None);
        assert_eq!(dto.total_hours, 0.0);
    }

    #[test]
    fn test_card_dto_ignores_unknown_fields() {
        let dto: CardDto = serde_json::from_str(
            r#"{"id": 1, "title": "x", "list_id": 2, "order": 4, "user_id": 9, "created_at": "2026-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(dto.list_id, Some(2));
    }

    #[test]
    fn test_lenient_hours_shapes() {
        let wl: Worklog =
            serde_json::from_str(r#"{"id": 1, "hours": "1.5", "date": "2026-08-01"}"#).unwrap();
        assert_eq!(wl.hours, 1.5);

        let wl: Worklog =
            serde_json::from_str(r#"{"id": 2, "hours": "bad", "date": "2026-08-01"}"#).unwrap();
        assert_eq!(wl.hours, 0.0);

        let wl: Worklog =
            serde_json::from_str(r#"{"id": 3, "hours": null, "date": "2026-08-01"}"#).unwrap();
        assert_eq!(wl.hours, 0.0);

        let wl: Worklog = serde_json::from_str(r#"{"id": 4, "date": "2026-08-01"}"#).unwrap();
        assert_eq!(wl.hours, 0.0);
    }

    #[test]
    fn test_column_ids_round_trip() {
        for col in Column::ALL {
            assert_eq!(Column::from_id(col.id()), Some(col));
        }
        assert_eq!(Column::from_id(0), None);
        assert_eq!(Column::from_id(4), None);
    }
}
