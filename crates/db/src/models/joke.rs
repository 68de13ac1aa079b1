//! Joke entity model and DTOs.

use joke_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `joke` table.
///
/// `punchline` is nullable in storage; only the validated create path
/// guarantees it is present.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Joke {
    pub id: DbId,
    pub punchline: Option<String>,
}

/// DTO for creating a joke. Presence and blankness are checked by
/// `joke_core::validation::validate_punchline`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJoke {
    pub punchline: Option<String>,
}

/// DTO for updating a joke.
///
/// The outer `Option` records whether the `punchline` key was sent at all;
/// the inner one is the (nullable) value to store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJoke {
    #[serde(default, deserialize_with = "key_present")]
    pub punchline: Option<Option<String>>,
}

fn key_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_missing_from_null() {
        let missing: UpdateJoke = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.punchline, None);

        let null: UpdateJoke = serde_json::from_str(r#"{"punchline":null}"#).unwrap();
        assert_eq!(null.punchline, Some(None));

        let set: UpdateJoke = serde_json::from_str(r#"{"punchline":"y"}"#).unwrap();
        assert_eq!(set.punchline, Some(Some("y".to_string())));
    }

    #[test]
    fn serializes_id_and_punchline() {
        let joke = Joke {
            id: 3,
            punchline: Some("hi".into()),
        };
        assert_eq!(
            serde_json::to_value(&joke).unwrap(),
            serde_json::json!({"id": 3, "punchline": "hi"})
        );
    }
}
