//! Query parameter types for API handlers.

use std::fmt::Display;
use std::str::FromStr;

use joke_core::listing::ListQuery;
use serde::{Deserialize, Deserializer};

/// Query parameters accepted by `GET /jokes`.
///
/// Blank numeric values are treated as absent. `random` is true for
/// `1`, `true`, `on`, or `yes` (any case) and false for anything else.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJokesParams {
    pub filter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub random: bool,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub per_page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub qty: Option<i64>,
}

impl From<ListJokesParams> for ListQuery {
    fn from(params: ListJokesParams) -> Self {
        ListQuery {
            filter: params.filter,
            random: params.random,
            page: params.page,
            per_page: params.per_page,
            qty: params.qty,
        }
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        )
    }))
}

fn deserialize_blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
