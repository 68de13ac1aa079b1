//! List, filter, and paginate jokes.
//!
//! [`list_page`] takes the records already fetched from the store (all of
//! them, or the ones matching `filter`) and shapes the response:
//!
//! 1. `random` replaces the set with one uniformly chosen record.
//! 2. `qty` truncates the set to at most that many records.
//! 3. `page` / `perPage` take a window over the *truncated* set.
//!
//! Truncation happens before the page window, so `qty` also bounds how many
//! pages are reachable.

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;

/// Page size when `perPage` is omitted or not positive.
pub const DEFAULT_PER_PAGE: i64 = 5;

/// Typed listing parameters. Every field is optional on the wire.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub random: bool,
    /// 1-based page number.
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub qty: Option<i64>,
}

/// The `jokes` field of a listing: a list, or a bare record for `random`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Selection<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Selection<T> {
    pub fn len(&self) -> usize {
        match self {
            Selection::Many(items) => items.len(),
            Selection::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Response body for `GET /jokes`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JokePage<T> {
    pub jokes: Selection<T>,
    /// 1-based page number echoed back.
    pub page: i64,
    pub jokes_per_page: i64,
    /// Count after `qty` clamping, not the size of the returned window.
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Apply the listing rules to `records`, which must already be filtered and
/// in primary-key order.
///
/// Fails with [`CoreError::NothingToPick`] when `random` is requested over an
/// empty set.
pub fn list_page<T, R>(
    mut records: Vec<T>,
    query: &ListQuery,
    rng: &mut R,
) -> Result<JokePage<T>, CoreError>
where
    R: Rng,
{
    let selection = if query.random {
        if records.is_empty() {
            return Err(CoreError::NothingToPick { entity: "joke" });
        }
        let index = rng.random_range(0..records.len());
        Selection::One(records.swap_remove(index))
    } else {
        Selection::Many(records)
    };

    // Zero-based internally.
    let page = query.page.map_or(0, |p| p.max(1) - 1);
    let per_page = query
        .per_page
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_PER_PAGE);
    let offset = page.saturating_mul(per_page);

    let total = i64::try_from(selection.len()).unwrap_or(i64::MAX);
    let qty = match query.qty {
        Some(requested) if requested > total => total,
        Some(requested) if requested < 1 => 1,
        Some(requested) => requested,
        None => total,
    };

    let jokes = match selection {
        Selection::Many(records) if total > 1 => Selection::Many(
            records
                .into_iter()
                .take(to_usize(qty))
                .skip(to_usize(offset))
                .take(to_usize(per_page))
                .collect(),
        ),
        other => other,
    };

    Ok(JokePage {
        jokes,
        page: page + 1,
        jokes_per_page: per_page,
        total: qty,
        filter: query.filter.clone(),
    })
}

fn to_usize(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
