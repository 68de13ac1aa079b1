//! Domain logic for the joke service.
//!
//! Pure types and algorithms with no database or HTTP dependencies: the
//! error type shared by every layer, punchline validation, and the
//! list/filter/paginate routine applied to already-fetched records.

pub mod error;
pub mod listing;
pub mod types;
pub mod validation;
