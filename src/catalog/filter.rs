//! Pure filter over the in-memory character list.

use crate::api::{Character, CharacterStatus};

/// Status half of the filter criteria: everything, or one exact status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CharacterStatus),
}

/// Transient view criteria: a free-text name query and a status selector.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the name. Empty means
    /// no text filtering.
    pub query: String,
    pub status: StatusFilter,
}

/// Select the entries matching the criteria, preserving input order.
///
/// An entry is included iff the query is empty or its name contains the
/// query case-insensitively, and the status selector is `All` or equals
/// its status exactly (case-sensitive). Deterministic and idempotent; the
/// result is always an order-preserving subset of the input.
pub fn apply_filters<'a>(list: &'a [Character], criteria: &FilterCriteria) -> Vec<&'a Character> {
    let query = criteria.query.to_lowercase();

    list.iter()
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .filter(|c| match &criteria.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => &c.status == status,
        })
        .collect()
}
