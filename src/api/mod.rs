//! Character API wire types and the page fetcher.

mod client;

pub use client::ApiClient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Life status of a character as reported by the API.
///
/// The API documents `Alive`, `Dead` and `unknown`, matched exactly and
/// case-sensitively. Any other string the API might return is preserved
/// verbatim in `Other` so it still counts toward the catalog total even
/// though it matches no status filter and no stats bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
    Other(String),
}

impl CharacterStatus {
    /// The exact string the API uses for this status.
    pub fn as_str(&self) -> &str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
            CharacterStatus::Other(s) => s,
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Alive" => CharacterStatus::Alive,
            "Dead" => CharacterStatus::Dead,
            "unknown" => CharacterStatus::Unknown,
            _ => CharacterStatus::Other(s),
        }
    }
}

impl From<CharacterStatus> for String {
    fn from(status: CharacterStatus) -> Self {
        match status {
            CharacterStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named link to another API resource (origin or last known location).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// One catalog entry. Immutable once fetched; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// The API calls this field `type`; it is usually empty.
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub image: String,
    pub origin: ResourceRef,
    pub location: ResourceRef,
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

/// Pagination metadata returned with every page.
///
/// Only `pages` (from page 1) is consumed; the rest is carried for
/// completeness of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of the paginated character listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_matches_api_strings_exactly() {
        assert_eq!(CharacterStatus::from("Alive".to_string()), CharacterStatus::Alive);
        assert_eq!(CharacterStatus::from("Dead".to_string()), CharacterStatus::Dead);
        assert_eq!(CharacterStatus::from("unknown".to_string()), CharacterStatus::Unknown);

        // Case matters: "alive" is not the documented "Alive".
        assert_eq!(
            CharacterStatus::from("alive".to_string()),
            CharacterStatus::Other("alive".to_string())
        );
    }

    #[test]
    fn status_round_trips_verbatim() {
        for raw in ["Alive", "Dead", "unknown", "Presumed dead"] {
            let status = CharacterStatus::from(raw.to_string());
            assert_eq!(String::from(status), raw);
        }
    }
}
