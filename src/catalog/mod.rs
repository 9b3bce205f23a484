//! Client-side filtering and aggregation over the fetched catalog.

mod filter;
mod stats;

pub use filter::{apply_filters, FilterCriteria, StatusFilter};
pub use stats::{compute_stats, Stats};

#[cfg(test)]
pub(crate) mod testutil {
    use crate::api::{Character, CharacterStatus, ResourceRef};
    use chrono::{TimeZone, Utc};

    /// Build a catalog entry with the given identity; everything else is
    /// a fixed placeholder.
    pub fn character(id: u64, name: &str, status: CharacterStatus) -> Character {
        Character {
            id,
            name: name.to_string(),
            status,
            species: "Human".to_string(),
            kind: String::new(),
            gender: "unknown".to_string(),
            image: format!("https://example.com/avatar/{id}.jpeg"),
            origin: ResourceRef {
                name: "Earth (C-137)".to_string(),
                url: String::new(),
            },
            location: ResourceRef {
                name: "Citadel of Ricks".to_string(),
                url: String::new(),
            },
            episode: Vec::new(),
            url: format!("https://example.com/character/{id}"),
            created: Utc.with_ymd_and_hms(2017, 11, 4, 18, 48, 46).unwrap(),
        }
    }
}
