use std::collections::HashSet;

use offpeak_core::Destination;
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A group of destinations offered to travellers from matching origins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Region identifier, e.g. `"europe"`.
    pub id: String,
    /// Whether this region serves origins that match no other region.
    #[serde(default)]
    pub default: bool,
    /// Lower-case words or phrases that select this region.
    #[serde(default)]
    pub origin_keywords: Vec<String>,
    /// Destinations in catalog order.
    pub destinations: Vec<Destination>,
}

impl Region {
    /// Report whether `origin` mentions any of the region's keywords.
    ///
    /// Matching is case-insensitive and only counts whole words, so `"us"`
    /// matches `"Chicago, US"` but not `"Brussels"`.
    #[must_use]
    pub fn matches_origin(&self, origin: &str) -> bool {
        let lowered = origin.to_lowercase();
        self.origin_keywords
            .iter()
            .any(|keyword| contains_phrase(&lowered, &keyword.to_lowercase()))
    }

    pub(super) fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for destination in &self.destinations {
            destination
                .validate()
                .map_err(|source| CatalogError::InvalidDestination {
                    region: self.id.clone(),
                    id: destination.id.clone(),
                    source,
                })?;
            if !seen.insert(destination.id.as_str()) {
                return Err(CatalogError::DuplicateDestination {
                    region: self.id.clone(),
                    id: destination.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack.get(..start).and_then(|s| s.chars().next_back());
        let after = haystack
            .get(start + matched.len()..)
            .and_then(|s| s.chars().next());
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
