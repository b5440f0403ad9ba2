//! Recent-search history and its persistence.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::StoreError, store::KeyValueStore};

/// Store key holding the JSON list of recent searches.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Store key holding the last city that was fetched successfully.
pub const LAST_CITY_KEY: &str = "lastCity";

pub const MAX_RECENT: usize = 5;

/// Upper-cases the first character and lower-cases the rest.
pub fn normalize_city(city: &str) -> String {
    let mut chars = city.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Most-recent-first list of distinct city names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    /// Moves `city` to the front, dropping any case-insensitive duplicate and
    /// anything past [`MAX_RECENT`]. Returns the normalized name.
    pub fn record(&mut self, city: &str) -> String {
        let city = normalize_city(city);
        let key = city.to_lowercase();

        self.0.retain(|existing| existing.to_lowercase() != key);
        self.0.insert(0, city.clone());
        self.0.truncate(MAX_RECENT);

        city
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// [`RecentSearches`] bound to the store it is loaded from and saved to.
#[derive(Debug)]
pub struct SearchHistory {
    store: Box<dyn KeyValueStore>,
    recent: RecentSearches,
}

impl SearchHistory {
    /// Reads the stored list. An unreadable list is logged and treated as empty.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut recent = match store.get(RECENT_SEARCHES_KEY) {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(%err, "ignoring unreadable recent-search list");
                RecentSearches::default()
            }),
            None => RecentSearches::default(),
        };
        recent.0.truncate(MAX_RECENT);

        Self { store, recent }
    }

    pub fn entries(&self) -> &[String] {
        self.recent.as_slice()
    }

    pub fn last_city(&self) -> Option<String> {
        self.store
            .get(LAST_CITY_KEY)
            .filter(|city| !city.trim().is_empty())
    }

    /// Records `city` in memory, then writes both keys.
    ///
    /// The in-memory list is updated even when a write fails. Both writes are
    /// attempted; the first error is returned.
    pub fn record(&mut self, city: &str) -> Result<(), StoreError> {
        let city = self.recent.record(city);

        let recent = serde_json::to_string(&self.recent)
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(RECENT_SEARCHES_KEY, &json));
        let last = self.store.set(LAST_CITY_KEY, &city);
        recent.and(last)
    }

    /// Empties the list and removes both keys. Both removals are attempted;
    /// the first error is returned.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.recent.clear();

        let recent = self.store.remove(RECENT_SEARCHES_KEY);
        let last = self.store.remove(LAST_CITY_KEY);
        recent.and(last)
    }
}
