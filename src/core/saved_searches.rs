use crate::domain::ports::KeyValueStore;
use crate::domain::search::{CandidateFilters, SavedSearch};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::validate_non_empty_string;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

pub const SAVED_SEARCHES_KEY: &str = "advancedSearchSaved";

/// Named search presets kept as one JSON array under a single store key.
///
/// Updates are read-modify-write of the whole array and are serialized per
/// repository. Share one repository rather than opening several over the
/// same store.
pub struct SavedSearchRepository<S: KeyValueStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> SavedSearchRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| SearchError::StorageError {
            message: "saved search lock poisoned".to_string(),
        })
    }

    pub fn list(&self) -> Result<Vec<SavedSearch>> {
        match self.store.get(SAVED_SEARCHES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn get(&self, id: i64) -> Result<SavedSearch> {
        self.list()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(SearchError::SavedSearchNotFound { id })
    }

    pub fn save(&self, name: &str, query: &str, filters: &CandidateFilters) -> Result<SavedSearch> {
        validate_non_empty_string("name", name)?;

        let _guard = self.lock_writes()?;
        let mut searches = self.list()?;
        let mut id = Utc::now().timestamp_millis();
        // Two saves in the same millisecond must still get distinct ids.
        while searches.iter().any(|s| s.id == id) {
            id += 1;
        }

        let saved = SavedSearch {
            id,
            name: name.trim().to_string(),
            query: query.to_string(),
            filters: filters.clone(),
            created_at: Utc::now(),
            is_favorite: false,
        };
        searches.push(saved.clone());
        self.persist(&searches)?;

        tracing::info!(id = saved.id, name = %saved.name, "saved search stored");
        Ok(saved)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let _guard = self.lock_writes()?;
        let mut searches = self.list()?;
        let before = searches.len();
        searches.retain(|s| s.id != id);
        if searches.len() == before {
            return Err(SearchError::SavedSearchNotFound { id });
        }
        self.persist(&searches)?;
        tracing::info!(id, "saved search deleted");
        Ok(())
    }

    pub fn toggle_favorite(&self, id: i64) -> Result<SavedSearch> {
        let _guard = self.lock_writes()?;
        let mut searches = self.list()?;
        let search = searches
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SearchError::SavedSearchNotFound { id })?;
        search.is_favorite = !search.is_favorite;
        let updated = search.clone();
        self.persist(&searches)?;
        Ok(updated)
    }

    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock_writes()?;
        self.store.remove(SAVED_SEARCHES_KEY)
    }

    fn persist(&self, searches: &[SavedSearch]) -> Result<()> {
        let raw = serde_json::to_string(searches)?;
        self.store.set(SAVED_SEARCHES_KEY, &raw)
    }
}
