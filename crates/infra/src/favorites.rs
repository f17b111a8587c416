//! Persisted favorites set.

use ecocheck_catalog::{Catalog, Product, SortCriterion, sort_favorites};

use crate::kv::{KeyValueStore, StoreError, read_list, write_list};

/// Key the favorites id list lives under.
pub const FAVORITES_KEY: &str = "ecocheck-favorites";

/// Set of favorited product ids, persisted as an ordered list (oldest first).
///
/// The store is injected; the list is created lazily by the first mutation and
/// lives until [`FavoritesSet::clear`]. Every mutation is one read-modify-write
/// against the store, which is only safe with a single writer per key.
///
/// Reads never fail toward the caller: an entry that is not a JSON array of
/// strings is logged and treated as an empty set.
#[derive(Debug)]
pub struct FavoritesSet<S> {
    store: S,
    key: String,
}

impl<S> FavoritesSet<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    /// Favorites under a custom key (e.g. one list per profile in tests).
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current ids; malformed data reads as empty, other store errors propagate.
    fn load(&self) -> Result<Vec<String>, StoreError> {
        match read_list(&self.store, &self.key) {
            Ok(mut ids) => {
                dedup_in_order(&mut ids);
                Ok(ids)
            }
            Err(err @ StoreError::Malformed { .. }) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring malformed favorites entry");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn snapshot(&self) -> Vec<String> {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(key = %self.key, error = %err, "failed to read favorites; treating as empty");
            Vec::new()
        })
    }

    fn save(&self, ids: &[String]) -> Result<(), StoreError> {
        write_list(&self.store, &self.key, ids)
    }

    /// Favorited ids in the order they were added.
    pub fn ids(&self) -> Vec<String> {
        self.snapshot()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.snapshot().iter().any(|fav| fav == id)
    }

    /// Add `id`; a no-op if it is already present.
    pub fn add(&self, id: &str) -> Result<(), StoreError> {
        let mut ids = self.load()?;
        if ids.iter().any(|fav| fav == id) {
            return Ok(());
        }
        ids.push(id.to_string());
        self.save(&ids)?;
        tracing::debug!(product_id = id, count = ids.len(), "added favorite");
        Ok(())
    }

    /// Remove `id`; a no-op if it is absent.
    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut ids = self.load()?;
        let before = ids.len();
        ids.retain(|fav| fav != id);
        if ids.len() == before {
            return Ok(());
        }
        self.save(&ids)?;
        tracing::debug!(product_id = id, count = ids.len(), "removed favorite");
        Ok(())
    }

    /// Flip membership of `id` and return the new state (`true` = favorited).
    pub fn toggle(&self, id: &str) -> Result<bool, StoreError> {
        let mut ids = self.load()?;
        let now_favorite = match ids.iter().position(|fav| fav == id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };
        self.save(&ids)?;
        tracing::debug!(product_id = id, favorite = now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    /// Drop every favorite, leaving an empty persisted list.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])?;
        tracing::debug!(key = %self.key, "cleared favorites");
        Ok(())
    }

    /// Resolve favorited ids against `catalog`, in the order they were added.
    ///
    /// Ids that no longer name a catalog product are skipped.
    pub fn list<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Product> {
        let ids = self.snapshot();
        let products: Vec<&Product> = ids.iter().filter_map(|id| catalog.get_by_id(id)).collect();
        if products.len() < ids.len() {
            tracing::debug!(
                stale = ids.len() - products.len(),
                "skipping favorites missing from catalog"
            );
        }
        products
    }

    /// [`FavoritesSet::list`] ordered by `criterion`.
    pub fn sorted<'c>(&self, catalog: &'c Catalog, criterion: SortCriterion) -> Vec<&'c Product> {
        sort_favorites(&self.list(catalog), criterion)
    }
}

fn dedup_in_order(ids: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(id.clone()));
}
