use ecocheck_catalog::{
    Catalog, DEFAULT_RECENT_SCANS, Product, ProductScanner, SimulatedScanner, SortCriterion,
    sort_favorites_by,
};
use ecocheck_core::{DomainResult, Entity};
use ecocheck_infra::{FavoritesSet, KeyValueStore, StoreError, Theme, ThemePreference};

use crate::view::{FavoritesView, ProductDetails};

/// One user's view of the engine: catalog, favorites, theme and scanner.
///
/// The store is injected and shared by the favorites set and the theme
/// preference (pass an `Arc` to share it). Entries are created on first write;
/// there is no teardown beyond dropping the session.
pub struct EcoCheck<S> {
    catalog: Catalog,
    favorites: FavoritesSet<S>,
    theme: ThemePreference<S>,
    scanner: Box<dyn ProductScanner>,
}

impl<S> EcoCheck<S>
where
    S: KeyValueStore + Clone,
{
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            favorites: FavoritesSet::new(store.clone()),
            theme: ThemePreference::new(store),
            scanner: Box::new(SimulatedScanner::new()),
        }
    }
}

impl<S> EcoCheck<S>
where
    S: KeyValueStore,
{
    /// Swap the scanner (e.g. a seeded simulator, or a real device later).
    pub fn with_scanner(mut self, scanner: impl ProductScanner + 'static) -> Self {
        self.scanner = Box::new(scanner);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesSet<S> {
        &self.favorites
    }

    /// Product screen data; `None` renders the "product not found" state.
    pub fn details(&self, id: &str) -> Option<ProductDetails<'_>> {
        let product = self.catalog.get_by_id(id)?;
        Some(ProductDetails::new(product, self.favorites.is_favorite(id)))
    }

    /// Search box handler. A blank query yields no results.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.catalog.search(query)
    }

    pub fn scan(&self) -> DomainResult<&Product> {
        self.scanner.scan(&self.catalog)
    }

    /// Placeholder list for the home screen; see [`Catalog::recent_scans`].
    pub fn recent_scans(&self) -> &[Product] {
        self.catalog.recent_scans(DEFAULT_RECENT_SCANS)
    }

    pub fn toggle_favorite(&self, id: &str) -> Result<bool, StoreError> {
        self.favorites.toggle(id)
    }

    pub fn clear_favorites(&self) -> Result<(), StoreError> {
        self.favorites.clear()
    }

    pub fn favorites_sorted(&self, criterion: SortCriterion) -> FavoritesView<'_> {
        FavoritesView::new(self.favorites.sorted(&self.catalog, criterion))
    }

    /// Like [`EcoCheck::favorites_sorted`] with the picker's raw value.
    pub fn favorites_sorted_by(&self, criterion: &str) -> FavoritesView<'_> {
        let listed = self.favorites.list(&self.catalog);
        FavoritesView::new(sort_favorites_by(&listed, criterion))
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle_theme(&self) -> Result<Theme, StoreError> {
        self.theme.toggle()
    }

    /// Ids of favorites whose product has left the catalog.
    pub fn stale_favorites(&self) -> Vec<String> {
        self.favorites
            .ids()
            .into_iter()
            .filter(|id| self.catalog.get_by_id(id).is_none())
            .collect()
    }

    /// Whether `product` is in the favorites set.
    pub fn is_favorite(&self, product: &Product) -> bool {
        self.favorites.is_favorite(product.id().as_str())
    }
}

impl<S> core::fmt::Debug for EcoCheck<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EcoCheck")
            .field("products", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
