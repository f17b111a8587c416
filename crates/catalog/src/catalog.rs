use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use ecocheck_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// Number of entries the home screen shows under "recent scans".
pub const DEFAULT_RECENT_SCANS: usize = 3;

/// Fixed, read-only product catalog.
///
/// Construction enforces id uniqueness; after that the catalog never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id().clone(), pos).is_some() {
                return Err(DomainError::invariant(format!(
                    "duplicate product id: {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid catalog json: {e}")))?;
        Self::new(products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Exact id lookup. `None` is a normal outcome (unknown or stale id).
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Like [`Catalog::get_by_id`], for callers that want an error value.
    pub fn require(&self, id: &str) -> DomainResult<&Product> {
        self.get_by_id(id).ok_or(DomainError::NotFound)
    }

    /// Case-insensitive substring search over name, brand and category.
    ///
    /// Any one field matching is enough; absent fields are skipped. Results keep
    /// catalog order. An empty query matches everything, so callers that want
    /// "no query, no results" must check before calling.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Uniformly random product, drawn fresh on every call.
    pub fn random_product(&self) -> DomainResult<&Product> {
        self.random_product_with(&mut rand::thread_rng())
    }

    pub fn random_product_with<R: Rng + ?Sized>(&self, rng: &mut R) -> DomainResult<&Product> {
        self.products.choose(rng).ok_or(DomainError::EmptyCatalog)
    }

    /// First `n` products in catalog order.
    ///
    /// Placeholder for a real scan history: nothing records scans yet, so this is
    /// simply the head of the catalog.
    pub fn recent_scans(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
