//! Stand-in for a product scanner.
//!
//! There is no camera or barcode pipeline. [`SimulatedScanner`] picks a catalog
//! product at random; a real scanner only has to implement [`ProductScanner`].

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;

use ecocheck_core::{DomainError, DomainResult, Entity};

use crate::catalog::Catalog;
use crate::product::Product;

/// Something that turns a scan into a catalog product.
pub trait ProductScanner: Send + Sync {
    fn scan<'c>(&self, catalog: &'c Catalog) -> DomainResult<&'c Product>;
}

/// Uniformly random "scan" over the catalog.
#[derive(Debug, Default)]
pub struct SimulatedScanner {
    seeded: Option<Mutex<StdRng>>,
}

impl SimulatedScanner {
    /// Scanner backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with a reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl ProductScanner for SimulatedScanner {
    fn scan<'c>(&self, catalog: &'c Catalog) -> DomainResult<&'c Product> {
        let product = match &self.seeded {
            Some(rng) => {
                let mut rng = rng
                    .lock()
                    .map_err(|_| DomainError::invariant("scanner rng lock poisoned"))?;
                catalog.random_product_with(&mut *rng)?
            }
            None => catalog.random_product()?,
        };
        tracing::debug!(product_id = %product.id(), "simulated scan");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;

    #[test]
    fn scan_returns_a_catalog_product() {
        let catalog = sample_catalog();
        let product = SimulatedScanner::new().scan(&catalog).unwrap();
        assert!(catalog.get_by_id(product.id().as_str()).is_some());
    }

    #[test]
    fn seeded_scanners_agree() {
        let catalog = sample_catalog();
        let a = SimulatedScanner::seeded(42);
        let b = SimulatedScanner::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.scan(&catalog).unwrap().id(), b.scan(&catalog).unwrap().id());
        }
    }

    #[test]
    fn scan_of_empty_catalog_fails_cleanly() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert_eq!(
            SimulatedScanner::seeded(1).scan(&catalog).unwrap_err(),
            DomainError::EmptyCatalog
        );
    }

    #[test]
    fn scanner_is_usable_as_trait_object() {
        let catalog = sample_catalog();
        let scanner: Box<dyn ProductScanner> = Box::new(SimulatedScanner::new());
        assert!(scanner.scan(&catalog).is_ok());
    }
}
