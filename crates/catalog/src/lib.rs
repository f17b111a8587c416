//! Product catalog domain module.
//!
//! Pure domain logic (no storage, no presentation): the product model, the
//! read-only catalog with its search semantics, the footprint impact scale, the
//! favorites sort engine and the simulated scanner.

pub mod catalog;
pub mod grading;
pub mod product;
pub mod sample;
pub mod scan;
pub mod sort;

pub use catalog::{Catalog, DEFAULT_RECENT_SCANS};
pub use grading::{ImpactLevel, impact_level};
pub use product::{EcoGrade, NewProduct, Product};
pub use sample::sample_catalog;
pub use scan::{ProductScanner, SimulatedScanner};
pub use sort::{SortCriterion, sort_favorites, sort_favorites_by};
