//! Records handed to the presentation layer.

use serde::Serialize;

use ecocheck_catalog::{ImpactLevel, Product, impact_level};

/// Everything the product result screen shows for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails<'c> {
    pub product: &'c Product,
    /// Footprint-only scale, shown next to the authored grade.
    pub impact: ImpactLevel,
    pub grade_summary: &'static str,
    pub is_favorite: bool,
}

impl<'c> ProductDetails<'c> {
    pub fn new(product: &'c Product, is_favorite: bool) -> Self {
        Self {
            product,
            impact: impact_level(product.carbon_footprint()),
            grade_summary: product.eco_grade().summary(),
            is_favorite,
        }
    }
}

/// Favorites screen contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoritesView<'c> {
    pub products: Vec<&'c Product>,
    /// Caption under the list, e.g. "2 products saved".
    pub saved_label: String,
}

impl<'c> FavoritesView<'c> {
    pub fn new(products: Vec<&'c Product>) -> Self {
        let saved_label = match products.len() {
            1 => "1 product saved".to_string(),
            n => format!("{n} products saved"),
        };
        Self {
            products,
            saved_label,
        }
    }
}
