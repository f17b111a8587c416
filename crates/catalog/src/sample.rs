//! Built-in sample catalog.

use crate::catalog::Catalog;
use crate::product::{EcoGrade, NewProduct, Product};

fn entry(
    id: &str,
    name: &str,
    brand: &str,
    eco_grade: EcoGrade,
    carbon_footprint: f64,
    tips: [&str; 3],
    category: &str,
) -> NewProduct {
    NewProduct {
        id: id.to_string(),
        name: name.to_string(),
        brand: Some(brand.to_string()),
        image: None,
        eco_grade,
        carbon_footprint,
        tips: tips.iter().map(|t| t.to_string()).collect(),
        category: Some(category.to_string()),
    }
}

fn sample_entries() -> Vec<NewProduct> {
    vec![
        entry(
            "1",
            "Organic Cotton T-Shirt",
            "EcoWear",
            EcoGrade::A,
            2.1,
            [
                "Look for GOTS certified organic cotton",
                "Wash in cold water to reduce energy use",
                "Air dry instead of using a dryer",
            ],
            "Clothing",
        ),
        entry(
            "2",
            "Plastic Water Bottle",
            "AquaCorp",
            EcoGrade::D,
            0.8,
            [
                "Switch to a reusable water bottle",
                "Look for recycled plastic alternatives",
                "Recycle properly after use",
            ],
            "Beverages",
        ),
        entry(
            "3",
            "Bamboo Toothbrush",
            "GreenSmile",
            EcoGrade::A,
            0.05,
            [
                "Compost the bamboo handle after use",
                "Remove bristles before composting",
                "Lasts as long as plastic alternatives",
            ],
            "Personal Care",
        ),
        entry(
            "4",
            "LED Light Bulb",
            "BrightEco",
            EcoGrade::B,
            1.2,
            [
                "80% less energy than incandescent bulbs",
                "Lasts 25 times longer",
                "Recycle at electronics stores",
            ],
            "Home & Garden",
        ),
        entry(
            "5",
            "Fast Fashion Jeans",
            "TrendyDenim",
            EcoGrade::D,
            33.4,
            [
                "Consider second-hand alternatives",
                "Look for sustainable denim brands",
                "Repair instead of replacing",
            ],
            "Clothing",
        ),
        entry(
            "6",
            "Reusable Glass Jar",
            "ZeroWaste Co",
            EcoGrade::A,
            0.3,
            [
                "Perfect for food storage",
                "Infinitely recyclable",
                "Reduces plastic packaging needs",
            ],
            "Home & Garden",
        ),
    ]
}

/// The six-product catalog the app ships with (ids `"1"` to `"6"`).
pub fn sample_catalog() -> Catalog {
    let products = sample_entries()
        .into_iter()
        .map(Product::new)
        .collect::<Result<Vec<_>, _>>()
        .and_then(Catalog::new);

    // Static data; covered by `sample_catalog_is_valid`.
    products.expect("built-in sample catalog is valid")
}
