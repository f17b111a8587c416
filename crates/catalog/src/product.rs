use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecocheck_core::{DomainError, Entity, ProductId, ValueObject};

/// Authored environmental rating, best (`A`) to worst (`D`).
///
/// The derived ordering follows declaration order, so sorting ascending puts the
/// best rating first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EcoGrade {
    A,
    B,
    C,
    D,
}

impl EcoGrade {
    pub const ALL: [EcoGrade; 4] = [EcoGrade::A, EcoGrade::B, EcoGrade::C, EcoGrade::D];

    pub fn as_str(self) -> &'static str {
        match self {
            EcoGrade::A => "A",
            EcoGrade::B => "B",
            EcoGrade::C => "C",
            EcoGrade::D => "D",
        }
    }

    /// One-line verdict shown under the grade badge.
    pub fn summary(self) -> &'static str {
        match self {
            EcoGrade::A => "Excellent environmental impact",
            EcoGrade::B => "Good environmental choice",
            EcoGrade::C => "Moderate environmental impact",
            EcoGrade::D => "High environmental impact",
        }
    }
}

impl ValueObject for EcoGrade {}

impl core::fmt::Display for EcoGrade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EcoGrade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(EcoGrade::A),
            "B" => Ok(EcoGrade::B),
            "C" => Ok(EcoGrade::C),
            "D" => Ok(EcoGrade::D),
            other => Err(DomainError::validation(format!(
                "eco grade must be one of A, B, C, D (got {other:?})"
            ))),
        }
    }
}

/// Input for building a validated [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub eco_grade: EcoGrade,
    pub carbon_footprint: f64,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewProduct")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    eco_grade: EcoGrade,
    carbon_footprint: f64,
    tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Product {
    /// Validate and build a product.
    ///
    /// Rejects blank ids and names, and footprints that are negative or not finite.
    pub fn new(input: NewProduct) -> Result<Self, DomainError> {
        let id = ProductId::new(input.id)?;

        if input.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {id}: name cannot be empty"
            )));
        }

        if !input.carbon_footprint.is_finite() || input.carbon_footprint < 0.0 {
            return Err(DomainError::validation(format!(
                "product {id}: carbon footprint must be a finite non-negative number (got {})",
                input.carbon_footprint
            )));
        }

        Ok(Self {
            id,
            name: input.name,
            brand: input.brand,
            image: input.image,
            eco_grade: input.eco_grade,
            carbon_footprint: input.carbon_footprint,
            tips: input.tips,
            category: input.category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn eco_grade(&self) -> EcoGrade {
        self.eco_grade
    }

    /// Kilograms of CO2-equivalent per unit.
    pub fn carbon_footprint(&self) -> f64 {
        self.carbon_footprint
    }

    /// Advice lines, in display order.
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Case-insensitive substring match on name, brand or category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(needle);
        hit(&self.name)
            || self.brand.as_deref().is_some_and(hit)
            || self.category.as_deref().is_some_and(hit)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewProduct> for Product {
    type Error = DomainError;

    fn try_from(value: NewProduct) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
