//! Footprint-only impact scale.
//!
//! This is a display aid and deliberately independent of a product's authored
//! [`EcoGrade`]: a low-footprint product can still carry a poor grade (and the
//! other way round). Both are shown side by side.

use serde::{Deserialize, Serialize};

use ecocheck_core::ValueObject;

use crate::product::EcoGrade;

/// Position on the visual impact scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImpactLevel {
    /// Fill of the impact bar, 0..=100.
    pub percentage: u8,
    pub band: EcoGrade,
}

impl ValueObject for ImpactLevel {}

/// Inclusive upper bounds in kg CO2e, checked in order.
const THRESHOLDS: [(f64, u8, EcoGrade); 3] = [
    (1.0, 25, EcoGrade::A),
    (5.0, 50, EcoGrade::B),
    (15.0, 75, EcoGrade::C),
];

const CEILING: ImpactLevel = ImpactLevel {
    percentage: 100,
    band: EcoGrade::D,
};

/// Map a carbon footprint onto the four-step impact scale.
///
/// Step function, no interpolation. Anything above the last threshold (or NaN)
/// lands in the top band.
pub fn impact_level(carbon_footprint: f64) -> ImpactLevel {
    THRESHOLDS
        .iter()
        .find(|(limit, _, _)| carbon_footprint <= *limit)
        .map(|&(_, percentage, band)| ImpactLevel { percentage, band })
        .unwrap_or(CEILING)
}
