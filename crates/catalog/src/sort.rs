//! Ordering of a favorited product list.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecocheck_core::DomainError;

use crate::product::Product;

/// Named orderings offered on the favorites screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    /// Keep the order favorites were added in (oldest first).
    #[default]
    Recent,
    /// Best authored grade first.
    EcoRating,
    CarbonLow,
    CarbonHigh,
    Name,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 5] = [
        SortCriterion::Recent,
        SortCriterion::EcoRating,
        SortCriterion::CarbonLow,
        SortCriterion::CarbonHigh,
        SortCriterion::Name,
    ];

    /// Wire name, as sent by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Recent => "recent",
            SortCriterion::EcoRating => "eco-rating",
            SortCriterion::CarbonLow => "carbon-low",
            SortCriterion::CarbonHigh => "carbon-high",
            SortCriterion::Name => "name",
        }
    }

    /// Caption for the sort picker.
    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Recent => "Recently Added",
            SortCriterion::EcoRating => "Best Eco Rating",
            SortCriterion::CarbonLow => "Lowest Carbon Impact",
            SortCriterion::CarbonHigh => "Highest Carbon Impact",
            SortCriterion::Name => "Name A-Z",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortCriterion::Recent => Ordering::Equal,
            SortCriterion::EcoRating => a.eco_grade().cmp(&b.eco_grade()),
            SortCriterion::CarbonLow => a.carbon_footprint().total_cmp(&b.carbon_footprint()),
            SortCriterion::CarbonHigh => b.carbon_footprint().total_cmp(&a.carbon_footprint()),
            SortCriterion::Name => compare_names(a.name(), b.name()),
        }
    }
}

/// Case-insensitive name order; names equal up to case fall back to byte order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl core::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort criterion: {s:?}")))
    }
}

/// Stable, non-mutating sort of `products` by `criterion`.
pub fn sort_favorites<'a>(products: &[&'a Product], criterion: SortCriterion) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    if criterion != SortCriterion::Recent {
        sorted.sort_by(|a, b| criterion.compare(a, b));
    }
    sorted
}

/// String entry point for [`sort_favorites`].
///
/// An unrecognized criterion leaves the input order untouched.
pub fn sort_favorites_by<'a>(products: &[&'a Product], criterion: &str) -> Vec<&'a Product> {
    match criterion.parse::<SortCriterion>() {
        Ok(criterion) => sort_favorites(products, criterion),
        Err(_) => {
            tracing::warn!(criterion, "unknown sort criterion; keeping input order");
            products.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::EcoGrade;
    use crate::product::tests::new_product;
    use ecocheck_core::Entity;

    fn product(id: &str, name: &str, grade: EcoGrade, footprint: f64) -> Product {
        Product::new(new_product(id, name, grade, footprint)).unwrap()
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("5", "Fast Fashion Jeans", EcoGrade::D, 33.4),
            product("3", "Bamboo Toothbrush", EcoGrade::A, 0.05),
            product("2", "Plastic Water Bottle", EcoGrade::D, 0.8),
            product("4", "LED Light Bulb", EcoGrade::B, 1.2),
            product("6", "Reusable Glass Jar", EcoGrade::A, 0.3),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn recent_is_identity() {
        let owned = fixture();
        let input: Vec<&Product> = owned.iter().collect();
        assert_eq!(ids(&sort_favorites(&input, SortCriterion::Recent)), ids(&input));
    }

    #[test]
    fn eco_rating_best_first_and_stable() {
        let owned = fixture();
        let input: Vec<&Product> = owned.iter().collect();
        assert_eq!(
            ids(&sort_favorites(&input, SortCriterion::EcoRating)),
            vec!["3", "6", "4", "5", "2"]
        );
    }

    #[test]
    fn carbon_low_and_high() {
        let owned = fixture();
        let input: Vec<&Product> = owned.iter().collect();
        assert_eq!(
            ids(&sort_favorites(&input, SortCriterion::CarbonLow)),
            vec!["3", "6", "2", "4", "5"]
        );
        assert_eq!(
            ids(&sort_favorites(&input, SortCriterion::CarbonHigh)),
            vec!["5", "4", "2", "6", "3"]
        );
    }

    #[test]
    fn name_ascending() {
        let owned = fixture();
        let input: Vec<&Product> = owned.iter().collect();
        assert_eq!(
            ids(&sort_favorites(&input, SortCriterion::Name)),
            vec!["3", "5", "4", "2", "6"]
        );
    }

    #[test]
    fn name_ignores_case() {
        let owned = vec![
            product("1", "Banana Chips", EcoGrade::B, 1.0),
            product("2", "apple juice", EcoGrade::B, 1.0),
            product("3", "Apple Juice", EcoGrade::B, 1.0),
            product("4", "cherry jam", EcoGrade::B, 1.0),
        ];
        let input: Vec<&Product> = owned.iter().collect();
        assert_eq!(
            ids(&sort_favorites(&input, SortCriterion::Name)),
            vec!["3", "2", "1", "4"]
        );
    }

    #[test]
    fn does_not_mutate_input() {
        let owned = fixture();
        let input: Vec<&Product> = owned.iter().collect();
        let before = ids(&input);
        let _ = sort_favorites(&input, SortCriterion::Name);
        assert_eq!(ids(&input), before);
    }

    #[test]
    fn unknown_criterion_keeps_input_order() {
        let owned = fixture();
        let input: Vec<&Product> = owned.iter().collect();
        assert_eq!(ids(&sort_favorites_by(&input, "price")), ids(&input));
        assert_eq!(
            ids(&sort_favorites_by(&input, "carbon-low")),
            vec!["3", "6", "2", "4", "5"]
        );
    }

    #[test]
    fn criterion_round_trips_through_its_wire_name() {
        for criterion in SortCriterion::ALL {
            assert_eq!(criterion.as_str().parse::<SortCriterion>().unwrap(), criterion);
        }
        assert!("Name".parse::<SortCriterion>().is_err());
        assert_eq!(SortCriterion::default(), SortCriterion::Recent);
        assert_eq!(
            serde_json::to_string(&SortCriterion::CarbonHigh).unwrap(),
            "\"carbon-high\""
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_grade() -> impl Strategy<Value = EcoGrade> {
            prop_oneof![
                Just(EcoGrade::A),
                Just(EcoGrade::B),
                Just(EcoGrade::C),
                Just(EcoGrade::D),
            ]
        }

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec((arb_grade(), 0.0f64..50.0, "[A-Z][a-z]{0,8}"), 0..12).prop_map(
                |rows| {
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, (grade, footprint, name))| {
                            product(&i.to_string(), &name, grade, footprint)
                        })
                        .collect()
                },
            )
        }

        fn arb_criterion() -> impl Strategy<Value = SortCriterion> {
            prop::sample::select(SortCriterion::ALL.to_vec())
        }

        proptest! {
            /// Property: sorting an already sorted list changes nothing.
            #[test]
            fn sort_is_idempotent(owned in arb_products(), criterion in arb_criterion()) {
                let input: Vec<&Product> = owned.iter().collect();
                let once = sort_favorites(&input, criterion);
                let twice = sort_favorites(&once, criterion);
                prop_assert_eq!(ids(&once), ids(&twice));
            }

            /// Property: the output is a permutation of the input.
            #[test]
            fn sort_is_a_permutation(owned in arb_products(), criterion in arb_criterion()) {
                let input: Vec<&Product> = owned.iter().collect();
                let mut sorted = ids(&sort_favorites(&input, criterion));
                let mut original = ids(&input);
                sorted.sort();
                original.sort();
                prop_assert_eq!(sorted, original);
            }

            /// Property: equal keys keep their relative input order.
            #[test]
            fn eco_rating_is_stable(owned in arb_products()) {
                let input: Vec<&Product> = owned.iter().collect();
                let sorted = sort_favorites(&input, SortCriterion::EcoRating);
                for pair in sorted.windows(2) {
                    if pair[0].eco_grade() == pair[1].eco_grade() {
                        let a: usize = pair[0].id().as_str().parse().unwrap();
                        let b: usize = pair[1].id().as_str().parse().unwrap();
                        prop_assert!(a < b);
                    }
                }
            }

            /// Property: with distinct footprints, carbon-low reversed is carbon-high.
            #[test]
            fn carbon_low_reversed_is_carbon_high(
                footprints in prop::collection::hash_set(0u32..10_000, 0..12)
            ) {
                let owned: Vec<Product> = footprints
                    .into_iter()
                    .enumerate()
                    .map(|(i, f)| product(&i.to_string(), "Item", EcoGrade::C, f as f64 / 100.0))
                    .collect();
                let input: Vec<&Product> = owned.iter().collect();
                let mut low = ids(&sort_favorites(&input, SortCriterion::CarbonLow));
                low.reverse();
                prop_assert_eq!(low, ids(&sort_favorites(&input, SortCriterion::CarbonHigh)));
            }
        }
    }
}
