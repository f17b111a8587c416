//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In this
/// domain the authored `EcoGrade` and the computed `ImpactLevel` are value objects,
/// while a `Product` is an entity identified by its `ProductId`.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct ImpactLevel { percentage: u8, band: EcoGrade }
///
/// impl ValueObject for ImpactLevel {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
