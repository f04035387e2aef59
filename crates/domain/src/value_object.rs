//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are immutable once constructed. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: two instances with the same values are equal
///   (e.g. an [`EntityId`](crate::EntityId), `Money { amount, currency }`)
/// - **Entity**: two instances with the same identifier are the same entity,
///   whatever their other attributes say (see [`Entity`](crate::Entity))
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
