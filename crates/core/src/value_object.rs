//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In the
/// ledger, `Amount` is a value object; a `Transaction` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
