//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; two with
/// the same attribute values are the same value. To "modify" one,
/// construct a new one. The bounds keep them cheap to copy, comparable
/// and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
