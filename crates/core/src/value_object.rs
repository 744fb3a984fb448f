//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: two navigation entries pointing at the
//! same route with the same label and icon are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Route(&'static str);
///
/// impl ValueObject for Route {}
///
/// assert_eq!(Route("/grades"), Route("/grades"));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
