//! Base trait for state slices.

/// Marker trait for state slices.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a projection needs)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
