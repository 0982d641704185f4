//! Base trait for actions.

/// Marker trait for action messages.
///
/// Actions represent:
/// - Session events (login, register, logout)
/// - Gateway responses (posts fetched, group created)
/// - Alert producers and consumers
///
/// Actions carry no behavior. Reducers interpret them.
pub trait Action: Clone + Send + Sync + 'static {}
