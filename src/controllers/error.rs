use thiserror::Error;

use crate::api::ApiError;
use crate::validation::FormError;

/// Outcome of a failed flow. Any alert has already been dispatched.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Not signed in")]
    NotSignedIn,

    /// The owning scope went away before the call finished
    #[error("Cancelled")]
    Cancelled,
}
