//! Pipelines that call a gateway and dispatch the outcome.
//!
//! Flow controllers (session, feed, groups, responses) follow one shape:
//! validate input, call the gateway inside a [`ScopeHandle`], then dispatch
//! on success or raise an error alert on failure. The toggle controllers
//! keep client-local on/off state for votes and memberships.
//!
//! [`ScopeHandle`]: crate::lifetime::ScopeHandle

mod error;
mod feed;
mod groups;
mod membership;
mod responses;
mod session;
mod traits;
mod vote;

use crate::api::ApiError;
use crate::selectors;
use crate::state::alerts::create_error_alert;
use crate::store::Store;

pub use error::FlowError;
pub use feed::FeedController;
pub use groups::GroupsController;
pub use membership::MembershipToggle;
pub use responses::ResponsesController;
pub use session::SessionController;
pub use traits::{MembershipGateway, VoteGateway};
pub use vote::{VoteState, VoteToggle};

pub const LOGIN_FAILED: &str = "Unable to login with provided credentials";
pub const REGISTER_FAILED: &str = "Unable to register with provided credentials";
pub const FEED_FAILED: &str = "An error occurred while creating your feed";
pub const GROUP_DETAIL_FAILED: &str = "An error occurred while fetch the group Detail";
pub const RESPONSES_FETCH_FAILED: &str = "Unable to fetch the responses to this post";
pub const RESPONSE_CREATE_FAILED: &str = "Unable to create your response";
pub const POST_CREATE_FAILED: &str = "Unable to create your post";
pub const GROUP_CREATE_FAILED: &str = "Unable to create your group";

fn require_token(store: &Store) -> Result<String, FlowError> {
    selectors::token(&store.state())
        .map(str::to_string)
        .ok_or(FlowError::NotSignedIn)
}

/// Fails if the session a call started under has ended or changed, so a
/// late response never lands in a signed-out store.
fn require_same_session(store: &Store, token: &str) -> Result<(), FlowError> {
    match selectors::token(&store.state()) {
        Some(current) if current == token => Ok(()),
        _ => {
            tracing::debug!("Session changed while a request was in flight");
            Err(FlowError::NotSignedIn)
        }
    }
}

/// Raises the error alert for a failed call and wraps the error.
fn surface(store: &Store, err: ApiError, fallback: &str) -> FlowError {
    store.dispatch(create_error_alert(err.user_message(fallback)));
    FlowError::Api(err)
}
