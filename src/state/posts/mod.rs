mod action;
mod reducer;
mod state;

pub use action::{create_post_action, fetch_posts_action, sequenced, PostsAction};
pub use reducer::PostsReducer;
pub use state::{Post, PostsState, FEED_KEY};
