use crate::state::AppAction;

use super::state::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsAction {
    Fetch {
        group_name: String,
        posts: Vec<Post>,
        sequence: Option<u64>,
    },
    Create {
        group_name: String,
        posts: Vec<Post>,
        sequence: Option<u64>,
    },
}

pub fn fetch_posts_action(group_name: impl Into<String>, posts: Vec<Post>) -> AppAction {
    AppAction::Posts(PostsAction::Fetch {
        group_name: group_name.into(),
        posts,
        sequence: None,
    })
}

/// `posts` is the complete new list for the group, new post included.
pub fn create_post_action(group_name: impl Into<String>, posts: Vec<Post>) -> AppAction {
    AppAction::Posts(PostsAction::Create {
        group_name: group_name.into(),
        posts,
        sequence: None,
    })
}

/// Attaches a sequence ticket to a posts action. Other actions pass through.
pub fn sequenced(action: AppAction, ticket: u64) -> AppAction {
    match action {
        AppAction::Posts(PostsAction::Fetch {
            group_name, posts, ..
        }) => AppAction::Posts(PostsAction::Fetch {
            group_name,
            posts,
            sequence: Some(ticket),
        }),
        AppAction::Posts(PostsAction::Create {
            group_name, posts, ..
        }) => AppAction::Posts(PostsAction::Create {
            group_name,
            posts,
            sequence: Some(ticket),
        }),
        other => other,
    }
}
