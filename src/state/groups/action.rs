use crate::state::AppAction;

use super::state::Group;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupsAction {
    Fetch { groups: Vec<Group> },
    Create { groups: Vec<Group> },
}

pub fn fetch_groups_action(groups: Vec<Group>) -> AppAction {
    AppAction::Groups(GroupsAction::Fetch { groups })
}

/// `groups` is the complete new list, new group included.
pub fn create_group_action(groups: Vec<Group>) -> AppAction {
    AppAction::Groups(GroupsAction::Create { groups })
}
