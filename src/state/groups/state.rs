use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// A group as listed by the groups service. `group_name` is the key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "created_by")]
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GroupsState {
    pub groups: Vec<Group>,
}

impl SliceState for GroupsState {}

impl GroupsState {
    pub fn find(&self, group_name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.group_name == group_name)
    }
}
