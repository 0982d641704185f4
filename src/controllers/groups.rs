use crate::api::{GroupDetail, GroupsApi};
use crate::lifetime::ScopeHandle;
use crate::selectors;
use crate::state::groups::{create_group_action, fetch_groups_action, Group};
use crate::store::Store;
use crate::validation::require;

use super::{
    require_same_session, require_token, surface, FlowError, GROUP_CREATE_FAILED, GROUP_DETAIL_FAILED,
};

/// Group list, group creation and group detail.
#[derive(Clone)]
pub struct GroupsController {
    store: Store,
    groups: GroupsApi,
    scope: ScopeHandle,
}

impl GroupsController {
    pub fn new(store: Store, groups: GroupsApi, scope: ScopeHandle) -> Self {
        Self { store, groups, scope }
    }

    /// Replaces the group list. A failure is logged but raises no alert.
    pub async fn load_groups(&self) -> Result<Vec<Group>, FlowError> {
        let token = require_token(&self.store)?;

        let groups = self
            .scope
            .run(self.groups.fetch_groups(&token))
            .await
            .ok_or(FlowError::Cancelled)??;

        require_same_session(&self.store, &token)?;
        self.store.dispatch(fetch_groups_action(groups.clone()));
        Ok(groups)
    }

    /// Creates a group and puts it at the front of the list.
    pub async fn create_group(&self, name: &str, description: &str) -> Result<Group, FlowError> {
        require("Group name", name)?;
        require("Description", description)?;
        let token = require_token(&self.store)?;

        let result = self
            .scope
            .run(self.groups.create_group(name, description, &token))
            .await
            .ok_or(FlowError::Cancelled)?;

        let mut group = match result {
            Ok(group) => group,
            Err(e) => return Err(surface(&self.store, e, GROUP_CREATE_FAILED)),
        };
        require_same_session(&self.store, &token)?;

        let state = self.store.state();
        if group.created_by.is_empty() {
            if let Some(user) = selectors::current_user(&state) {
                group.created_by = user.user_id.clone();
            }
        }

        let mut groups = Vec::with_capacity(state.groups.groups.len() + 1);
        groups.push(group.clone());
        groups.extend(
            selectors::groups(&state)
                .iter()
                .filter(|existing| existing.group_name != group.group_name)
                .cloned(),
        );

        self.store.dispatch(create_group_action(groups));
        Ok(group)
    }

    /// Header for a group screen. Not kept in the store.
    pub async fn fetch_detail(&self, group_name: &str) -> Result<GroupDetail, FlowError> {
        let token = require_token(&self.store)?;

        self.scope
            .run(self.groups.fetch_group_details(group_name, &token))
            .await
            .ok_or(FlowError::Cancelled)?
            .map_err(|e| surface(&self.store, e, GROUP_DETAIL_FAILED))
    }
}
