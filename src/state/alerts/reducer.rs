use crate::mvi::Reducer;
use crate::state::AppAction;

use super::action::AlertAction;
use super::state::{AlertKind, AlertsState};

pub struct AlertsReducer;

impl Reducer for AlertsReducer {
    type State = AlertsState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        let AppAction::Alerts(action) = action else {
            return state;
        };

        match action {
            AlertAction::Error { message } => state.with(AlertKind::Error, message.clone()),
            AlertAction::Info { message } => state.with(AlertKind::Info, message.clone()),
            AlertAction::Warning { message } => state.with(AlertKind::Warning, message.clone()),
            AlertAction::Success { message } => state.with(AlertKind::Success, message.clone()),
            AlertAction::Clear => AlertsState::default(),
        }
    }
}
