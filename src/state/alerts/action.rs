use crate::state::AppAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertAction {
    Error { message: String },
    Info { message: String },
    Warning { message: String },
    Success { message: String },
    /// Clears every kind at once.
    Clear,
}

pub fn create_error_alert(message: impl Into<String>) -> AppAction {
    AppAction::Alerts(AlertAction::Error {
        message: message.into(),
    })
}

pub fn create_info_alert(message: impl Into<String>) -> AppAction {
    AppAction::Alerts(AlertAction::Info {
        message: message.into(),
    })
}

pub fn create_warning_alert(message: impl Into<String>) -> AppAction {
    AppAction::Alerts(AlertAction::Warning {
        message: message.into(),
    })
}

pub fn create_success_alert(message: impl Into<String>) -> AppAction {
    AppAction::Alerts(AlertAction::Success {
        message: message.into(),
    })
}

pub fn clear_alerts() -> AppAction {
    AppAction::Alerts(AlertAction::Clear)
}
