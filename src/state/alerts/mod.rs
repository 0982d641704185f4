mod action;
mod reducer;
mod state;

pub use action::{
    clear_alerts, create_error_alert, create_info_alert, create_success_alert,
    create_warning_alert, AlertAction,
};
pub use reducer::AlertsReducer;
pub use state::{AlertKind, AlertsState};
