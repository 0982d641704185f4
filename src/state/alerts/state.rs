use std::fmt;

use serde::Serialize;

use crate::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Info,
    Warning,
    Success,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Error,
        AlertKind::Info,
        AlertKind::Warning,
        AlertKind::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Success => "success",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One optional message per alert kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlertsState {
    pub error: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
    pub success: Option<String>,
}

impl SliceState for AlertsState {}

impl AlertsState {
    pub fn get(&self, kind: AlertKind) -> Option<&str> {
        match kind {
            AlertKind::Error => self.error.as_deref(),
            AlertKind::Info => self.info.as_deref(),
            AlertKind::Warning => self.warning.as_deref(),
            AlertKind::Success => self.success.as_deref(),
        }
    }

    pub(crate) fn with(mut self, kind: AlertKind, message: String) -> Self {
        let slot = match kind {
            AlertKind::Error => &mut self.error,
            AlertKind::Info => &mut self.info,
            AlertKind::Warning => &mut self.warning,
            AlertKind::Success => &mut self.success,
        };
        *slot = Some(message);
        self
    }
}
