use serde::{Deserialize, Serialize};

use crate::types::*;

/// Per-key editor events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Register (or replace) the editor for `config.key`
    Attach {
        config: ConfigurationItem,
        options: EditorOptions,
    },
    Detach {
        key: String,
    },
    Open {
        key: String,
    },
    /// Close before success, reverting the draft
    Cancel {
        key: String,
    },
    SetDraft {
        key: String,
        value: Option<ConfigValue>,
    },
    SetChangeWarningAck {
        key: String,
        acknowledged: bool,
    },
    Submit {
        key: String,
    },
    /// Close after success
    Dismiss {
        key: String,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    SubmitResponse {
        key: String,
        result: Result<(), String>,
    },
}

/// Configuration listing events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConfigurationEvent {
    Refresh {
        scope: Option<TenancyScope>,
    },
    #[serde(skip)]
    RefreshResponse(Result<Vec<ConfigurationItem>, String>),
}

/// Shell-level events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Configure(UiSettings),
    ClearError,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Editor(EditorEvent),
    Configuration(ConfigurationEvent),
    Ui(UiEvent),
}
