use serde::{Deserialize, Serialize};

use super::configuration::{ConfigValue, ConfigurationItem};
use super::scope::TenancyScope;

/// Title shown on the static label of a disabled editor without a reason
pub const DEFAULT_DISABLED_TITLE: &str = "Value cannot be edited.";

/// How an editor is embedded by its page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorOptions {
    /// Risky value: the operator has to acknowledge a warning before submitting.
    pub change_warning_required: bool,
    pub scope: Option<TenancyScope>,
    pub disabled: bool,
    pub disabled_reason: Option<String>,
}

/// Visibility of the edit surface (the modal)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EditSurface {
    #[default]
    Closed,
    Open,
}

/// Progress of the remote update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

/// What the page renders in place of the editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EditorTrigger {
    /// Clickable "Edit" affordance that opens the surface
    Link,
    /// Muted "Edit" label with a hover title, no edit path
    Static { title: String },
}

/// Ephemeral working state of one open editor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditSession {
    pub draft_value: Option<ConfigValue>,
    pub acknowledged_change_warning: bool,
    pub is_input_locked: bool,
    pub is_submit_enabled: bool,
    pub submission: SubmissionState,
}

impl EditSession {
    /// Fresh session whose draft mirrors the persisted value
    pub fn mirror(value: Option<ConfigValue>) -> Self {
        Self {
            draft_value: value,
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn submitted_ok(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    pub fn submitted_with_error(&self) -> bool {
        matches!(self.submission, SubmissionState::Failed { .. })
    }

    /// Message of the last failed update, if the failure banner is up
    pub fn failure_message(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Draft edits and acknowledgement flips only count while nothing is in flight
    /// and no success is waiting to be dismissed.
    pub fn accepts_input(&self) -> bool {
        !self.is_input_locked && !self.is_submitting() && !self.submitted_ok()
    }

    /// Idle/Failed → Submitting
    pub fn begin_submit(&mut self) {
        self.submission = SubmissionState::Submitting;
        self.is_input_locked = true;
        self.is_submit_enabled = false;
    }

    /// Submitting → Succeeded. The input stays locked until dismissed.
    pub fn succeed(&mut self) {
        self.submission = SubmissionState::Succeeded;
        self.is_submit_enabled = true;
    }

    /// Submitting → Failed, ready for a retry
    pub fn fail(&mut self, message: String) {
        self.submission = SubmissionState::Failed { message };
        self.is_input_locked = false;
        self.is_submit_enabled = true;
    }
}

/// Editor state for one configuration key
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationEditor {
    pub config: ConfigurationItem,
    pub options: EditorOptions,
    pub surface: EditSurface,
    pub session: EditSession,
}

impl ConfigurationEditor {
    pub fn new(config: ConfigurationItem, options: EditorOptions) -> Self {
        let session = EditSession::mirror(config.value.clone());
        Self {
            config,
            options,
            surface: EditSurface::Closed,
            session,
        }
    }

    pub fn is_open(&self) -> bool {
        self.surface == EditSurface::Open
    }

    pub fn trigger(&self) -> EditorTrigger {
        if self.options.disabled {
            EditorTrigger::Static {
                title: self
                    .options
                    .disabled_reason
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DISABLED_TITLE.to_string()),
            }
        } else {
            EditorTrigger::Link
        }
    }
}
