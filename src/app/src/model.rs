use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Injected settings (theme, constraint policy)
    pub settings: UiSettings,

    // Editors keyed by configuration key
    pub editors: BTreeMap<String, ConfigurationEditor>,

    /// Bumped once per dismissed successful update; dependent views refetch on change.
    pub local_revision: u64,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }
}
