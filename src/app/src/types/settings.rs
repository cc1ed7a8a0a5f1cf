use serde::{Deserialize, Serialize};

/// Color scheme the shell renders with
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// How the constraint list of an item decides whether a draft is acceptable
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConstraintPolicy {
    /// Every constraint is evaluated in order and the last one decides.
    #[default]
    LastWins,
    /// Every constraint has to accept the draft.
    All,
}

/// Settings injected by the shell
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiSettings {
    pub theme: Theme,
    pub constraint_policy: ConstraintPolicy,
}
