//! Domain-based type organization
//!
//! - configuration: configuration items, values and their REST representation
//! - constraint: validation rules and the single-rule checks
//! - editor: per-key editor and edit session state
//! - scope: tenancy scope and the update request
//! - settings: settings injected by the shell

pub mod configuration;
pub mod constraint;
pub mod editor;
pub mod scope;
pub mod settings;

pub use configuration::*;
pub use constraint::*;
pub use editor::*;
pub use scope::*;
pub use settings::*;
