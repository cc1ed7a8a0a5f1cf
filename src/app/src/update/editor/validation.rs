use crate::types::{ConfigValue, ConfigurationEditor, Constraint, ConstraintPolicy};

/// Decide whether the editor's draft may be submitted.
///
/// Order matters: a pending change warning blocks everything, then a missing or
/// unchanged draft, then the constraint list.
pub fn is_submit_allowed(editor: &ConfigurationEditor, policy: ConstraintPolicy) -> bool {
    if editor.options.change_warning_required && !editor.session.acknowledged_change_warning {
        return false;
    }

    let Some(draft) = editor.session.draft_value.as_ref() else {
        return false;
    };
    if editor.config.value.as_ref() == Some(draft) {
        return false;
    }

    constraints_accept(&editor.config.constraints, draft, policy)
}

/// Apply a constraint list to a changed draft. An empty list accepts anything.
pub fn constraints_accept(
    constraints: &[Constraint],
    draft: &ConfigValue,
    policy: ConstraintPolicy,
) -> bool {
    match policy {
        // earlier outcomes are overwritten, only the final rule counts
        ConstraintPolicy::LastWins => constraints.last().is_none_or(|c| c.accepts(draft)),
        ConstraintPolicy::All => constraints.iter().all(|c| c.accepts(draft)),
    }
}
