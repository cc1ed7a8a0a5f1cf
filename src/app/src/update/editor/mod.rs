pub mod session;
pub mod submit;
pub mod validation;

pub use session::{
    handle_attach, handle_cancel, handle_detach, handle_open, handle_set_change_warning_ack,
    handle_set_draft,
};
pub use submit::{handle_dismiss, handle_submit, handle_submit_response};

use crux_core::Command;

use crate::events::{EditorEvent, Event};
use crate::model::Model;
use crate::types::{ConfigurationEditor, ConstraintPolicy};
use crate::Effect;

/*
Edit surface and submission, per configuration key:

          Open                Submit               success
 Closed ────────▶ Idle ────────────────▶ Submitting ────────▶ Succeeded
   ▲               │                      │    ▲                 │
   │ Cancel        │              failure │    │ Submit (retry)  │
   ├───────────────┘                      ▼    │                 │
   ├──────────────── Cancel ──────────── Failed                  │
   └────────────── Dismiss (local_revision + 1) ─────────────────┘
*/

/// Handle per-key editor events
pub fn handle(event: EditorEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        EditorEvent::Attach { config, options } => handle_attach(config, options, model),
        EditorEvent::Detach { key } => handle_detach(&key, model),
        EditorEvent::Open { key } => handle_open(&key, model),
        EditorEvent::Cancel { key } => handle_cancel(&key, model),
        EditorEvent::SetDraft { key, value } => handle_set_draft(&key, value, model),
        EditorEvent::SetChangeWarningAck { key, acknowledged } => {
            handle_set_change_warning_ack(&key, acknowledged, model)
        }
        EditorEvent::Submit { key } => handle_submit(key, model),
        EditorEvent::SubmitResponse { key, result } => handle_submit_response(&key, result, model),
        EditorEvent::Dismiss { key } => handle_dismiss(&key, model),
    }
}

/// Recompute the submit flag from the current draft and acknowledgement
pub fn revalidate(editor: &mut ConfigurationEditor, policy: ConstraintPolicy) {
    editor.session.is_submit_enabled = validation::is_submit_allowed(editor, policy);
}

/// Look up an open editor, logging why an event is dropped otherwise
fn open_editor<'a>(
    model: &'a mut Model,
    key: &str,
    action: &str,
) -> Option<&'a mut ConfigurationEditor> {
    match model.editors.get_mut(key) {
        Some(editor) if editor.is_open() => Some(editor),
        Some(_) => {
            log::debug!("{action} ignored: editor for {key} is closed");
            None
        }
        None => {
            log::debug!("{action} ignored: no editor for {key}");
            None
        }
    }
}
