use crux_core::{render::render, Command};

use super::{open_editor, revalidate};
use crate::events::{EditorEvent, Event};
use crate::http_put_json;
use crate::model::Model;
use crate::types::{ConfigurationPatch, ConfigurationUpdateRequest, EditSession, EditSurface};
use crate::update::configuration::refresh;
use crate::Effect;

const UPDATE_ACTION: &str = "Update configuration";

/// Send the draft to the remote update service.
///
/// Locks the input and the submit control until the response arrives, so at
/// most one request per editor is in flight.
pub fn handle_submit(key: String, model: &mut Model) -> Command<Effect, Event> {
    let Some(editor) = open_editor(model, &key, "submit") else {
        return Command::done();
    };
    if editor.options.disabled {
        log::debug!("submit ignored: editor for {key} is disabled");
        return Command::done();
    }
    if !editor.session.is_submit_enabled
        || editor.session.is_submitting()
        || editor.session.submitted_ok()
    {
        log::debug!("submit ignored: editor for {key} cannot submit right now");
        return Command::done();
    }
    let Some(value) = editor.session.draft_value.clone() else {
        return Command::done();
    };

    editor.session.begin_submit();

    let request = ConfigurationUpdateRequest {
        patch: ConfigurationPatch {
            key: key.clone(),
            value: value.into_typed(editor.config.value_type),
        },
        scope: editor.options.scope.clone(),
    };
    let url = crate::build_url(&request.endpoint());
    log::debug!("updating configuration {key} via {url}");

    Command::all([
        render(),
        http_put_json!(url, UPDATE_ACTION,
            body_json: &request.body(),
            on_result: move |result| Event::Editor(EditorEvent::SubmitResponse { key, result })
        ),
    ])
}

/// Outcome of the remote update; exactly one per submitted request
pub fn handle_submit_response(
    key: &str,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let policy = model.settings.constraint_policy;

    let Some(editor) = model.editors.get_mut(key) else {
        log::warn!("update response for unknown editor {key} dropped");
        return Command::done();
    };
    if !editor.session.is_submitting() {
        log::warn!("update response for {key} dropped: no update in flight");
        return Command::done();
    }

    match result {
        Ok(()) => {
            log::info!("configuration {key} updated");
            editor.session.succeed();
        }
        Err(e) => {
            log::warn!("configuration {key} update failed: {e}");
            editor.session.fail(e);
            // settings or the persisted value may have moved while locked
            revalidate(editor, policy);
        }
    }

    render()
}

/// Close after a successful update.
///
/// Bumps the local revision once and refetches the configuration so the
/// persisted value catches up with the submitted draft.
pub fn handle_dismiss(key: &str, model: &mut Model) -> Command<Effect, Event> {
    let Some(editor) = open_editor(model, key, "dismiss") else {
        return Command::done();
    };
    if !editor.session.submitted_ok() {
        log::debug!("dismiss ignored: editor for {key} has no confirmed update");
        return Command::done();
    }

    editor.session = EditSession::mirror(editor.config.value.clone());
    editor.surface = EditSurface::Closed;
    let scope = editor.options.scope.clone();

    model.local_revision += 1;

    Command::all([render(), refresh(scope, model)])
}
