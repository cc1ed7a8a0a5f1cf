use crux_core::{render::render, Command};

use super::{open_editor, revalidate};
use crate::events::Event;
use crate::model::Model;
use crate::types::{
    ConfigValue, ConfigurationEditor, ConfigurationItem, EditSession, EditSurface, EditorOptions,
};
use crate::Effect;

/// Register an editor for `config.key`, or refresh an existing one in place
pub fn handle_attach(
    config: ConfigurationItem,
    options: EditorOptions,
    model: &mut Model,
) -> Command<Effect, Event> {
    let policy = model.settings.constraint_policy;

    if let Some(editor) = model.editors.get_mut(&config.key) {
        // keep the running session of an open editor, only its inputs change
        if editor.is_open() {
            editor.config = config;
            editor.options = options;
            if editor.options.disabled && !editor.session.is_submitting() {
                log::debug!("editor for {} disabled while open, closing", editor.config.key);
                editor.session = EditSession::mirror(editor.config.value.clone());
                editor.surface = EditSurface::Closed;
            } else if editor.session.accepts_input() {
                revalidate(editor, policy);
            }
            return render();
        }
    }

    model
        .editors
        .insert(config.key.clone(), ConfigurationEditor::new(config, options));

    render()
}

pub fn handle_detach(key: &str, model: &mut Model) -> Command<Effect, Event> {
    match model.editors.remove(key) {
        Some(editor) => {
            if editor.session.is_submitting() {
                log::warn!("editor for {key} detached with an update in flight");
            }
            render()
        }
        None => Command::done(),
    }
}

/// Open the edit surface with a fresh session mirroring the persisted value
pub fn handle_open(key: &str, model: &mut Model) -> Command<Effect, Event> {
    let policy = model.settings.constraint_policy;

    let Some(editor) = model.editors.get_mut(key) else {
        log::debug!("open ignored: no editor for {key}");
        return Command::done();
    };
    if editor.options.disabled {
        log::debug!("open ignored: editor for {key} is disabled");
        return Command::done();
    }
    if editor.is_open() {
        return Command::done();
    }

    editor.surface = EditSurface::Open;
    editor.session = EditSession::mirror(editor.config.value.clone());
    revalidate(editor, policy);

    render()
}

/// Close before success: the draft reverts and acknowledgement/failure clear.
pub fn handle_cancel(key: &str, model: &mut Model) -> Command<Effect, Event> {
    let policy = model.settings.constraint_policy;

    let Some(editor) = open_editor(model, key, "cancel") else {
        return Command::done();
    };
    if editor.session.is_submitting() || editor.session.submitted_ok() {
        log::debug!("cancel ignored: editor for {key} is {:?}", editor.session.submission);
        return Command::done();
    }

    editor.session = EditSession::mirror(editor.config.value.clone());
    revalidate(editor, policy);
    editor.surface = EditSurface::Closed;

    render()
}

pub fn handle_set_draft(
    key: &str,
    value: Option<ConfigValue>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let policy = model.settings.constraint_policy;

    let Some(editor) = open_editor(model, key, "draft change") else {
        return Command::done();
    };
    if !editor.session.accepts_input() {
        log::debug!("draft change ignored: input for {key} is locked");
        return Command::done();
    }

    editor.session.draft_value = value;
    revalidate(editor, policy);

    render()
}

pub fn handle_set_change_warning_ack(
    key: &str,
    acknowledged: bool,
    model: &mut Model,
) -> Command<Effect, Event> {
    let policy = model.settings.constraint_policy;

    let Some(editor) = open_editor(model, key, "acknowledgement") else {
        return Command::done();
    };
    if !editor.session.accepts_input() {
        log::debug!("acknowledgement ignored: input for {key} is locked");
        return Command::done();
    }

    editor.session.acknowledged_change_warning = acknowledged;
    revalidate(editor, policy);

    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Constraint, EditorTrigger, SubmissionState};

    fn number_item(key: &str, value: i64, min: i64, max: i64) -> ConfigurationItem {
        ConfigurationItem {
            key: key.to_string(),
            value: Some(ConfigValue::Number(value)),
            constraints: vec![Constraint::number_range(min, max)],
            ..Default::default()
        }
    }

    fn model_with(config: ConfigurationItem, options: EditorOptions) -> Model {
        let mut model = Model::default();
        let _ = handle_attach(config, options, &mut model);
        model
    }

    fn text(s: &str) -> Option<ConfigValue> {
        Some(ConfigValue::Text(s.to_string()))
    }

    mod attach {
        use super::*;

        #[test]
        fn attach_creates_closed_editor() {
            let model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());

            let editor = &model.editors["k"];
            assert_eq!(editor.surface, EditSurface::Closed);
            assert_eq!(editor.session.draft_value, Some(ConfigValue::Number(10)));
        }

        #[test]
        fn reattach_keeps_open_session_and_revalidates() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());
            let _ = handle_open("k", &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);
            assert!(model.editors["k"].session.is_submit_enabled);

            // persisted value moved to the draft in the meantime
            let _ = handle_attach(
                ConfigurationItem {
                    value: text("50"),
                    ..number_item("k", 0, 0, 100)
                },
                EditorOptions::default(),
                &mut model,
            );

            let editor = &model.editors["k"];
            assert!(editor.is_open());
            assert_eq!(editor.session.draft_value, text("50"));
            assert!(!editor.session.is_submit_enabled);
        }

        #[test]
        fn reattach_as_disabled_closes_open_editor() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());
            let _ = handle_open("k", &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);

            let _ = handle_attach(
                number_item("k", 10, 0, 100),
                EditorOptions {
                    disabled: true,
                    ..Default::default()
                },
                &mut model,
            );

            let editor = &model.editors["k"];
            assert!(!editor.is_open());
            assert_eq!(editor.session.draft_value, Some(ConfigValue::Number(10)));
            assert!(!editor.session.is_submit_enabled);
            assert!(matches!(editor.trigger(), EditorTrigger::Static { .. }));
        }

        #[test]
        fn reattach_as_disabled_keeps_update_in_flight() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());
            let _ = handle_open("k", &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);
            model.editors.get_mut("k").unwrap().session.begin_submit();

            let _ = handle_attach(
                number_item("k", 10, 0, 100),
                EditorOptions {
                    disabled: true,
                    ..Default::default()
                },
                &mut model,
            );

            let editor = &model.editors["k"];
            assert!(editor.is_open());
            assert!(editor.session.is_submitting());
        }

        #[test]
        fn detach_removes_editor() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());

            let _ = handle_detach("k", &mut model);

            assert!(model.editors.is_empty());
        }
    }

    mod open {
        use super::*;

        #[test]
        fn open_starts_session_from_value() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());

            let _ = handle_open("k", &mut model);

            let editor = &model.editors["k"];
            assert!(editor.is_open());
            assert_eq!(editor.session.draft_value, Some(ConfigValue::Number(10)));
            assert!(!editor.session.is_submit_enabled);
            assert!(!editor.session.is_input_locked);
        }

        #[test]
        fn disabled_editor_cannot_be_opened() {
            let mut model = model_with(
                number_item("k", 10, 0, 100),
                EditorOptions {
                    disabled: true,
                    ..Default::default()
                },
            );

            let _ = handle_open("k", &mut model);

            assert!(!model.editors["k"].is_open());
        }

        #[test]
        fn drafts_are_ignored_while_closed() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());

            let _ = handle_set_draft("k", text("50"), &mut model);

            assert_eq!(
                model.editors["k"].session.draft_value,
                Some(ConfigValue::Number(10))
            );
        }
    }

    mod drafting {
        use super::*;

        #[test]
        fn draft_changes_toggle_submit() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());
            let _ = handle_open("k", &mut model);

            let _ = handle_set_draft("k", text("200"), &mut model);
            assert!(!model.editors["k"].session.is_submit_enabled);

            let _ = handle_set_draft("k", text("50"), &mut model);
            assert!(model.editors["k"].session.is_submit_enabled);

            let _ = handle_set_draft("k", None, &mut model);
            assert!(!model.editors["k"].session.is_submit_enabled);
        }

        #[test]
        fn acknowledgement_flip_reevaluates() {
            let mut model = model_with(
                number_item("k", 10, 0, 100),
                EditorOptions {
                    change_warning_required: true,
                    ..Default::default()
                },
            );
            let _ = handle_open("k", &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);
            assert!(!model.editors["k"].session.is_submit_enabled);

            let _ = handle_set_change_warning_ack("k", true, &mut model);
            assert!(model.editors["k"].session.is_submit_enabled);

            let _ = handle_set_change_warning_ack("k", false, &mut model);
            assert!(!model.editors["k"].session.is_submit_enabled);
        }

        #[test]
        fn locked_input_rejects_drafts() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());
            let _ = handle_open("k", &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);
            model.editors.get_mut("k").unwrap().session.begin_submit();

            let _ = handle_set_draft("k", text("60"), &mut model);
            let _ = handle_set_change_warning_ack("k", true, &mut model);

            let session = &model.editors["k"].session;
            assert_eq!(session.draft_value, text("50"));
            assert!(!session.acknowledged_change_warning);
            assert!(!session.is_submit_enabled);
        }
    }

    mod cancel {
        use super::*;

        #[test]
        fn cancel_restores_value_and_clears_flags() {
            let mut model = model_with(
                number_item("k", 10, 0, 100),
                EditorOptions {
                    change_warning_required: true,
                    ..Default::default()
                },
            );
            let _ = handle_open("k", &mut model);
            let _ = handle_set_change_warning_ack("k", true, &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);
            {
                let session = &mut model.editors.get_mut("k").unwrap().session;
                session.begin_submit();
                session.fail("HTTP 500".to_string());
            }

            let _ = handle_cancel("k", &mut model);

            let editor = &model.editors["k"];
            assert_eq!(editor.surface, EditSurface::Closed);
            assert_eq!(editor.session.draft_value, Some(ConfigValue::Number(10)));
            assert!(!editor.session.acknowledged_change_warning);
            assert!(!editor.session.submitted_with_error());
            assert!(!editor.session.is_submit_enabled);
        }

        #[test]
        fn cancel_is_refused_while_submitting() {
            let mut model = model_with(number_item("k", 10, 0, 100), EditorOptions::default());
            let _ = handle_open("k", &mut model);
            let _ = handle_set_draft("k", text("50"), &mut model);
            model.editors.get_mut("k").unwrap().session.begin_submit();

            let _ = handle_cancel("k", &mut model);

            let editor = &model.editors["k"];
            assert!(editor.is_open());
            assert_eq!(editor.session.submission, SubmissionState::Submitting);
        }
    }
}
