use crux_core::Command;

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update::editor::revalidate;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (settings, clear messages)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::Configure(settings) => {
            if model.settings == settings {
                return Command::done();
            }
            log::debug!("applying ui settings: {settings:?}");
            model.settings = settings;

            // the constraint policy may have changed under open editors
            let policy = settings.constraint_policy;
            for editor in model.editors.values_mut() {
                if editor.is_open() && editor.session.accepts_input() {
                    revalidate(editor, policy);
                }
            }
            crux_core::render::render()
        }
        UiEvent::ClearError => update_field!(model.error_message, None),
    }
}
