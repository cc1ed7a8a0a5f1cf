mod configuration;
mod editor;
mod ui;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => render(),
        Event::Editor(editor_event) => editor::handle(editor_event, model),
        Event::Configuration(configuration_event) => {
            configuration::handle(configuration_event, model)
        }
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
