use crux_core::Command;

use crate::events::{ConfigurationEvent, Event};
use crate::handle_response;
use crate::http_get_json;
use crate::model::Model;
use crate::types::{
    configuration_endpoint, parse_configuration_items, ConfigurationItem, EditSession,
    TenancyScope, WireConfigurationItem,
};
use crate::update::editor::revalidate;
use crate::Effect;

/// Handle configuration listing events
pub fn handle(event: ConfigurationEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConfigurationEvent::Refresh { scope } => refresh(scope, model),
        ConfigurationEvent::RefreshResponse(result) => handle_response!(model, result, {
            on_success: |model, items| {
                apply_configuration(items, model);
            },
        }),
    }
}

/// Fetch the configuration listing for a scope
pub fn refresh(scope: Option<TenancyScope>, model: &mut Model) -> Command<Effect, Event> {
    let url = crate::build_url(&configuration_endpoint(scope.as_ref()));
    http_get_json!(Configuration, ConfigurationEvent, model, url, RefreshResponse, "Load configuration",
        expect_json: Vec<WireConfigurationItem>,
        map: parse_configuration_items
    )
}

/// Hand fresh persisted values to the attached editors.
///
/// Closed editors mirror the new value. Open editors keep their draft; the
/// unchanged-check runs against the new value unless their input is locked.
/// Items without an attached editor are ignored.
fn apply_configuration(items: Vec<ConfigurationItem>, model: &mut Model) {
    let policy = model.settings.constraint_policy;

    for item in items {
        let Some(editor) = model.editors.get_mut(&item.key) else {
            continue;
        };
        editor.config = item;
        if !editor.is_open() {
            editor.session = EditSession::mirror(editor.config.value.clone());
        } else if editor.session.accepts_input() {
            revalidate(editor, policy);
        }
    }
}
