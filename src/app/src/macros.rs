/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.settings, settings;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for PUT requests with a JSON body expecting a status-only response.
/// Does not touch the global loading state; the result is handed to `on_result`,
/// which turns it into the follow-up event.
///
/// # Example
/// ```ignore
/// http_put_json!(build_url(&endpoint), "Update configuration",
///     body_json: &body,
///     on_result: move |result| Event::Editor(EditorEvent::SubmitResponse { key, result })
/// )
/// ```
#[macro_export]
macro_rules! http_put_json {
    ($url:expr, $action:expr, body_json: $body:expr, on_result: $on_result:expr) => {{
        match $crate::HttpCmd::put($url)
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(move |result| {
                let event_result: Result<(), String> = match result {
                    Ok(mut response) => $crate::check_response_status($action, &mut response),
                    Err(e) => Err($crate::map_http_error($action, e)),
                };
                ($on_result)(event_result)
            }),
            Err(e) => {
                let event_result: Result<(), String> =
                    Err(format!("Failed to create {} request: {}", $action, e));
                crux_core::Command::event(($on_result)(event_result))
            }
        }
    }};
}

/// Macro for GET requests expecting a JSON response.
/// Sets the loading state and renders while the request is in flight.
/// Requires domain parameters for event wrapping.
/// The decoded body is passed through `map` before dispatch.
///
/// # Example
/// ```ignore
/// http_get_json!(Configuration, ConfigurationEvent, model, url, RefreshResponse, "Load configuration",
///     expect_json: Vec<WireConfigurationItem>,
///     map: parse_configuration_items
/// )
/// ```
#[macro_export]
macro_rules! http_get_json {
    ($domain:ident, $domain_event:ident, $model:expr, $url:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty, map: $mapper:expr) => {{
        $model.start_loading();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get($url).build().then_send(|result| {
                let event_result: Result<$response_type, String> = match result {
                    Ok(mut response) => $crate::parse_json_response($action, &mut response),
                    Err(e) => Err($crate::map_http_error($action, e)),
                };
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result.map($mapper),
                ))
            }),
        ])
    }};
}

/// Macro for handling Result responses with standard loading/error handling.
///
/// # Example
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |model, items| {
///         model.apply(items);
///     },
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = &mut *$model;
                $success_body
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};
}
