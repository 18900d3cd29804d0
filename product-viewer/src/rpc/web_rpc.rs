use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::controller::pointer_yaw::{
    PointerYawController, RotatableMesh, ViewportPointerMoved, target_yaw_from_pointer,
};
use crate::engine::core::app_state::AppState;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::fps_tracking::smoothed_fps;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request structure. Notifications carry no `id`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Commands the host page can issue to the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    PointerMoved(ViewportPointerMoved),
    LoadModel { path: String },
    GetViewerState,
    GetFps,
}

impl ViewerCommand {
    /// Decode and validate a request into a viewer command.
    pub fn from_request(request: &RpcRequest) -> Result<Self, RpcError> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(RpcError::invalid_request(&format!(
                "Unsupported jsonrpc version: {}",
                request.jsonrpc
            )));
        }

        match request.method.as_str() {
            "pointer_moved" => {
                #[derive(Deserialize)]
                struct PointerParams {
                    client_x: f32,
                    viewport_width: f32,
                }

                let params = serde_json::from_value::<PointerParams>(request.params.clone())
                    .map_err(|_| {
                        RpcError::invalid_params("Expected 'client_x' and 'viewport_width'")
                    })?;

                if !params.viewport_width.is_finite() || params.viewport_width <= 0.0 {
                    return Err(RpcError::invalid_params(
                        "'viewport_width' must be a positive number",
                    ));
                }

                Ok(Self::PointerMoved(ViewportPointerMoved {
                    client_x: params.client_x,
                    viewport_width: params.viewport_width,
                }))
            }
            "load_model" => {
                #[derive(Deserialize)]
                struct LoadModelParams {
                    path: String,
                }

                let params = serde_json::from_value::<LoadModelParams>(request.params.clone())
                    .map_err(|_| RpcError::invalid_params("Expected 'path' parameter"))?;

                let path = params.path.trim();
                if path.is_empty() {
                    return Err(RpcError::invalid_params("'path' must not be empty"));
                }

                Ok(Self::LoadModel {
                    path: path.to_string(),
                })
            }
            "get_viewer_state" => Ok(Self::GetViewerState),
            "get_fps" => Ok(Self::GetFps),
            other => Err(RpcError::method_not_found(other)),
        }
    }
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing the postMessage bridge for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Shared between the browser callback and the schedule.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, host bridge disabled");
        return;
    };

    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Hand the closure to JS so it outlives this system.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Message queue filled by the browser's `message` listener.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw RPC payload received from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut pointer_events: EventWriter<ViewportPointerMoved>,
    mut config: ResMut<ViewerConfig>,
    diagnostics: Res<DiagnosticsStore>,
    controller: Res<PointerYawController>,
    state: Res<State<AppState>>,
    loading_progress: Res<LoadingProgress>,
    rotatables: Query<&RotatableMesh>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
                continue;
            }
        };

        let result = ViewerCommand::from_request(&request).map(|command| match command {
            ViewerCommand::PointerMoved(pointer) => {
                pointer_events.write(pointer);
                serde_json::json!({
                    "target_yaw": target_yaw_from_pointer(pointer.client_x, pointer.viewport_width)
                })
            }
            ViewerCommand::LoadModel { path } => {
                info!("Model path requested by host: {}", path);
                config.model_path = path.clone();
                serde_json::json!({
                    "success": true,
                    "path": path
                })
            }
            ViewerCommand::GetViewerState => serde_json::json!({
                "state": state.get().as_str(),
                "model_path": loading_progress.loaded_path,
                "model_failed": loading_progress.model_failed,
                "target_yaw": controller.target_yaw,
                "current_yaw": rotatables.iter().next().map(RotatableMesh::yaw),
            }),
            ViewerCommand::GetFps => serde_json::json!({
                "fps": smoothed_fps(&diagnostics).unwrap_or(0.0) as f32
            }),
        });

        match (request.id, result) {
            (Some(id), Ok(result_value)) => rpc_interface.queue_response(RpcResponse {
                jsonrpc: JSONRPC_VERSION.to_string(),
                result: Some(result_value),
                error: None,
                id: Some(id),
            }),
            (Some(id), Err(error)) => {
                rpc_interface.queue_response(create_error_response(id, error));
            }
            (None, Ok(_)) => {}
            (None, Err(error)) => {
                warn!(
                    "RPC notification '{}' rejected: {}",
                    request.method, error.message
                );
            }
        }
    }
}

fn create_error_response(id: serde_json::Value, error: RpcError) -> RpcResponse {
    RpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        result: None,
        error: Some(error),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use bevy::ecs::system::RunSystemOnce;

    fn request(json: &str) -> RpcRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn pointer_notification_decodes_without_an_id() {
        let request = request(
            r#"{"jsonrpc":"2.0","method":"pointer_moved","params":{"client_x":1280,"viewport_width":1280}}"#,
        );
        assert!(request.id.is_none());

        let command = ViewerCommand::from_request(&request).unwrap();
        assert_eq!(
            command,
            ViewerCommand::PointerMoved(ViewportPointerMoved {
                client_x: 1280.0,
                viewport_width: 1280.0,
            })
        );
    }

    #[test]
    fn pointer_with_zero_width_is_rejected() {
        let request = request(
            r#"{"jsonrpc":"2.0","method":"pointer_moved","params":{"client_x":10,"viewport_width":0},"id":1}"#,
        );
        let error = ViewerCommand::from_request(&request).unwrap_err();
        assert_eq!(error.code, -32602);
    }

    #[test]
    fn load_model_requires_a_path() {
        let ok = request(
            r#"{"jsonrpc":"2.0","method":"load_model","params":{"path":" models/air_max.glb "},"id":2}"#,
        );
        assert_eq!(
            ViewerCommand::from_request(&ok).unwrap(),
            ViewerCommand::LoadModel {
                path: "models/air_max.glb".to_string()
            }
        );

        let missing = request(r#"{"jsonrpc":"2.0","method":"load_model","params":{},"id":3}"#);
        assert_eq!(ViewerCommand::from_request(&missing).unwrap_err().code, -32602);

        let blank = request(
            r#"{"jsonrpc":"2.0","method":"load_model","params":{"path":"  "},"id":4}"#,
        );
        assert_eq!(ViewerCommand::from_request(&blank).unwrap_err().code, -32602);
    }

    #[test]
    fn queries_need_no_params() {
        let state = request(r#"{"jsonrpc":"2.0","method":"get_viewer_state","id":5}"#);
        assert_eq!(
            ViewerCommand::from_request(&state).unwrap(),
            ViewerCommand::GetViewerState
        );

        let fps = request(r#"{"jsonrpc":"2.0","method":"get_fps","id":6}"#);
        assert_eq!(ViewerCommand::from_request(&fps).unwrap(), ViewerCommand::GetFps);
    }

    #[test]
    fn unknown_method_reports_method_not_found() {
        let request = request(r#"{"jsonrpc":"2.0","method":"spin_faster","id":7}"#);
        let error = ViewerCommand::from_request(&request).unwrap_err();
        assert_eq!(error.code, -32601);
        assert_eq!(error.data, Some(serde_json::json!({ "method": "spin_faster" })));
    }

    #[test]
    fn wrong_protocol_version_is_an_invalid_request() {
        let request = request(r#"{"jsonrpc":"1.0","method":"get_fps","id":8}"#);
        assert_eq!(ViewerCommand::from_request(&request).unwrap_err().code, -32600);
    }

    fn dispatch_world() -> World {
        let mut world = World::new();
        world.init_resource::<Events<IncomingRpcMessage>>();
        world.init_resource::<Events<ViewportPointerMoved>>();
        world.init_resource::<WebRpcInterface>();
        world.init_resource::<ViewerConfig>();
        world.init_resource::<PointerYawController>();
        world.init_resource::<LoadingProgress>();
        world.insert_resource(DiagnosticsStore::default());
        world.insert_resource(State::new(AppState::Loading));
        world
    }

    fn deliver(world: &mut World, content: &str) {
        world.send_event(IncomingRpcMessage {
            content: content.to_string(),
        });
        world.run_system_once(handle_rpc_messages).unwrap();
    }

    #[test]
    fn malformed_message_is_dropped_without_reply() {
        let mut world = dispatch_world();
        deliver(&mut world, "{ jsonrpc: broken");

        let rpc = world.resource::<WebRpcInterface>();
        assert!(rpc.pending_notifications().is_empty());
        assert!(rpc.outgoing_responses.is_empty());
    }

    #[test]
    fn load_model_request_updates_config_and_replies() {
        let mut world = dispatch_world();
        deliver(
            &mut world,
            r#"{"jsonrpc":"2.0","method":"load_model","params":{"path":"models/air_max.glb"},"id":9}"#,
        );

        assert_eq!(world.resource::<ViewerConfig>().model_path, "models/air_max.glb");

        let rpc = world.resource::<WebRpcInterface>();
        assert_eq!(rpc.outgoing_responses.len(), 1);
        let response = &rpc.outgoing_responses[0];
        assert_eq!(response.id, Some(serde_json::json!(9)));
        assert_eq!(
            response.result,
            Some(serde_json::json!({ "success": true, "path": "models/air_max.glb" }))
        );
    }

    #[test]
    fn rejected_notification_gets_no_response() {
        let mut world = dispatch_world();
        deliver(&mut world, r#"{"jsonrpc":"2.0","method":"spin_faster"}"#);

        assert!(world.resource::<WebRpcInterface>().outgoing_responses.is_empty());
    }

    #[test]
    fn notifications_are_queued_with_protocol_version() {
        let mut rpc = WebRpcInterface::default();
        rpc.send_notification("model_loaded", serde_json::json!({ "path": "models/nike14.glb" }));

        let pending = rpc.pending_notifications();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].jsonrpc, "2.0");
        assert_eq!(pending[0].method, "model_loaded");
    }
}
