//! JSON-RPC 2.0 bridge between the host product page and the viewer.
//!
//! The viewer runs inside an iframe; the page talks to it with
//! `postMessage`. Requests carry an `id` and get a response, notifications
//! do not.
//!
//! ```text
//! Product page (parent)  <──postMessage──>  Viewer (iframe)
//!        │                                        │
//!        ├─ pointer_moved (notification) ───────> │ target yaw updated
//!        ├─ load_model {path} (request) ────────> │ model swapped
//!        │ <──────────────────── response (id) ───┤
//!        │ <──── model_loaded / model_load_failed ┤
//!        │ <───────────────────────── fps_update ─┤
//! ```
//!
//! ## Methods
//!
//! - `pointer_moved {client_x, viewport_width}`: forward the page's pointer
//!   position when the copy layer captures pointer events.
//! - `load_model {path}`: swap the product model.
//! - `get_viewer_state`: loading state, model path, target and current yaw.
//! - `get_fps`: smoothed frame rate.
//!
//! ## Error codes
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// postMessage listener, command decoding and outgoing message queue.
pub mod web_rpc;
