//! Runtime diagnostics.

/// FPS reporting to the host page via RPC.
pub mod fps_tracking;
