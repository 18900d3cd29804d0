//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime configuration
//! and the Loading → Ready transition for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the product scene, loading systems, pointer
/// control, copy panel and host bridge.
pub mod app_setup;

/// Application state machine and the transition out of loading.
pub mod app_state;

/// Runtime viewer configuration seeded from the shared constants.
pub mod viewer_config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and a transparent native window.
pub mod window_config;
