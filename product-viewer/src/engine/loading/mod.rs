//! Loading pipeline for the product model.
//!
//! Requests the glTF scene, watches for failures, re-centers the hierarchy once
//! it is spawned, and reloads when the configured model path changes.

/// Model stage spawning, failure reporting and reloads on path change.
pub mod model_loader;

/// One-shot re-centering of a freshly spawned model hierarchy.
pub mod normalize;

/// Loading progress tracking resource for state transitions.
pub mod progress;
