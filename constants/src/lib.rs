//! Shared tunables for the product viewer.
//!
//! Camera placement, lighting, model presentation and the marketing copy.

pub mod camera;
pub mod copy;
pub mod model;
pub mod overlay;
pub mod path;
pub mod render_settings;
