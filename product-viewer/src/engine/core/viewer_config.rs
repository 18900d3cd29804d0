use bevy::prelude::*;
use constants::model::{MODEL_OFFSET, MODEL_SCALE};
use constants::path::{DEFAULT_COPY_PATH, DEFAULT_MODEL_PATH};

/// Runtime configuration of the product view.
/// Changing `model_path` (through the host bridge) reloads the model.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub model_path: String,
    pub copy_path: String,
    pub model_scale: f32,
    pub model_offset: Vec3,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            copy_path: DEFAULT_COPY_PATH.to_string(),
            model_scale: MODEL_SCALE,
            model_offset: MODEL_OFFSET,
        }
    }
}
