use bevy::prelude::*;

#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct LoadingProgress {
    pub model_requested: bool,
    pub model_failed: bool,
    pub model_normalized: bool,
    /// Path of the model currently on stage, set when it is requested.
    pub loaded_path: Option<String>,
}
