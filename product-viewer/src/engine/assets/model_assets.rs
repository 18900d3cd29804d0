use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Handles and entities belonging to the product model currently on stage.
#[derive(Resource, Default)]
pub struct ModelAssets {
    /// Whole glTF file. Parse errors only surface on this handle.
    pub gltf: Option<Handle<Gltf>>,
    /// First glTF scene of the model file.
    pub scene: Option<Handle<Scene>>,
    /// Stage entity carrying the presentation scale and offset. Its child is the scene root.
    pub stage: Option<Entity>,
}
