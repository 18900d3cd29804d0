/// Default product model, relative to the asset root.
pub const DEFAULT_MODEL_PATH: &str = "models/nike14.glb";

/// Marketing copy shown over the canvas, relative to the asset root.
pub const DEFAULT_COPY_PATH: &str = "copy/nike14.json";
