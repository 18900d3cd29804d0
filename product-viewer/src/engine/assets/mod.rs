//! Product model and marketing copy assets.
//!
//! Holds the handles of the model currently on stage, the bounds math used to
//! re-center it, and the JSON copy shown over the canvas.

/// Axis-aligned bounds of model geometry and the transforms applied to them.
pub mod bounds;

/// Scene handle and stage entity of the loaded product model.
pub mod model_assets;

/// Marketing copy asset with a built-in default.
pub mod product_copy;
