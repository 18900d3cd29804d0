use bevy::math::Vec3;

/// Uniform scale applied to the stage holding the product model.
pub const MODEL_SCALE: f32 = 2.5;

/// Offset of the stage holding the product model.
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -0.4, 0.0);

/// Fraction of the remaining yaw distance covered per frame tick.
pub const YAW_EASING_FACTOR: f32 = 0.05;
