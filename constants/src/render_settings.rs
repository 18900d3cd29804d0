use bevy::math::Vec3;

/// Ambient light brightness (cd/m²). Scaled from an intensity of 0.2.
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 200.0;

pub const SPOT_LIGHT_POSITION: Vec3 = Vec3::new(2.0, 5.0, 2.0);
pub const SPOT_LIGHT_INTENSITY: f32 = 1_500_000.0;
pub const SPOT_LIGHT_RANGE: f32 = 20.0;

/// Outer cone angle in radians. The inner angle is zero for a full penumbra.
pub const SPOT_LIGHT_OUTER_ANGLE: f32 = 0.4;

/// Ground shadow plane: side length, height and opacity.
pub const GROUND_PLANE_SIZE: f32 = 10.0;
pub const GROUND_PLANE_HEIGHT: f32 = -0.6;
pub const GROUND_SHADOW_OPACITY: f32 = 0.2;
