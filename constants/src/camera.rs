use bevy::math::Vec3;

/// Initial camera position. The orbit radius and polar angle are derived from it.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.0, 1.5);

/// Point the camera orbits around and looks at.
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 30.0;

/// Auto-rotate speed in the orbit-controls convention: 2.0 is one orbit per 30 seconds.
pub const AUTO_ROTATE_SPEED: f32 = 0.5;
