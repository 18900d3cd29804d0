use std::f32::consts::TAU;

use bevy::prelude::*;
use constants::camera::{AUTO_ROTATE_SPEED, CAMERA_FOV_DEGREES, CAMERA_POSITION, CAMERA_TARGET};

/// Spherical camera placement around a fixed target.
///
/// `polar` is measured from +Y, `azimuth` around +Y starting at +Z.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub target: Vec3,
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
    /// 2.0 means one orbit every 30 seconds.
    pub auto_rotate_speed: f32,
}

impl OrbitRig {
    pub fn from_position(position: Vec3, target: Vec3, auto_rotate_speed: f32) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let polar = if radius > f32::EPSILON {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        Self {
            target,
            radius,
            polar,
            azimuth: offset.x.atan2(offset.z),
            auto_rotate_speed,
        }
    }

    /// Auto-rotation rate in radians per second.
    pub fn angular_speed(&self) -> f32 {
        TAU / 60.0 * self.auto_rotate_speed
    }

    /// Advance the auto-rotation by `delta_secs`. Positive speeds orbit clockwise seen from above.
    pub fn advance(&mut self, delta_secs: f32) {
        self.azimuth = (self.azimuth - self.angular_speed() * delta_secs).rem_euclid(TAU);
    }

    pub fn position(&self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        self.target
            + Vec3::new(
                ring * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                ring * self.azimuth.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::from_position(CAMERA_POSITION, CAMERA_TARGET, AUTO_ROTATE_SPEED)
    }
}

/// Spawn the product camera with a transparent clear colour so the page shows through.
pub fn spawn_orbit_camera(commands: &mut Commands) {
    let rig = OrbitRig::default();

    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        rig.transform(),
        rig,
    ));
}

/// Constant auto-rotation of the camera rig, independent of the model's pointer yaw.
pub fn auto_rotate_orbit(time: Res<Time>, mut rigs: Query<(&mut OrbitRig, &mut Transform)>) {
    for (mut rig, mut transform) in &mut rigs {
        rig.advance(time.delta_secs());
        *transform = rig.transform();
    }
}
