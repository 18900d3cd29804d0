use std::f32::consts::PI;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::model::YAW_EASING_FACTOR;

/// Pointer position over the render surface, in logical pixels.
/// Sent by the window cursor and by the host page through the RPC bridge.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewportPointerMoved {
    pub client_x: f32,
    pub viewport_width: f32,
}

/// Target yaw derived from the last pointer position.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointerYawController {
    pub target_yaw: f32,
    pub easing_factor: f32,
}

impl PointerYawController {
    pub fn new(easing_factor: f32) -> Self {
        Self {
            target_yaw: 0.0,
            easing_factor,
        }
    }

    /// Aim at a pointer position. Ignored when the viewport has no width.
    pub fn aim_at_pointer(&mut self, client_x: f32, viewport_width: f32) -> Option<f32> {
        let target = target_yaw_from_pointer(client_x, viewport_width)?;
        self.target_yaw = target;
        Some(target)
    }
}

impl Default for PointerYawController {
    fn default() -> Self {
        Self::new(YAW_EASING_FACTOR)
    }
}

/// Rotation state of the mesh that follows the pointer.
///
/// The authored rotation is split into XYZ Euler angles; only `yaw` is driven,
/// pitch and roll keep their authored values.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RotatableMesh {
    pitch: f32,
    yaw: f32,
    roll: f32,
}

impl RotatableMesh {
    pub fn from_rotation(rotation: Quat) -> Self {
        let (pitch, yaw, roll) = rotation.to_euler(EulerRot::XYZ);
        Self { pitch, yaw, roll }
    }

    /// Current yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// One frame tick of easing toward `target`.
    pub fn step_toward(&mut self, target: f32, factor: f32) {
        self.yaw = ease_toward(self.yaw, target, factor);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }
}

/// Map a horizontal pointer coordinate to a yaw in [-π/2, π/2].
///
/// The coordinate is normalized by the viewport width and clamped to [0, 1].
/// Returns `None` when the width is zero, negative or not finite.
pub fn target_yaw_from_pointer(client_x: f32, viewport_width: f32) -> Option<f32> {
    if !client_x.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
        return None;
    }

    let x = (client_x / viewport_width).clamp(0.0, 1.0);
    Some((x - 0.5) * PI)
}

/// Move `current` by `factor` of the remaining distance to `target`.
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Number of ticks until the remaining error drops to `epsilon` or below.
///
/// The error after `n` ticks is `e0 * (1 - factor)^n`.
pub fn ticks_to_converge(initial_error: f32, epsilon: f32, factor: f32) -> u32 {
    let initial_error = f64::from(initial_error.abs());
    let epsilon = f64::from(epsilon.abs());

    if initial_error <= epsilon {
        return 0;
    }
    if factor >= 1.0 {
        return 1;
    }
    if factor <= 0.0 || epsilon == 0.0 {
        return u32::MAX;
    }

    let ticks = (epsilon / initial_error).ln() / (1.0 - f64::from(factor)).ln();
    ticks.ceil().min(f64::from(u32::MAX)) as u32
}

/// Forward window cursor moves as viewport pointer events.
pub fn forward_cursor_moves(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer_events: EventWriter<ViewportPointerMoved>,
) {
    let Ok(window) = windows.single() else {
        cursor_moved.clear();
        return;
    };

    for cursor in cursor_moved.read() {
        pointer_events.write(ViewportPointerMoved {
            client_x: cursor.position.x,
            viewport_width: window.width(),
        });
    }
}

/// Pointer trigger: updates the target yaw only. The last event of the frame wins.
pub fn update_target_yaw(
    mut pointer_events: EventReader<ViewportPointerMoved>,
    mut controller: ResMut<PointerYawController>,
) {
    for event in pointer_events.read() {
        controller.aim_at_pointer(event.client_x, event.viewport_width);
    }
}

/// Frame trigger: ease the rotatable mesh toward the target yaw.
/// No frame-delta correction, convergence speed follows the frame rate.
pub fn ease_mesh_yaw(
    controller: Res<PointerYawController>,
    mut meshes: Query<(&mut Transform, &mut RotatableMesh)>,
) {
    for (mut transform, mut rotatable) in &mut meshes {
        rotatable.step_toward(controller.target_yaw, controller.easing_factor);
        transform.rotation = rotatable.rotation();
    }
}

pub struct PointerYawPlugin;

impl Plugin for PointerYawPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerYawController>()
            .add_event::<ViewportPointerMoved>()
            .add_systems(
                Update,
                (forward_cursor_moves, update_target_yaw, ease_mesh_yaw).chain(),
            );
    }
}
