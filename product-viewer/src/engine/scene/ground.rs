use bevy::prelude::*;
use constants::render_settings::{GROUND_PLANE_HEIGHT, GROUND_PLANE_SIZE, GROUND_SHADOW_OPACITY};

use super::suspense::SuspendedUntilReady;

#[derive(Component)]
pub struct GroundShadowPlane;

/// Translucent ground plane under the model. Hidden until the model is ready.
pub fn spawn_ground_plane(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let shadow_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.0, 0.0, GROUND_SHADOW_OPACITY),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    });

    // Plane3d faces +Y already, no extra rotation needed.
    let plane = Plane3d::default()
        .mesh()
        .size(GROUND_PLANE_SIZE, GROUND_PLANE_SIZE);

    commands.spawn((
        Mesh3d(meshes.add(plane)),
        MeshMaterial3d(shadow_material),
        Transform::from_xyz(0.0, GROUND_PLANE_HEIGHT, 0.0),
        Visibility::Hidden,
        GroundShadowPlane,
        SuspendedUntilReady,
    ));
}
