use bevy::math::Affine3A;
use bevy::prelude::*;

use crate::engine::assets::bounds::ModelBounds;
use crate::engine::controller::pointer_yaw::RotatableMesh;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

/// Marks a spawned model root whose hierarchy has not been re-centered yet.
#[derive(Component)]
pub struct PendingNormalization;

/// Result of one depth-first walk over a model hierarchy.
#[derive(Debug, Default)]
struct HierarchyScan {
    bounds: Option<ModelBounds>,
    first_mesh: Option<Entity>,
}

/// Re-center each pending model root on its bounds and pick the mesh that follows the pointer.
///
/// Bounds are measured in world space, ancestors included, so the stage's
/// scale and offset are cancelled and the geometry ends up around the world origin.
pub fn normalize_loaded_model(
    mut commands: Commands,
    pending: Query<Entity, With<PendingNormalization>>,
    parents: Query<&ChildOf>,
    children: Query<&Children>,
    mut transforms: Query<&mut Transform>,
    mesh_handles: Query<&Mesh3d>,
    meshes: Res<Assets<Mesh>>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for root in &pending {
        commands.entity(root).remove::<PendingNormalization>();

        let parent_affine = ancestor_affine(root, &parents, &transforms);

        let mut scan = HierarchyScan::default();
        scan_hierarchy(
            root,
            parent_affine,
            &children,
            &transforms,
            &mesh_handles,
            &meshes,
            &mut scan,
        );

        let center = match scan.bounds {
            Some(bounds) => {
                let center = bounds.center();
                match world_offset_to_parent_space(&parent_affine, center) {
                    Some(shift) => {
                        if let Ok(mut transform) = transforms.get_mut(root) {
                            transform.translation -= shift;
                        }
                    }
                    None => warn!("Model parent has a degenerate scale, leaving it uncentered"),
                }
                info!(
                    "✓ Model centered: bounds center {:?}, size {:?}",
                    center,
                    bounds.size()
                );
                center
            }
            None => {
                warn!("Model has no mesh geometry, leaving it uncentered");
                Vec3::ZERO
            }
        };

        match scan.first_mesh {
            Some(mesh) => {
                let rotation = transforms
                    .get(mesh)
                    .map(|transform| transform.rotation)
                    .unwrap_or_default();
                commands
                    .entity(mesh)
                    .insert(RotatableMesh::from_rotation(rotation));
            }
            None => info!("No mesh found in model, pointer rotation disabled"),
        }

        loading_progress.model_normalized = true;
        rpc_interface.send_notification(
            "model_loaded",
            serde_json::json!({
                "path": loading_progress.loaded_path,
                "center": center.to_array(),
            }),
        );
    }
}

/// World affine of everything above `entity`, root-most ancestor first.
fn ancestor_affine(
    entity: Entity,
    parents: &Query<&ChildOf>,
    transforms: &Query<&mut Transform>,
) -> Affine3A {
    let mut affine = Affine3A::IDENTITY;
    let mut current = entity;

    while let Ok(child_of) = parents.get(current) {
        current = child_of.parent();
        let local = transforms
            .get(current)
            .map(|transform| transform.compute_affine())
            .unwrap_or(Affine3A::IDENTITY);
        affine = local * affine;
    }

    affine
}

/// Translation in the parent's space that moves the model by `world_offset` in world space.
fn world_offset_to_parent_space(parent_affine: &Affine3A, world_offset: Vec3) -> Option<Vec3> {
    if parent_affine.matrix3.determinant().abs() <= f32::EPSILON {
        return None;
    }

    Some(parent_affine.inverse().transform_vector3(world_offset))
}

/// Pre-order walk: the entity first, then its children in order.
/// Accumulates transformed mesh bounds and remembers the first mesh reached.
fn scan_hierarchy(
    entity: Entity,
    parent_affine: Affine3A,
    children: &Query<&Children>,
    transforms: &Query<&mut Transform>,
    mesh_handles: &Query<&Mesh3d>,
    meshes: &Assets<Mesh>,
    scan: &mut HierarchyScan,
) {
    let local = transforms
        .get(entity)
        .map(|transform| transform.compute_affine())
        .unwrap_or(Affine3A::IDENTITY);
    let affine = parent_affine * local;

    if let Ok(mesh_handle) = mesh_handles.get(entity) {
        scan.first_mesh.get_or_insert(entity);

        if let Some(mesh_bounds) = meshes.get(&mesh_handle.0).and_then(ModelBounds::from_mesh) {
            let placed = mesh_bounds.transformed(&affine);
            scan.bounds = Some(match scan.bounds {
                Some(bounds) => bounds.union(&placed),
                None => placed,
            });
        }
    }

    let Ok(child_entities) = children.get(entity) else {
        return;
    };
    let child_entities: &[Entity] = child_entities;
    for &child in child_entities {
        scan_hierarchy(
            child,
            affine,
            children,
            transforms,
            mesh_handles,
            meshes,
            scan,
        );
    }
}
