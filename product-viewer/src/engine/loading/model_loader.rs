use std::sync::Arc;

use bevy::asset::{AssetLoadError, LoadState};
use bevy::gltf::{Gltf, GltfAssetLabel};
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::model_assets::ModelAssets;
use crate::engine::core::app_state::AppState;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::loading::normalize::PendingNormalization;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::suspense::SuspendedUntilReady;
use crate::rpc::web_rpc::WebRpcInterface;

/// Parent of the model scene. Carries the presentation scale and offset.
#[derive(Component)]
pub struct ProductStage;

/// Scene root of the product model, re-centered once after spawning.
#[derive(Component)]
pub struct ProductModel;

pub fn start_model_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut model_assets: ResMut<ModelAssets>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    spawn_model_stage(
        &mut commands,
        &asset_server,
        &config,
        &mut model_assets,
        &mut loading_progress,
    );
}

fn spawn_model_stage(
    commands: &mut Commands,
    asset_server: &AssetServer,
    config: &ViewerConfig,
    model_assets: &mut ModelAssets,
    loading_progress: &mut LoadingProgress,
) {
    info!("Loading product model from: {}", config.model_path);

    let gltf: Handle<Gltf> = asset_server.load(config.model_path.clone());
    let scene: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(config.model_path.clone()));

    let stage = commands
        .spawn((
            ProductStage,
            SuspendedUntilReady,
            Transform::from_translation(config.model_offset)
                .with_scale(Vec3::splat(config.model_scale)),
            Visibility::Hidden,
        ))
        .with_children(|stage| {
            stage
                .spawn((SceneRoot(scene.clone()), ProductModel, Transform::IDENTITY))
                .observe(mark_for_normalization);
        })
        .id();

    model_assets.gltf = Some(gltf);
    model_assets.scene = Some(scene);
    model_assets.stage = Some(stage);
    loading_progress.model_requested = true;
    loading_progress.loaded_path = Some(config.model_path.clone());
}

/// Scene instances are spawned after `Update`; normalization runs on the next frame.
fn mark_for_normalization(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.entity(trigger.target()).insert(PendingNormalization);
}

/// First failure among the load states of one model's handles.
fn failed_load<I>(states: I) -> Option<Arc<AssetLoadError>>
where
    I: IntoIterator<Item = Option<LoadState>>,
{
    states.into_iter().find_map(|state| match state {
        Some(LoadState::Failed(error)) => Some(error),
        _ => None,
    })
}

/// Report a failed model load once. The view stays in `Loading`.
///
/// A missing file fails both handles, a file that does not parse only fails the
/// base glTF handle, so both are watched.
pub fn watch_model_load_state(
    asset_server: Res<AssetServer>,
    model_assets: Res<ModelAssets>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.model_failed || loading_progress.model_normalized {
        return;
    }

    let gltf_state = model_assets
        .gltf
        .as_ref()
        .and_then(|handle| asset_server.get_load_state(handle));
    let scene_state = model_assets
        .scene
        .as_ref()
        .and_then(|handle| asset_server.get_load_state(handle));

    let Some(error) = failed_load([gltf_state, scene_state]) else {
        return;
    };

    let path = loading_progress.loaded_path.clone().unwrap_or_default();
    error!("Failed to load product model {}: {}", path, error);

    loading_progress.model_failed = true;
    rpc_interface.send_notification(
        "model_load_failed",
        serde_json::json!({
            "path": path,
            "error": error.to_string(),
        }),
    );
}

/// Swap the model when the configured path changes. Same path is a no-op.
pub fn reload_model_on_path_change(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut model_assets: ResMut<ModelAssets>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !config.is_changed() {
        return;
    }
    if loading_progress.loaded_path.as_deref() == Some(config.model_path.as_str()) {
        return;
    }

    if let Some(stage) = model_assets.stage.take() {
        commands.entity(stage).despawn();
    }
    *loading_progress = LoadingProgress::default();
    next_state.set(AppState::Loading);

    spawn_model_stage(
        &mut commands,
        &asset_server,
        &config,
        &mut model_assets,
        &mut loading_progress,
    );
}
