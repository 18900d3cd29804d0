use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::model_assets::ModelAssets;
use crate::engine::assets::product_copy::ProductCopy;
use crate::engine::camera::orbit_rig::{auto_rotate_orbit, spawn_orbit_camera};
use crate::engine::controller::pointer_yaw::PointerYawPlugin;
use crate::engine::core::app_state::{AppState, transition_to_ready};
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::model_loader::{
    reload_model_on_path_change, start_model_loading, watch_model_load_state,
};
use crate::engine::loading::normalize::normalize_loaded_model;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::ground::spawn_ground_plane;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::suspense::{reveal_suspended_subtree, suspend_subtree};
use crate::engine::systems::fps_tracking::{FpsReportTimer, fps_notification_system};
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::copy_panel::CopyPanelPlugin;

const LOG_FILTER: &str = "wgpu=error,naga=warn,product_viewer=info";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ProductCopy as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ProductCopy>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(PointerYawPlugin)
        .add_plugins(CopyPanelPlugin)
        .insert_resource(ClearColor(Color::NONE));

    app.init_resource::<ViewerConfig>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ModelAssets>()
        .init_resource::<FpsReportTimer>();

    app.add_systems(Startup, (setup, start_model_loading).chain())
        .add_systems(
            Update,
            (
                watch_model_load_state,
                normalize_loaded_model,
                transition_to_ready,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                reload_model_on_path_change,
                auto_rotate_orbit,
                fps_notification_system,
            ),
        )
        .add_systems(OnEnter(AppState::Ready), reveal_suspended_subtree)
        .add_systems(OnEnter(AppState::Loading), suspend_subtree);

    app
}

// Static scene: camera rig, lights and the ground shadow plane.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("=== PRODUCT VIEWER ===");

    spawn_orbit_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_ground_plane(&mut commands, &mut meshes, &mut materials);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
