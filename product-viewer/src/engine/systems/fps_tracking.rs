use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::rpc::web_rpc::WebRpcInterface;

const FPS_REPORT_INTERVAL_SECS: f32 = 0.5;

#[derive(Resource)]
pub struct FpsReportTimer(pub Timer);

impl Default for FpsReportTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            FPS_REPORT_INTERVAL_SECS,
            TimerMode::Repeating,
        ))
    }
}

/// Smoothed frame rate, if the diagnostic has samples yet.
pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut report_timer: ResMut<FpsReportTimer>,
    time: Res<Time>,
) {
    if !report_timer.0.tick(time.delta()).just_finished() {
        return;
    }

    if let Some(value) = smoothed_fps(&diagnostics) {
        rpc_interface.send_notification(
            "fps_update",
            serde_json::json!({
                "fps": value as f32
            }),
        );
    }
}
