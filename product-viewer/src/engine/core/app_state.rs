use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Lifecycle of the product view. The model subtree renders only in `Ready`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

impl AppState {
    /// Identifier reported to the host page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
        }
    }
}

pub fn transition_to_ready(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_normalized {
        info!("→ Transitioning to Ready state");
        next_state.set(AppState::Ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn stays_loading_until_the_model_is_normalized() {
        let mut world = World::new();
        world.init_resource::<LoadingProgress>();
        world.init_resource::<NextState<AppState>>();

        world.run_system_once(transition_to_ready).unwrap();
        assert!(matches!(
            world.resource::<NextState<AppState>>(),
            NextState::Unchanged
        ));

        world.resource_mut::<LoadingProgress>().model_normalized = true;
        world.run_system_once(transition_to_ready).unwrap();
        assert!(matches!(
            world.resource::<NextState<AppState>>(),
            NextState::Pending(AppState::Ready)
        ));
    }

    #[test]
    fn a_failed_load_never_becomes_ready() {
        let mut world = World::new();
        world.insert_resource(LoadingProgress {
            model_requested: true,
            model_failed: true,
            ..default()
        });
        world.init_resource::<NextState<AppState>>();

        world.run_system_once(transition_to_ready).unwrap();
        assert!(matches!(
            world.resource::<NextState<AppState>>(),
            NextState::Unchanged
        ));
    }
}
