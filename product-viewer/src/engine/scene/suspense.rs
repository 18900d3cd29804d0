use bevy::prelude::*;

/// Entities hidden while the product model is loading.
#[derive(Component)]
pub struct SuspendedUntilReady;

pub fn reveal_suspended_subtree(mut query: Query<&mut Visibility, With<SuspendedUntilReady>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Inherited;
    }
}

pub fn suspend_subtree(mut query: Query<&mut Visibility, With<SuspendedUntilReady>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn only_suspended_entities_change_visibility() {
        let mut world = World::new();
        let suspended = world.spawn((Visibility::Hidden, SuspendedUntilReady)).id();
        let always_on = world.spawn(Visibility::Visible).id();

        world.run_system_once(reveal_suspended_subtree).unwrap();
        assert_eq!(world.get::<Visibility>(suspended), Some(&Visibility::Inherited));

        world.run_system_once(suspend_subtree).unwrap();
        assert_eq!(world.get::<Visibility>(suspended), Some(&Visibility::Hidden));
        assert_eq!(world.get::<Visibility>(always_on), Some(&Visibility::Visible));
    }
}
