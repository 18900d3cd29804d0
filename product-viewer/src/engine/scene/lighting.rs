use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, SPOT_LIGHT_INTENSITY, SPOT_LIGHT_OUTER_ANGLE, SPOT_LIGHT_POSITION,
    SPOT_LIGHT_RANGE,
};

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    // Full penumbra: the cone fades from the axis all the way to the outer angle.
    commands.spawn((
        SpotLight {
            intensity: SPOT_LIGHT_INTENSITY,
            range: SPOT_LIGHT_RANGE,
            outer_angle: SPOT_LIGHT_OUTER_ANGLE,
            inner_angle: 0.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SPOT_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
