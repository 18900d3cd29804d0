use bevy::asset::LoadState;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::overlay::{
    BODY_FONT_SIZE, COLUMN_GAP, COLUMN_MAX_WIDTH, LEAD_FONT_SIZE, PANEL_BACKGROUND_ALPHA,
    PANEL_PADDING, SCROLL_LINE_HEIGHT, TITLE_FONT_SIZE, TRAILING_SPACER_HEIGHT,
};

use crate::engine::assets::product_copy::ProductCopy;
use crate::engine::core::viewer_config::ViewerConfig;

/// Scrollable translucent overlay covering the canvas.
#[derive(Component)]
pub struct CopyPanel;

/// Centered text column inside the panel; its children are rebuilt when copy loads.
#[derive(Component)]
pub struct CopyColumn;

#[derive(Resource, Default)]
pub struct CopyLoader {
    pub handle: Option<Handle<ProductCopy>>,
    pub applied: bool,
}

pub struct CopyPanelPlugin;

impl Plugin for CopyPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CopyLoader>()
            .add_systems(Startup, (spawn_copy_panel, start_copy_loading))
            .add_systems(Update, (apply_loaded_copy, scroll_copy_panel));
    }
}

/// Spawn the overlay with the built-in copy so text is visible before the asset arrives.
pub fn spawn_copy_panel(mut commands: Commands) {
    let copy = ProductCopy::default();

    commands
        .spawn((
            CopyPanel,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(PANEL_PADDING)),
                overflow: Overflow::scroll_y(),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, PANEL_BACKGROUND_ALPHA)),
            ScrollPosition::default(),
        ))
        .with_children(|panel| {
            panel
                .spawn((
                    CopyColumn,
                    Node {
                        width: Val::Percent(100.0),
                        max_width: Val::Px(COLUMN_MAX_WIDTH),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(COLUMN_GAP),
                        ..default()
                    },
                ))
                .with_children(|column| spawn_copy_text(column, &copy));
        });
}

fn spawn_copy_text(column: &mut ChildSpawnerCommands, copy: &ProductCopy) {
    column.spawn(copy_text(&copy.title, TITLE_FONT_SIZE));

    if !copy.lead.is_empty() {
        column.spawn(copy_text(&copy.lead, LEAD_FONT_SIZE));
    }

    for paragraph in &copy.paragraphs {
        column.spawn(copy_text(paragraph, BODY_FONT_SIZE));
    }

    // Lets the last paragraph scroll clear of the model.
    column.spawn(Node {
        height: Val::Px(TRAILING_SPACER_HEIGHT),
        flex_shrink: 0.0,
        ..default()
    });
}

fn copy_text(content: &str, font_size: f32) -> impl Bundle {
    (
        Text::new(content),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::BLACK),
    )
}

pub fn start_copy_loading(
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut loader: ResMut<CopyLoader>,
) {
    info!("Loading product copy from {}", config.copy_path);
    loader.handle = Some(asset_server.load(config.copy_path.clone()));
    loader.applied = false;
}

/// Replace the column contents once the copy asset is available.
pub fn apply_loaded_copy(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    copies: Res<Assets<ProductCopy>>,
    mut loader: ResMut<CopyLoader>,
    columns: Query<Entity, With<CopyColumn>>,
) {
    if loader.applied {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Product copy failed to load, keeping built-in text: {}", err);
        loader.applied = true;
        return;
    }

    let Some(copy) = copies.get(&handle) else {
        return;
    };

    for column in &columns {
        commands
            .entity(column)
            .despawn_related::<Children>()
            .with_children(|column| spawn_copy_text(column, copy));
    }

    info!("Product copy applied: {}", copy.title);
    loader.applied = true;
}

/// Wheel delta in pixels; positive values scroll the content back toward the top.
pub fn scroll_delta_pixels(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y * SCROLL_LINE_HEIGHT,
        MouseScrollUnit::Pixel => y,
    }
}

pub fn scroll_copy_panel(
    mut scroll_events: EventReader<MouseWheel>,
    mut panels: Query<&mut ScrollPosition, With<CopyPanel>>,
) {
    let delta: f32 = scroll_events
        .read()
        .map(|ev| scroll_delta_pixels(ev.unit, ev.y))
        .sum();

    if delta.abs() <= f32::EPSILON {
        return;
    }

    // Layout clamps the far end against content height.
    for mut scroll in &mut panels {
        scroll.offset_y = (scroll.offset_y - delta).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn line_scroll_uses_line_height() {
        assert_eq!(
            scroll_delta_pixels(MouseScrollUnit::Line, 2.0),
            2.0 * SCROLL_LINE_HEIGHT
        );
        assert_eq!(scroll_delta_pixels(MouseScrollUnit::Pixel, -35.0), -35.0);
    }

    #[test]
    fn panel_starts_with_built_in_copy() {
        let mut world = World::new();
        world.run_system_once(spawn_copy_panel).unwrap();

        let texts: Vec<String> = world
            .query::<&Text>()
            .iter(&world)
            .map(|text| text.0.clone())
            .collect();

        let copy = ProductCopy::default();
        assert_eq!(texts.len(), 2 + copy.paragraphs.len());
        assert!(texts.contains(&copy.title));

        let panels = world
            .query_filtered::<&ScrollPosition, With<CopyPanel>>()
            .iter(&world)
            .count();
        assert_eq!(panels, 1);
    }

    #[test]
    fn wheel_scroll_never_goes_above_the_top() {
        let mut world = World::new();
        world.init_resource::<Events<MouseWheel>>();
        let panel = world.spawn((CopyPanel, ScrollPosition::default())).id();

        world.send_event(MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y: -120.0,
            window: Entity::PLACEHOLDER,
        });
        world.run_system_once(scroll_copy_panel).unwrap();
        assert_eq!(world.get::<ScrollPosition>(panel).unwrap().offset_y, 120.0);

        world.send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 10.0,
            window: Entity::PLACEHOLDER,
        });
        world.run_system_once(scroll_copy_panel).unwrap();
        assert_eq!(world.get::<ScrollPosition>(panel).unwrap().offset_y, 0.0);
    }
}
