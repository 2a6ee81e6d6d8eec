use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

mod board;
mod life;
mod state;
mod ui;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Life Plane".into(),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            }),
            EguiPlugin::default(),
        ))
        .init_resource::<state::SimState>()
        .add_systems(Startup, (board::setup_camera, state::seed_system))
        .add_systems(EguiPrimaryContextPass, ui::ui_system)
        .add_systems(
            Update,
            (
                state::keyboard_system,
                state::tick_system,
                board::pointer_system,
                board::sync_board_system,
                board::grid_system,
            )
                .chain(),
        )
        .run();
}
