use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::life::CellCoord;
use crate::state::SimState;

pub const CELL_SIZE: f32 = 24.0;
const CELL_INSET: f32 = 2.0;
/// Ages at or beyond this render with the fully matured color.
const AGE_COLOR_SPAN: f32 = 16.0;
const GRID_COLOR: Color = Color::srgba(0.25, 0.28, 0.38, 0.6);

/// Marker for the sprites mirroring the published snapshot.
#[derive(Component)]
pub struct CellSprite;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Grid coordinates live on a centered, y-up lattice: world position is just
/// the coordinate scaled by the cell size.
pub fn cell_to_world(cell: CellCoord) -> Vec2 {
    Vec2::new(cell.x as f32 * CELL_SIZE, cell.y as f32 * CELL_SIZE)
}

pub fn world_to_cell(world: Vec2) -> CellCoord {
    CellCoord::new(
        (world.x / CELL_SIZE).round() as i32,
        (world.y / CELL_SIZE).round() as i32,
    )
}

/// Newborns are a cold azure; long-lived cells drift toward violet.
fn age_color(age: u32) -> Color {
    let t = (age as f32 / AGE_COLOR_SPAN).min(1.0);
    Color::srgb(0.15 + 0.55 * t, 0.55 - 0.35 * t, 0.95 - 0.25 * t)
}

// --- Systems ---

pub fn sync_board_system(
    mut commands: Commands,
    mut state: ResMut<SimState>,
    sprites: Query<Entity, With<CellSprite>>,
) {
    if !state.redraw_requested {
        return;
    }

    for entity in sprites.iter() {
        commands.entity(entity).despawn();
    }

    for cell in state.life.alive_cells() {
        let pos = cell_to_world(cell);
        commands.spawn((
            Sprite {
                color: age_color(state.life.age_of(cell)),
                custom_size: Some(Vec2::splat(CELL_SIZE - CELL_INSET)),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 0.0),
            CellSprite,
        ));
    }

    state.redraw_requested = false;
}

/// Draws cell-boundary lines across the visible window. Lines sit half a cell
/// off the lattice so cells render between them, not on them.
pub fn grid_system(mut gizmos: Gizmos, windows: Query<&Window, With<PrimaryWindow>>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let half_w = window.width() / 2.0;
    let half_h = window.height() / 2.0;

    let x_cells = (half_w / CELL_SIZE).ceil() as i32;
    for i in -x_cells..=x_cells {
        let x = i as f32 * CELL_SIZE + CELL_SIZE / 2.0;
        gizmos.line_2d(Vec2::new(x, -half_h), Vec2::new(x, half_h), GRID_COLOR);
    }

    let y_cells = (half_h / CELL_SIZE).ceil() as i32;
    for i in -y_cells..=y_cells {
        let y = i as f32 * CELL_SIZE + CELL_SIZE / 2.0;
        gizmos.line_2d(Vec2::new(-half_w, y), Vec2::new(half_w, y), GRID_COLOR);
    }
}

/// Left click ignites a random cluster at the tapped cell; right click
/// activates exactly that cell.
pub fn pointer_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut state: ResMut<SimState>,
) {
    let left = buttons.just_pressed(MouseButton::Left);
    let right = buttons.just_pressed(MouseButton::Right);
    if !left && !right {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let cell = world_to_cell(world);
    if left {
        state.life = state
            .life
            .activate_random_cluster(cell, &mut rand::thread_rng());
        info!("Ignited cluster around ({}, {})", cell.x, cell.y);
    } else {
        state.life = state.life.activate([cell]);
    }
    state.redraw_requested = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_mapping_round_trips() {
        for cell in [
            CellCoord::new(0, 0),
            CellCoord::new(3, -7),
            CellCoord::new(-120, 45),
        ] {
            assert_eq!(world_to_cell(cell_to_world(cell)), cell);
        }
    }

    #[test]
    fn world_points_snap_to_nearest_cell() {
        assert_eq!(world_to_cell(Vec2::new(11.0, -13.0)), CellCoord::new(0, -1));
        assert_eq!(
            world_to_cell(Vec2::new(-CELL_SIZE * 2.4, CELL_SIZE * 0.6)),
            CellCoord::new(-2, 1)
        );
    }
}
