use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use crate::life::LifeState;

/// The currently published simulation snapshot plus everything that drives it.
///
/// `life` is replaced wholesale on every mutation; systems never reach inside
/// a snapshot to edit it.
#[derive(Resource)]
pub struct SimState {
    pub life: LifeState,
    pub generation: u64,
    pub paused: bool,
    pub tick: Timer,
    pub tick_ms: u64,
    pub seed_radius: i32,
    pub seed_density: f64,
    pub redraw_requested: bool,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            life: LifeState::empty(),
            generation: 0,
            paused: false,
            tick: Timer::from_seconds(0.5, TimerMode::Repeating),
            tick_ms: 500,
            seed_radius: 12,
            seed_density: 0.08,
            redraw_requested: true,
        }
    }
}

impl SimState {
    /// Replaces the field with a fresh random one from the current seeding
    /// parameters and restarts the generation count.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        self.life = LifeState::random_field(self.seed_radius, self.seed_density, rng);
        self.generation = 0;
        self.redraw_requested = true;
    }

    pub fn clear(&mut self) {
        self.life = LifeState::empty();
        self.generation = 0;
        self.redraw_requested = true;
    }

    pub fn set_tick_ms(&mut self, ms: u64) {
        self.tick_ms = ms;
        self.tick.set_duration(Duration::from_millis(ms));
    }
}

// --- Systems ---

pub fn seed_system(mut state: ResMut<SimState>) {
    state.reseed(&mut rand::thread_rng());
    info!(
        "Seeded {} cells within radius {}",
        state.life.population(),
        state.seed_radius
    );
}

pub fn tick_system(time: Res<Time>, mut state: ResMut<SimState>) {
    if state.paused {
        return;
    }
    if state.tick.tick(time.delta()).just_finished() {
        state.life = state.life.advance();
        state.generation += 1;
        state.redraw_requested = true;
    }
}

pub fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<SimState>) {
    if keys.just_pressed(KeyCode::Space) {
        state.paused = !state.paused;
    }
}
