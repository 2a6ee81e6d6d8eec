use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::state::SimState;

pub fn ui_system(mut contexts: EguiContexts, mut state: ResMut<SimState>) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Simulation").show(ctx, |ui| {
            ui.label(format!("Generation: {}", state.generation));
            ui.label(format!("Population: {}", state.life.population()));
            if state.life.is_empty() {
                ui.label(egui::RichText::new("Extinct").color(egui::Color32::LIGHT_RED));
            }

            ui.separator();

            ui.checkbox(&mut state.paused, "Paused (Space)");

            let mut tick_ms = state.tick_ms;
            if ui
                .add(egui::Slider::new(&mut tick_ms, 50..=2000).text("Tick interval (ms)"))
                .changed()
            {
                state.set_tick_ms(tick_ms);
            }

            ui.separator();
            ui.label("Field Seeding");

            let mut radius = state.seed_radius;
            if ui
                .add(egui::Slider::new(&mut radius, 0..=40).text("Radius"))
                .changed()
            {
                state.seed_radius = radius;
            }

            let mut density = state.seed_density;
            if ui
                .add(egui::Slider::new(&mut density, 0.0..=1.0).text("Density"))
                .changed()
            {
                state.seed_density = density;
            }

            ui.horizontal(|ui| {
                if ui.button("Reseed").clicked() {
                    state.reseed(&mut rand::thread_rng());
                }
                if ui.button("Clear").clicked() {
                    state.clear();
                }
            });
        });
    }
}
