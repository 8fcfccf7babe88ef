//! Control panel: one speed slider per planet plus pause and theme toggles.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{MULTIPLIER_MAX, MULTIPLIER_MIN, MULTIPLIER_STEP};
use crate::input::{set_speed_multiplier, toggle_pause, toggle_theme};
use crate::orbit::Body;
use crate::types::{SimulationState, Theme};
use crate::ui::icons;

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG_DARK: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 220);
    pub const PANEL_BG_LIGHT: Color32 = Color32::from_rgba_premultiplied(235, 235, 240, 220);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
}

/// Icon and text of the pause toggle.
pub fn pause_button_text(state: &SimulationState) -> String {
    let icon = if state.paused {
        icons::PLAY
    } else {
        icons::PAUSE
    };
    format!("{icon} {}", state.pause_label())
}

/// Icon and text of the theme toggle.
pub fn theme_button_text(theme: Theme) -> String {
    let icon = if theme.is_dark() {
        icons::SUN
    } else {
        icons::MOON
    };
    format!("{icon} {}", theme.toggle_label())
}

/// egui visuals matching the theme.
fn theme_visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    }
}

/// System that renders the control panel.
pub fn controls_panel(
    mut contexts: EguiContexts,
    mut state: ResMut<SimulationState>,
    mut bodies: Query<&mut Body>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if ctx.style().visuals.dark_mode != state.theme.is_dark() {
        ctx.set_visuals(theme_visuals(state.theme));
    }

    let fill = if state.theme.is_dark() {
        colors::PANEL_BG_DARK
    } else {
        colors::PANEL_BG_LIGHT
    };

    egui::Window::new(format!("{} Planets", icons::PLANET))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .resizable(false)
        .collapsible(true)
        .frame(egui::Frame::window(&ctx.style()).fill(fill))
        .show(ctx, |ui| {
            // Inner planets first
            let mut sorted: Vec<Mut<Body>> = bodies.iter_mut().collect();
            sorted.sort_by(|a, b| a.orbit_radius.total_cmp(&b.orbit_radius));

            egui::Grid::new("speed_sliders").num_columns(2).show(ui, |ui| {
                for body in sorted.iter_mut() {
                    ui.label(body.name.as_str());

                    let mut value = body.speed_multiplier;
                    let slider = egui::Slider::new(&mut value, MULTIPLIER_MIN..=MULTIPLIER_MAX)
                        .step_by(MULTIPLIER_STEP)
                        .fixed_decimals(2);
                    if ui.add(slider).changed() {
                        set_speed_multiplier(body, value);
                    }
                    ui.end_row();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let color = if state.paused {
                    colors::PLAY_ICON
                } else {
                    colors::PAUSE_ICON
                };
                let label = egui::RichText::new(pause_button_text(&state)).color(color);
                let pause = egui::Button::new(label);
                if ui.add(pause).on_hover_text("Space").clicked() {
                    toggle_pause(&mut state);
                }

                if ui
                    .button(theme_button_text(state.theme))
                    .on_hover_text("T")
                    .clicked()
                {
                    toggle_theme(&mut state);
                }
            });
        });
}
