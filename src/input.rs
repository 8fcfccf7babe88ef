//! Input controller: translates UI and window events into state mutations.
//!
//! Provides the slider, pause, theme and resize operations used by the UI
//! panel, plus keyboard shortcuts, pointer tracking and click-to-zoom.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera::{MainCamera, default_camera_transform, set_aspect, zoom_to};
use crate::orbit::Body;
use crate::picking::{cursor_to_ndc, pick};
use crate::types::{FrameSet, SimulationState, Theme};

/// Whether the UI overlay currently owns the pointer.
///
/// Written by the UI pass; pointer picking and click-to-zoom ignore the
/// pointer while it is set.
#[derive(Resource, Default)]
pub struct UiPointerCapture(pub bool);

/// Plugin providing keyboard shortcuts, pointer tracking, zoom and resize.
pub struct InputControllerPlugin;

impl Plugin for InputControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiPointerCapture>()
            .add_systems(Update, track_pointer.in_set(FrameSet::Pointer))
            .add_systems(
                Update,
                (keyboard_shortcuts, click_to_zoom, handle_resize)
                    .in_set(FrameSet::Input),
            );
    }
}

/// Store a slider value into a body's multiplier.
pub fn set_speed_multiplier(body: &mut Body, value: f64) {
    body.set_speed_multiplier(value);
    debug!(
        "{} speed multiplier set to {:.2}",
        body.name, body.speed_multiplier
    );
}

/// Flip the pause flag. Returns the new value.
pub fn toggle_pause(state: &mut SimulationState) -> bool {
    state.paused = !state.paused;
    if state.paused {
        info!("Simulation paused");
    } else {
        info!("Simulation resumed");
    }
    state.paused
}

/// Flip the theme. Returns the new theme.
pub fn toggle_theme(state: &mut SimulationState) -> Theme {
    state.theme = state.theme.toggled();
    info!("Theme switched to {:?}", state.theme);
    state.theme
}

/// Update the camera aspect after the surface became `width × height`.
pub fn on_resize(projection: &mut Projection, width: f32, height: f32) {
    set_aspect(projection, width, height);
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<SimulationState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        toggle_pause(&mut state);
    }

    // T: toggle theme
    if keys.just_pressed(KeyCode::KeyT) {
        toggle_theme(&mut state);
    }

    // Home: back to the overview
    if keys.just_pressed(KeyCode::Home) {
        if let Ok(mut transform) = camera_query.single_mut() {
            *transform = default_camera_transform();
        }
    }
}

/// Record the pointer position in window pixels and NDC.
fn track_pointer(
    window_query: Query<&Window, With<PrimaryWindow>>,
    capture: Res<UiPointerCapture>,
    mut state: ResMut<SimulationState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let cursor = window.cursor_position().filter(|_| !capture.0);
    let ndc = cursor.map(|pos| cursor_to_ndc(pos, window.size()));

    // Only write on change so the state is not marked changed every frame
    if state.pointer_screen != cursor || state.pointer_ndc != ndc {
        state.pointer_screen = cursor;
        state.pointer_ndc = ndc;
    }
}

/// Jump the camera next to the body under the pointer on left click.
fn click_to_zoom(
    mouse: Res<ButtonInput<MouseButton>>,
    state: Res<SimulationState>,
    capture: Res<UiPointerCapture>,
    bodies: Query<(Entity, &Body)>,
    mut camera_query: Query<(&mut Transform, &Projection), With<MainCamera>>,
) {
    if !mouse.just_pressed(MouseButton::Left) || capture.0 {
        return;
    }

    let Some(ndc) = state.pointer_ndc else {
        return;
    };

    let Ok((mut camera, projection)) = camera_query.single_mut() else {
        return;
    };

    let Some(entity) = pick(ndc, &camera, projection, bodies.iter()) else {
        return;
    };

    if let Ok((_, body)) = bodies.get(entity) {
        let target = body.render_position();
        zoom_to(&mut camera, target);
        info!("Zoomed to {} at {:?}", body.name, target);
    }
}

/// Keep the camera aspect in sync with the window size.
fn handle_resize(
    mut resized: MessageReader<WindowResized>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    on_resize(&mut projection, last.width, last.height);
}
