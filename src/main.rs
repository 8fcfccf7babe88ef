//! Orrery - animated solar system model
//!
//! Eight planets on circular rings around a static sun, with per-planet speed
//! sliders, hover tooltips, click-to-zoom, pause and a light/dark theme.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::config::SolarConfig;
use orrery::frame::FramePlugin;
use orrery::input::InputControllerPlugin;
use orrery::picking::BodyPickingPlugin;
use orrery::render::RenderPlugin;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SolarConfig::default())
        .add_plugins((
            CameraPlugin,
            FramePlugin,
            InputControllerPlugin,
            BodyPickingPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
