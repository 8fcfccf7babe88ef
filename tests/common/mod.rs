//! Common test utilities for integration tests.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use orrery::camera::{MainCamera, default_projection};
use orrery::frame::FramePlugin;
use orrery::input::InputControllerPlugin;
use orrery::orbit::Body;
use orrery::picking::BodyPickingPlugin;

/// Headless app with the simulation plugins and the input resources a
/// window would normally provide.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .add_message::<WindowResized>()
        .add_plugins((FramePlugin, InputControllerPlugin, BodyPickingPlugin));
    app
}

/// Spawn a body with its transform at the derived position.
pub fn spawn_body(app: &mut App, body: Body) -> Entity {
    let transform = Transform::from_translation(body.render_position());
    app.world_mut().spawn((body, transform)).id()
}

/// Spawn the main camera at `eye` looking at `target`, square aspect.
pub fn spawn_camera(app: &mut App, eye: Vec3, target: Vec3) -> Entity {
    let mut projection = default_projection();
    projection.aspect_ratio = 1.0;
    app.world_mut()
        .spawn((
            Transform::from_translation(eye).looking_at(target, Vec3::Y),
            Projection::Perspective(projection),
            MainCamera,
        ))
        .id()
}

/// Spawn a primary window with the cursor at `cursor` (logical pixels).
pub fn spawn_window(app: &mut App, cursor: Vec2) -> Entity {
    let mut window = Window::default();
    window.set_cursor_position(Some(cursor));
    app.world_mut().spawn((window, PrimaryWindow)).id()
}

/// Move the cursor inside an existing window.
pub fn move_cursor(app: &mut App, window: Entity, cursor: Option<Vec2>) {
    let mut entity = app.world_mut().entity_mut(window);
    let Some(mut window) = entity.get_mut::<Window>() else {
        panic!("window entity has no Window");
    };
    window.set_cursor_position(cursor);
}

/// Logical size of a window spawned by [`spawn_window`].
pub fn window_size(app: &App, window: Entity) -> Vec2 {
    app.world()
        .get::<Window>(window)
        .map(|w| w.size())
        .unwrap_or_default()
}

/// Press a key for the next update, clearing any earlier press.
pub fn tap_key(app: &mut App, key: KeyCode) {
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release_all();
    keys.clear();
    keys.press(key);
}

/// Press the left mouse button for the next update.
pub fn click(app: &mut App) {
    let mut mouse = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    mouse.release_all();
    mouse.clear();
    mouse.press(MouseButton::Left);
}
