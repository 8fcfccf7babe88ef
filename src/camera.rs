//! Camera system for the solar system view.
//!
//! Provides the perspective camera, click-to-zoom retargeting and aspect
//! updates on resize.

use bevy::prelude::*;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 60.0;

/// Near clipping plane.
pub const NEAR: f32 = 0.1;

/// Far clipping plane.
pub const FAR: f32 = 1000.0;

/// Default eye position, above and behind the ecliptic.
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 16.0, 42.0);

/// Offset from a body's position the camera jumps to on click.
pub const ZOOM_OFFSET: Vec3 = Vec3::new(0.0, 4.0, 8.0);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// The projection the camera starts with.
pub fn default_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        near: NEAR,
        far: FAR,
        ..default()
    }
}

/// The camera pose at startup, looking at the sun.
pub fn default_camera_transform() -> Transform {
    Transform::from_translation(DEFAULT_EYE).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(default_projection()),
        default_camera_transform(),
        MainCamera,
    ));
}

/// Cut the camera to `target + ZOOM_OFFSET`, looking at `target`.
///
/// There is no transition; the move is instantaneous.
pub fn zoom_to(camera: &mut Transform, target: Vec3) {
    *camera = Transform::from_translation(target + ZOOM_OFFSET).looking_at(target, Vec3::Y);
}

/// Keep the projection undistorted for a `width × height` surface.
///
/// Degenerate sizes (a minimized window) are ignored.
pub fn set_aspect(projection: &mut Projection, width: f32, height: f32) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = width / height;
    }
}
