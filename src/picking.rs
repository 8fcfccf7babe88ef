//! Picking: resolve a pointer position to the planet under it.
//!
//! A ray is cast from the camera through the pointer's normalized device
//! coordinates; the nearest intersected body sphere wins. The sun and the
//! starfield are never pickable.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::orbit::Body;
use crate::types::{FrameSet, SimulationState};

/// Tooltip offset from the pointer, in logical pixels.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(12.0, 12.0);

/// Plugin providing hover detection and the tooltip model.
pub struct BodyPickingPlugin;

impl Plugin for BodyPickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .init_resource::<Tooltip>()
            .add_systems(Update, detect_hover.in_set(FrameSet::Input));
    }
}

/// Resource tracking the currently hovered body.
#[derive(Resource, Default)]
pub struct HoveredBody {
    /// Entity of the currently hovered body, if any.
    pub entity: Option<Entity>,
}

/// What the tooltip overlay should show this frame.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Top-left corner in logical window pixels.
    pub position: Vec2,
}

impl Tooltip {
    /// Show `text` anchored near the pointer.
    pub fn show(&mut self, text: &str, pointer: Vec2) {
        self.visible = true;
        self.text.clear();
        self.text.push_str(text);
        self.position = pointer + TOOLTIP_OFFSET;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Convert a cursor position in window pixels to normalized device coordinates.
///
/// x grows to the right and y grows upward, both in [-1, 1].
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / window_size.x) * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    )
}

/// Ray from the camera eye through `ndc` on a perspective projection.
pub fn ray_from_ndc(
    camera: &Transform,
    projection: &PerspectiveProjection,
    ndc: Vec2,
) -> Option<Ray3d> {
    let half_height = (projection.fov * 0.5).tan();
    let half_width = half_height * projection.aspect_ratio;
    let view_dir = Vec3::new(ndc.x * half_width, ndc.y * half_height, -1.0);

    let direction = Dir3::new(camera.rotation * view_dir).ok()?;
    Some(Ray3d::new(camera.translation, direction))
}

/// Nearest body hit by `ray`.
///
/// Ties are broken by iteration order, so a fixed query order gives a fixed
/// answer.
pub fn pick_along_ray<'a>(
    ray: Ray3d,
    bodies: impl IntoIterator<Item = (Entity, &'a Body)>,
) -> Option<Entity> {
    let cast = RayCast3d::from_ray(ray, f32::MAX);

    bodies
        .into_iter()
        .filter_map(|(entity, body)| {
            let sphere = BoundingSphere::new(body.render_position(), body.radius);
            cast.sphere_intersection_at(&sphere).map(|t| (entity, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

/// Resolve a pointer position to the nearest body under it, if any.
pub fn pick<'a>(
    pointer_ndc: Vec2,
    camera: &Transform,
    projection: &Projection,
    bodies: impl IntoIterator<Item = (Entity, &'a Body)>,
) -> Option<Entity> {
    let Projection::Perspective(perspective) = projection else {
        return None;
    };
    let ray = ray_from_ndc(camera, perspective, pointer_ndc)?;
    pick_along_ray(ray, bodies)
}

/// Detect which body the pointer is over and update the tooltip.
fn detect_hover(
    state: Res<SimulationState>,
    camera_query: Query<(&Transform, &Projection), With<MainCamera>>,
    bodies: Query<(Entity, &Body)>,
    mut hovered: ResMut<HoveredBody>,
    mut tooltip: ResMut<Tooltip>,
) {
    let (Some(ndc), Some(screen)) = (state.pointer_ndc, state.pointer_screen) else {
        hovered.entity = None;
        tooltip.hide();
        return;
    };

    let Ok((camera, projection)) = camera_query.single() else {
        return;
    };

    hovered.entity = pick(ndc, camera, projection, bodies.iter());

    match hovered.entity.and_then(|entity| bodies.get(entity).ok()) {
        Some((_, body)) => tooltip.show(&body.name, screen),
        None => tooltip.hide(),
    }
}
