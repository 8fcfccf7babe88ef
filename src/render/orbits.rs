//! Orbit ring rendering using Bevy Gizmos.
//!
//! Each planet's circular path is drawn as a closed polyline in the XZ plane.

use bevy::prelude::*;

use crate::config::OrbitRingSettings;
use crate::orbit::Body;
use crate::types::FrameSet;

/// Plugin providing orbit ring visualization.
pub struct OrbitRingPlugin;

impl Plugin for OrbitRingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRingSettings>()
            .add_systems(Update, draw_orbit_rings.in_set(FrameSet::Cosmetic));
    }
}

/// Points of a closed circle of `radius` in the XZ plane.
///
/// The first point is repeated at the end so consecutive pairs cover the
/// whole ring.
pub fn ring_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let t = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vec3::new(radius * t.cos(), 0.0, radius * t.sin())
        })
        .collect()
}

/// Draw one ring per planet.
fn draw_orbit_rings(mut gizmos: Gizmos, settings: Res<OrbitRingSettings>, bodies: Query<&Body>) {
    if !settings.visible {
        return;
    }

    for body in bodies.iter() {
        let points = ring_points(body.orbit_radius as f32, settings.segments);
        for pair in points.windows(2) {
            gizmos.line(pair[0], pair[1], settings.color);
        }
    }
}
