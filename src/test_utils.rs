//! Test utilities for orbit and picking tests.
//!
//! Provides fixtures for building bodies and cameras without a window.

use bevy::prelude::*;

use crate::config::{PLANETS, SolarConfig};
use crate::orbit::{Body, bodies_from_table};

/// Fixtures for creating test bodies and cameras.
pub mod fixtures {
    use super::*;

    /// A body with the given speed and orbit radius and a unit sphere.
    pub fn body(name: &str, base_angular_speed: f64, orbit_radius: f64) -> Body {
        Body::new(name, base_angular_speed, orbit_radius, 1.0)
    }

    /// The default eight planets.
    pub fn planets() -> Vec<Body> {
        bodies_from_table(&PLANETS, &SolarConfig::default())
            .into_iter()
            .map(|(_, body)| body)
            .collect()
    }

    /// Perspective projection matching the app camera, square aspect.
    pub fn projection() -> PerspectiveProjection {
        PerspectiveProjection {
            fov: 60f32.to_radians(),
            aspect_ratio: 1.0,
            near: 0.1,
            far: 1000.0,
            ..default()
        }
    }

    /// Camera transform at `eye` looking at `target`.
    pub fn camera_at(eye: Vec3, target: Vec3) -> Transform {
        Transform::from_translation(eye).looking_at(target, Vec3::Y)
    }
}

/// Assertions over orbital invariants.
pub mod assertions {
    use super::*;
    use bevy::math::DVec3;

    /// Position predicted from radius and angle.
    pub fn expected_position(body: &Body) -> DVec3 {
        DVec3::new(
            body.orbit_radius * body.angle.cos(),
            0.0,
            body.orbit_radius * body.angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planets_fixture() {
        let planets = fixtures::planets();
        assert_eq!(planets.len(), 8);
        assert_eq!(planets[0].name, "Mercury");
        assert_eq!(planets[7].name, "Neptune");
    }

    #[test]
    fn test_camera_fixture_faces_target() {
        let camera = fixtures::camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let forward = *camera.forward();
        assert_relative_eq!(forward.z, -1.0, epsilon = 1e-6);
    }
}
