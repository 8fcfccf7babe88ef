//! Orbit model: circular, tick-based angular motion in the XZ plane.
//!
//! Each planet carries its own angle and speed state. Positions are never
//! stored; they are always derived from `(orbit_radius, angle)`.

#[cfg(test)]
mod proptest_orbit;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::{
    ConfigError, MULTIPLIER_MAX, MULTIPLIER_MIN, PlanetConfig, SolarConfig, validate,
};

/// A simulated planet. The sun is not a `Body`.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Body {
    /// Display label.
    pub name: String,
    /// Radians advanced per tick at multiplier 1.
    pub base_angular_speed: f64,
    /// Distance from the origin, fixed for the body's lifetime.
    pub orbit_radius: f64,
    /// Current orbital angle in radians. Only ever grows.
    pub angle: f64,
    /// User-controlled scalar applied to the angular speed.
    pub speed_multiplier: f64,
    /// Sphere radius in render units, used for picking.
    pub radius: f32,
}

impl Body {
    /// Create a body at angle zero with multiplier 1.
    pub fn new(
        name: impl Into<String>,
        base_angular_speed: f64,
        orbit_radius: f64,
        radius: f32,
    ) -> Self {
        Self {
            name: name.into(),
            base_angular_speed,
            orbit_radius,
            angle: 0.0,
            speed_multiplier: 1.0,
            radius,
        }
    }

    /// Build a body from a planet table entry.
    pub fn from_config(planet: &PlanetConfig, solar: &SolarConfig) -> Result<Self, ConfigError> {
        let (orbit_radius, speed) = validate(planet, solar)?;
        Ok(Self::new(planet.name, speed, orbit_radius, planet.radius))
    }

    /// Advance the angle by `dt_ticks` ticks at the current multiplier.
    pub fn advance(&mut self, dt_ticks: f64) {
        self.angle += self.effective_speed() * dt_ticks;
    }

    /// Angular speed including the user multiplier.
    pub fn effective_speed(&self) -> f64 {
        self.base_angular_speed * self.speed_multiplier
    }

    /// Position in the orbital plane: `(r·cos θ, 0, r·sin θ)`.
    pub fn position(&self) -> DVec3 {
        DVec3::new(
            self.orbit_radius * self.angle.cos(),
            0.0,
            self.orbit_radius * self.angle.sin(),
        )
    }

    /// Position converted to render coordinates.
    pub fn render_position(&self) -> Vec3 {
        self.position().as_vec3()
    }

    /// Store a new multiplier, clamped to the slider range.
    ///
    /// Non-finite values are ignored.
    pub fn set_speed_multiplier(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.speed_multiplier = value.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX);
    }
}

/// Build every valid body from a table, logging and skipping rejected entries.
pub fn bodies_from_table(
    planets: &[PlanetConfig],
    solar: &SolarConfig,
) -> Vec<(PlanetConfig, Body)> {
    planets
        .iter()
        .filter_map(|planet| match Body::from_config(planet, solar) {
            Ok(body) => Some((*planet, body)),
            Err(err) => {
                error!("Rejected planet configuration: {err}");
                None
            }
        })
        .collect()
}
