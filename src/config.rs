//! Compiled-in configuration for the solar system model.
//!
//! The planet table and the two global scale constants fully determine the
//! orbital state at startup. There is no external file format; runtime
//! tuning goes through the [`SolarConfig`] resource before bodies spawn.

use bevy::prelude::*;
use thiserror::Error;

/// Multiplier applied to every configured orbit distance.
/// Tweak up/down to enlarge or shrink the whole system.
pub const DISTANCE_FACTOR: f64 = 1.5;

/// Multiplier applied to every angular speed.
/// 3 keeps the inner planets visible; raise for a faster system.
pub const SPEED_FACTOR: f64 = 3.0;

/// Radius of the (static, decorative) sun.
pub const SUN_RADIUS: f32 = 4.0;

/// Texture used for the sun, relative to the asset directory.
pub const SUN_TEXTURE: &str = "textures/sun.jpg";

/// Cosmetic self-rotation applied to each planet per unpaused tick (radians).
pub const SPIN_PER_TICK: f32 = 0.004;

/// Range accepted by the per-planet speed sliders.
pub const MULTIPLIER_MIN: f64 = 0.0;
pub const MULTIPLIER_MAX: f64 = 3.0;
pub const MULTIPLIER_STEP: f64 = 0.01;

/// Static description of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    /// Display name, also used for the tooltip and slider label.
    pub name: &'static str,
    /// Texture file under `textures/`.
    pub texture: &'static str,
    /// Sphere radius in render units.
    pub radius: f32,
    /// Orbit distance before `distance_factor` is applied.
    pub distance: f64,
    /// Orbital period in days.
    pub period: f64,
    /// Optional per-planet correction on top of the speed formula.
    pub speed_adjust: Option<f64>,
}

/// The eight planets, compact distances and relative periods.
pub const PLANETS: [PlanetConfig; 8] = [
    PlanetConfig {
        name: "Mercury",
        texture: "mercury.jpg",
        radius: 0.7,
        distance: 3.0,
        period: 88.0,
        speed_adjust: Some(0.7),
    },
    PlanetConfig {
        name: "Venus",
        texture: "venus.jpg",
        radius: 1.0,
        distance: 4.5,
        period: 225.0,
        speed_adjust: None,
    },
    PlanetConfig {
        name: "Earth",
        texture: "earth.jpg",
        radius: 1.1,
        distance: 6.0,
        period: 365.0,
        speed_adjust: None,
    },
    PlanetConfig {
        name: "Mars",
        texture: "mars.jpg",
        radius: 0.9,
        distance: 7.5,
        period: 687.0,
        speed_adjust: None,
    },
    PlanetConfig {
        name: "Jupiter",
        texture: "jupiter.jpg",
        radius: 2.2,
        distance: 10.0,
        period: 4331.0,
        speed_adjust: None,
    },
    PlanetConfig {
        name: "Saturn",
        texture: "saturn.jpg",
        radius: 2.0,
        distance: 12.0,
        period: 10747.0,
        speed_adjust: None,
    },
    PlanetConfig {
        name: "Uranus",
        texture: "uranus.jpg",
        radius: 1.8,
        distance: 14.0,
        period: 30589.0,
        speed_adjust: None,
    },
    PlanetConfig {
        name: "Neptune",
        texture: "neptune.jpg",
        radius: 1.7,
        distance: 16.0,
        period: 59800.0,
        speed_adjust: None,
    },
];

impl PlanetConfig {
    /// Asset path of the planet texture.
    pub fn texture_path(&self) -> String {
        format!("textures/{}", self.texture)
    }
}

/// Global scale constants, read once when the bodies are spawned.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SolarConfig {
    pub distance_factor: f64,
    pub speed_factor: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            distance_factor: DISTANCE_FACTOR,
            speed_factor: SPEED_FACTOR,
        }
    }
}

/// Settings for the starfield backdrop.
#[derive(Resource, Debug, Clone)]
pub struct StarfieldSettings {
    /// Number of stars.
    pub count: usize,
    /// Edge length of the cube the stars are scattered in.
    pub spread: f32,
    /// Texture whose arrival gates the starfield.
    pub texture: String,
    /// Star size range (render units).
    pub min_size: f32,
    pub max_size: f32,
    /// Base hue in [0, 1] and the total jitter around it.
    pub hue: f32,
    pub hue_jitter: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 3000,
            spread: 600.0,
            texture: "star.png".to_string(),
            min_size: 0.4,
            max_size: 1.2,
            hue: 0.55,
            hue_jitter: 0.1,
            saturation: 1.0,
            lightness: 0.9,
        }
    }
}

/// Settings for the orbit rings.
#[derive(Resource, Debug, Clone)]
pub struct OrbitRingSettings {
    pub visible: bool,
    pub segments: u32,
    pub color: Color,
}

impl Default for OrbitRingSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 80,
            color: Color::srgb_u8(0x44, 0x44, 0x44),
        }
    }
}

/// A planet table entry that cannot produce well-formed motion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name}: orbital period must be > 0, got {period}")]
    NonPositivePeriod { name: String, period: f64 },

    #[error("{name}: orbit distance must be >= 0, got {distance}")]
    NegativeDistance { name: String, distance: f64 },

    #[error("{name}: speed adjustment must be >= 0, got {value}")]
    InvalidOverride { name: String, value: f64 },

    #[error("{name}: angular speed is not finite")]
    NonFiniteSpeed { name: String },

    #[error("{name}: angular speed must be non-negative, got {speed}")]
    NegativeSpeed { name: String, speed: f64 },
}

/// Radians advanced per tick at multiplier 1.
///
/// `(speed_factor · 2π / period) · (speed_adjust or 1)`
pub fn base_angular_speed(period: f64, speed_factor: f64, speed_adjust: Option<f64>) -> f64 {
    (speed_factor * std::f64::consts::TAU / period) * speed_adjust.unwrap_or(1.0)
}

/// Check a planet entry against the scale constants.
///
/// Returns `(orbit_radius, base_angular_speed)` on success.
pub fn validate(planet: &PlanetConfig, solar: &SolarConfig) -> Result<(f64, f64), ConfigError> {
    let name = planet.name.to_string();

    if !(planet.period.is_finite() && planet.period > 0.0) {
        return Err(ConfigError::NonPositivePeriod {
            name,
            period: planet.period,
        });
    }

    let orbit_radius = planet.distance * solar.distance_factor;
    if !(orbit_radius.is_finite() && orbit_radius >= 0.0) {
        return Err(ConfigError::NegativeDistance {
            name,
            distance: orbit_radius,
        });
    }

    if let Some(value) = planet.speed_adjust
        && !(value.is_finite() && value >= 0.0)
    {
        return Err(ConfigError::InvalidOverride { name, value });
    }

    let speed = base_angular_speed(planet.period, solar.speed_factor, planet.speed_adjust);
    if !speed.is_finite() {
        return Err(ConfigError::NonFiniteSpeed { name });
    }
    // A negative speed would run the orbit backwards
    if speed < 0.0 {
        return Err(ConfigError::NegativeSpeed { name, speed });
    }

    Ok((orbit_radius, speed))
}
