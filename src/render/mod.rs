//! Rendering systems for the solar system visualization.
//!
//! This module provides the sun and planet meshes, orbit rings, lighting,
//! the starfield backdrop and the theme clear color.

pub mod background;
pub mod bodies;
pub mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::orbits::OrbitRingPlugin;
use crate::types::{FrameSet, SimulationState};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SimulationState::default().theme.clear_color()))
            .add_plugins((CelestialBodyPlugin, BackgroundPlugin, OrbitRingPlugin))
            .add_systems(Update, apply_theme_clear_color.in_set(FrameSet::Cosmetic));
    }
}

/// Follow the theme with the viewport clear color.
pub fn apply_theme_clear_color(state: Res<SimulationState>, mut clear_color: ResMut<ClearColor>) {
    let wanted = state.theme.clear_color();
    if clear_color.0 != wanted {
        clear_color.0 = wanted;
    }
}
