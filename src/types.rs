//! Process-wide simulation state shared by input, frame and picking systems.

use bevy::prelude::*;

/// System sets ordering one frame.
///
/// The pointer is sampled first. Input and picking then see this frame's
/// pointer against the positions the user saw on the previous frame. Orbits
/// advance after that, then cosmetic animation.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Pointer position in window pixels and NDC
    Pointer,
    /// Keyboard, hover, click and resize handling
    Input,
    /// Orbit advancement and transform sync (skipped while paused)
    Advance,
    /// Starfield drift/twinkle, runs paused or not
    Cosmetic,
}

/// Light/dark presentation theme. Cosmetic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Viewport clear color.
    pub fn clear_color(self) -> Color {
        match self {
            Theme::Dark => Color::BLACK,
            Theme::Light => Color::WHITE,
        }
    }

    /// Label of the theme toggle: names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light",
            Theme::Light => "Dark",
        }
    }
}

/// Simulation state mutated by input and read by the frame driver and picking.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationState {
    /// Whether orbital motion is paused
    pub paused: bool,
    /// Current presentation theme
    pub theme: Theme,
    /// Last known pointer position in normalized device coordinates
    pub pointer_ndc: Option<Vec2>,
    /// Last known pointer position in logical window pixels
    pub pointer_screen: Option<Vec2>,
}

impl SimulationState {
    pub fn theme_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Label of the pause toggle.
    pub fn pause_label(&self) -> &'static str {
        if self.paused { "Resume" } else { "Pause" }
    }
}

/// Frame counters maintained by the frame driver.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationClock {
    /// Number of unpaused ticks so far
    pub ticks: u64,
    /// Wall-clock seconds since startup, used only for cosmetic animation
    pub elapsed: f32,
}
