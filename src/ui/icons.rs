//! Icon glyphs for the control panel, backed by the Phosphor font.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Set once the Phosphor glyphs are registered with egui.
///
/// Panels that print icons are gated on it so the first frame never shows
/// missing-glyph boxes.
#[derive(Resource, Default)]
pub struct IconFontReady(pub bool);

/// Register the regular Phosphor variant alongside egui's default fonts.
pub fn install_icon_font(mut contexts: EguiContexts, mut ready: ResMut<IconFontReady>) {
    if ready.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    ready.0 = true;
    debug!("Icon font registered");
}

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Shown on the theme button while dark, offering daylight.
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Shown on the theme button while light.
pub const MOON: &str = egui_phosphor::regular::MOON;
/// Panel title glyph.
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
