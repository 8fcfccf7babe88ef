//! UI module providing the egui overlay.
//!
//! The overlay holds the speed sliders, the pause and theme toggles and the
//! hover tooltip. It also reports whether egui owns the pointer so that
//! picking and click-to-zoom ignore clicks on the panel.

pub mod controls;
pub mod icons;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::input::UiPointerCapture;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::IconFontReady>()
            .init_resource::<UiPointerCapture>()
            .add_systems(EguiPrimaryContextPass, icons::install_icon_font)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls::controls_panel,
                    tooltip::tooltip_overlay,
                    track_pointer_capture,
                )
                    .chain()
                    .after(icons::install_icon_font)
                    .run_if(|init: Res<icons::IconFontReady>| init.0),
            );
    }
}

/// Record whether egui wants the pointer after the panels were laid out.
fn track_pointer_capture(mut contexts: EguiContexts, mut capture: ResMut<UiPointerCapture>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let owned = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    if capture.0 != owned {
        capture.0 = owned;
    }
}
