//! Tooltip overlay showing the name of the planet under the pointer.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::picking::Tooltip;

/// Draw the tooltip if picking found a body this frame.
pub fn tooltip_overlay(mut contexts: EguiContexts, tooltip: Res<Tooltip>) {
    if !tooltip.visible {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_tooltip"))
        .fixed_pos(egui::pos2(tooltip.position.x, tooltip.position.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&tooltip.text).size(14.0));
            });
        });
}
