//! Colour palette for overlays
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Overlay colour palette
pub struct UiColors;

impl UiColors {
    /// Overlay background, black at 50% opacity
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(128);

    /// Primary text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::WHITE;

    /// Placeholder text while no measurement is available
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);
}
