use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::ui::styles::UiColors;

/// Default overlay font size on desktop
pub const DESKTOP_FONT_SIZE: f32 = 14.0;

/// Overlay font size on touch devices
pub const MOBILE_FONT_SIZE: f32 = 48.0;

/// Appearance of the frame rate overlay
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct FpsOverlay {
    pub font_size: f32,
}

impl Default for FpsOverlay {
    fn default() -> Self {
        Self {
            font_size: DESKTOP_FONT_SIZE,
        }
    }
}

impl FpsOverlay {
    pub fn for_device(is_mobile: bool) -> Self {
        Self {
            font_size: if is_mobile {
                MOBILE_FONT_SIZE
            } else {
                DESKTOP_FONT_SIZE
            },
        }
    }
}

/// Overlay text for a smoothed frame rate, `None` before the first sample
pub fn format_fps(value: Option<f64>) -> String {
    match value {
        Some(fps) => format!("{:.0} fps", fps),
        None => "-- fps".to_string(),
    }
}

/// System to display FPS counter
pub fn fps_ui(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    overlay: Res<FpsOverlay>,
) {
    let ctx = match contexts.ctx_mut() {
        Ok(ctx) => ctx,
        Err(_) => return,
    };

    let value = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    let color = if value.is_some() {
        UiColors::TEXT_PRIMARY
    } else {
        UiColors::TEXT_TERTIARY
    };

    // Top-left floating FPS counter
    egui::Window::new("fps_counter")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_OVERLAY)
                .corner_radius(4.0)
                .inner_margin(6.0),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format_fps(value))
                    .size(overlay.font_size)
                    .color(color)
                    .strong(),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fps_rounds_to_whole_frames() {
        assert_eq!(format_fps(Some(59.6)), "60 fps");
        assert_eq!(format_fps(Some(144.2)), "144 fps");
    }

    #[test]
    fn test_format_fps_without_samples() {
        assert_eq!(format_fps(None), "-- fps");
    }

    #[test]
    fn test_font_size_per_device() {
        assert_eq!(FpsOverlay::default().font_size, 14.0);
        assert_eq!(FpsOverlay::for_device(false).font_size, 14.0);
        assert_eq!(FpsOverlay::for_device(true).font_size, 48.0);
    }
}
