use crate::constants::{LABEL_FONT_SIZE, PEN_WIDTH};
use crate::levels::Rgb;
use crate::render::LevelLine;
use crate::selection::Point;
use eframe::egui;

/// Unit the global hook reports pointer positions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookUnits {
    /// Physical pixels, scaled down by the display's pixels-per-point.
    Pixels,
    /// Logical points, already in egui's coordinate space.
    Points,
}

impl HookUnits {
    /// macOS reports event locations in display points; Windows in pixels.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            Self::Points
        } else {
            Self::Pixels
        }
    }
}

/// Maps raw screen coordinates from the input hook into the overlay's egui
/// points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    origin: egui::Pos2,
    scale: f32,
}

impl ScreenMapping {
    pub fn new(origin: egui::Pos2, pixels_per_point: f32, units: HookUnits) -> Self {
        let scale = match units {
            HookUnits::Pixels if pixels_per_point > 0.0 => pixels_per_point,
            HookUnits::Pixels | HookUnits::Points => 1.0,
        };
        Self { origin, scale }
    }

    pub fn from_context(ctx: &egui::Context) -> Self {
        let origin = ctx
            .input(|i| i.viewport().inner_rect.map(|rect| rect.min))
            .unwrap_or(egui::Pos2::ZERO);
        Self::new(origin, ctx.pixels_per_point(), HookUnits::native())
    }

    pub fn to_local(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            point.x as f32 / self.scale - self.origin.x,
            point.y as f32 / self.scale - self.origin.y,
        )
    }
}

pub fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn paint_lines(painter: &egui::Painter, lines: &[LevelLine], mapping: &ScreenMapping) {
    for line in lines {
        let color = to_color32(line.color);
        painter.line_segment(
            [mapping.to_local(line.from), mapping.to_local(line.to)],
            egui::Stroke::new(PEN_WIDTH, color),
        );
        painter.text(
            mapping.to_local(line.label_pos),
            egui::Align2::LEFT_BOTTOM,
            &line.label,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_hooks_are_scaled_and_offset() {
        let mapping = ScreenMapping::new(egui::pos2(10.0, 20.0), 2.0, HookUnits::Pixels);
        assert_eq!(
            mapping.to_local(Point::new(100.0, 200.0)),
            egui::pos2(40.0, 80.0)
        );
    }

    #[test]
    fn point_hooks_are_only_offset_on_high_dpi_displays() {
        let mapping = ScreenMapping::new(egui::pos2(10.0, 20.0), 2.0, HookUnits::Points);
        assert_eq!(
            mapping.to_local(Point::new(800.0, 600.0)),
            egui::pos2(790.0, 580.0)
        );
    }

    #[test]
    fn invalid_scale_falls_back_to_identity() {
        let mapping = ScreenMapping::new(egui::Pos2::ZERO, 0.0, HookUnits::Pixels);
        assert_eq!(mapping.to_local(Point::new(7.0, 9.0)), egui::pos2(7.0, 9.0));
    }

    #[test]
    fn native_units_follow_the_hook_backend() {
        let expected = if cfg!(target_os = "macos") {
            HookUnits::Points
        } else {
            HookUnits::Pixels
        };
        assert_eq!(HookUnits::native(), expected);
    }

    #[test]
    fn level_color_converts_to_opaque_color32() {
        let color = to_color32(Rgb::new(0x20, 0xb2, 0xaa));
        assert_eq!(color, egui::Color32::from_rgb(0x20, 0xb2, 0xaa));
        assert_eq!(color.a(), 255);
    }
}
