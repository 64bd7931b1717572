//! Text labels on a black background box.

use glam::{DVec2, dvec2};

use super::defaults;
use super::style::Color;
use super::surface::Surface;
use crate::types::Rect;

/// Label text as drawn: the first "Taxiway" removed, trimmed, upper-cased.
pub fn format_label(text: &str) -> String {
    text.replacen("Taxiway", "", 1).trim().to_uppercase()
}

/// Background box for a label anchored at `anchor`
pub fn label_box(text: &str, anchor: DVec2) -> Rect {
    let width = text.chars().count() as f64 * defaults::LABEL_CHAR_WIDTH;
    let height = defaults::LABEL_HEIGHT;
    Rect::new(
        anchor.x - width / 2.0,
        anchor.y - height / 2.0 - defaults::LABEL_RAISE,
        width,
        height,
    )
}

/// Draw a formatted label centered horizontally on `anchor`.
pub fn draw_label(surface: &mut dyn Surface, text: &str, anchor: DVec2, color: Color) {
    let text = format_label(text);
    surface.fill_rect(label_box(&text, anchor), defaults::LABEL_BACKGROUND);
    surface.fill_text(&text, anchor, defaults::LABEL_FONT, color);
}

/// Anchor for a label placed under an icon centered at `center`
pub fn below_icon(center: DVec2) -> DVec2 {
    center + dvec2(0.0, defaults::ICON_SIZE + defaults::ICON_SIZE / 8.0)
}
