//! Layered rendering of airport surface diagrams
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, colors and settings
//! - `style`: Colors, strokes, fonts and icons
//! - `surface`: The `Surface` trait and `RecordingSurface`
//! - `context`: LayerContext handed to every layer during a pass
//! - `geometry`: Slope, perpendicular points and circle/line intersection
//! - `width`: Pavement widths and the threshold stripe catalog
//! - `labels`: Text labels on a background box
//! - `layers`: The `Layer` trait and the fixed z-order
//! - `pavement`, `runways`, `threshold`, `taxiways`, `terminals`, `icons`: the layers

pub mod context;
pub mod defaults;
pub mod geometry;
pub mod icons;
pub mod labels;
pub mod layers;
pub mod pavement;
pub mod runways;
pub mod style;
pub mod surface;
pub mod taxiways;
pub mod terminals;
pub mod threshold;
pub mod width;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use context::LayerContext;
pub use layers::{Layer, LayerKind, Z_ORDER};
pub use style::{Color, FillRule, Font, Icon, Stroke};
pub use surface::{DrawCommand, DrawOp, RecordingSurface, Surface, VectorPath};

use crate::errors::RenderWarning;
use crate::log::trace;
use crate::types::Rect;

/// Outcome of one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Cache warnings followed by the warnings raised while drawing
    pub warnings: Vec<RenderWarning>,
    /// Whether the path cache was rebuilt for this pass
    pub cache_rebuilt: bool,
    /// Projection version the pass was drawn against
    pub projection_version: u64,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Draw one full frame: background, then every layer in z-order.
///
/// The background is painted under an identity transform. Layers draw in
/// projection space, moved to the viewport center plus the pan offset. The
/// surface's transform stack is left as it was found.
pub fn draw_frame(ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
    let viewport = Rect::new(0.0, 0.0, ctx.view.viewport_width_px, ctx.view.viewport_height_px);

    surface.save();
    surface.reset_transform();
    surface.clear(viewport);
    surface.fill_rect(viewport, defaults::BACKGROUND);
    surface.restore();

    surface.save();
    surface.translate(ctx.view.viewport_size() / 2.0 + ctx.view.pan);
    for layer in Z_ORDER {
        trace!(layer = layer.name(), "drawing layer");
        layer.draw(ctx, surface);
    }
    surface.restore();
}
