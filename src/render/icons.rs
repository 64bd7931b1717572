//! Icon layers: control towers and the own-position aircraft.

use glam::dvec2;

use super::context::LayerContext;
use super::defaults;
use super::labels::{below_icon, draw_label};
use super::layers::Layer;
use super::style::Icon;
use super::surface::Surface;
use crate::classify::Category;
use crate::elements::Element;
use crate::types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Towers;

impl Layer for Towers {
    fn name(&self) -> &'static str {
        "towers"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let size = dvec2(defaults::ICON_SIZE, defaults::ICON_SIZE);
        for element in ctx.elements_in(Category::Tower) {
            // Way towers sit at the middle of their lat/long extent
            let location = match element {
                Element::Node(node) => Some(node.location),
                Element::Way(way) => way.geo_center(),
                Element::Relation(_) => None,
            };
            let Some(location) = location else { continue };

            let at = ctx.projection.coordinates_to_xy(location);
            surface.draw_image(Icon::Tower, Rect::centered(at, size));
            draw_label(surface, defaults::TOWER_LABEL_TEXT, below_icon(at), defaults::TOWER_LABEL);
        }
    }
}

/// The reference aircraft, always at the projection center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnPosition;

impl Layer for OwnPosition {
    fn name(&self) -> &'static str {
        "own_position"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let at = ctx.projection.coordinates_to_xy(ctx.projection.center());
        let size = dvec2(defaults::ICON_SIZE, defaults::ICON_SIZE);
        surface.draw_image(Icon::Aircraft, Rect::centered(at, size));
    }
}
