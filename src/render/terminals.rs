//! Terminal fills and name labels.

use super::context::LayerContext;
use super::defaults;
use super::labels::draw_label;
use super::layers::Layer;
use super::style::FillRule;
use super::surface::Surface;
use crate::classify::Category;
use crate::elements::Tagged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminals;

impl Layer for Terminals {
    fn name(&self) -> &'static str {
        "terminals"
    }

    /// Terminals may be ways or multipolygon relations; inner rings punch
    /// holes through the even-odd fill.
    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        for (element, entry) in ctx.paths_in(Category::Terminal) {
            surface.fill_path(&entry.path, defaults::TERMINAL_FILL, FillRule::EvenOdd);

            let unlabelled = element
                .tag("building")
                .is_some_and(|b| defaults::UNLABELLED_TERMINAL_BUILDINGS.contains(&b));
            if unlabelled {
                continue;
            }
            if let (Some(name), Some(center)) = (element.tag("name"), entry.center) {
                draw_label(surface, name, center, defaults::TERMINAL_LABEL);
            }
        }
    }
}
