//! Runways: pavement with squared ends, edge lines, dashed centerline and
//! threshold markings.

use glam::DVec2;

use super::context::LayerContext;
use super::defaults;
use super::geometry::{perpendicular_points, same_slope, slope};
use super::layers::Layer;
use super::style::Stroke;
use super::surface::{Surface, VectorPath};
use super::threshold::{draw_threshold, layout, threshold_angle};
use super::width::{PavementWidth, read_width, stripe_count};
use crate::cache::FeatureKey;
use crate::classify::Category;
use crate::elements::{Tagged, Way};
use crate::errors::RenderWarning;
use crate::log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runways;

/// A runway ready to draw: its ends in pixels and its width
struct RunwayGeometry<'a> {
    way: &'a Way,
    path: &'a VectorPath,
    first: DVec2,
    last: DVec2,
    width: PavementWidth,
    width_px: f64,
}

impl RunwayGeometry<'_> {
    fn is_marked(&self) -> bool {
        !self
            .way
            .tag("runway")
            .is_some_and(|kind| defaults::UNMARKED_RUNWAY_KINDS.contains(&kind))
    }
}

impl Layer for Runways {
    fn name(&self) -> &'static str {
        "runways"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let runways = collect(ctx);

        for runway in &runways {
            draw_pavement(runway, surface);
        }

        let m_to_px = ctx.projection.m_to_px();
        let centerline = Stroke::solid(defaults::RUNWAY_MARKING, ctx.m_px(defaults::CENTERLINE_WIDTH))
            .with_dash(vec![
                defaults::CENTERLINE_DASH.to_metres().raw() * m_to_px,
                defaults::CENTERLINE_GAP.to_metres().raw() * m_to_px,
            ]);
        for runway in runways.iter().filter(|r| r.is_marked()) {
            surface.stroke_path(runway.path, &centerline);
        }

        for runway in runways.iter().filter(|r| r.is_marked()) {
            let marking = layout(runway.width_px, stripe_count(runway.width.nominal), |m| ctx.m_px(m));
            debug!(
                way = runway.way.id,
                stripes = marking.stripes.len(),
                "threshold markings"
            );
            for (at, far) in [(runway.last, runway.first), (runway.first, runway.last)] {
                if let Some(angle) = threshold_angle(at, far) {
                    draw_threshold(surface, at, angle, &marking);
                }
            }
        }
    }
}

/// Resolve every drawable runway, warning about the ones that are not.
fn collect<'a>(ctx: &mut LayerContext<'a>) -> Vec<RunwayGeometry<'a>> {
    let cache = ctx.cache;
    let mut runways = Vec::new();
    for way in ctx.ways_in(Category::Runway) {
        let Some(entry) = cache.get(FeatureKey::way(way.id)) else {
            continue;
        };
        // Fewer than two nodes was already reported by the cache
        if entry.path.point_count() < 2 {
            continue;
        }
        let (Some(first), Some(last)) = (entry.path.first(), entry.path.last()) else {
            continue;
        };
        if first == last {
            ctx.warn(RenderWarning::DegenerateSegment {
                way: way.id,
                marking: "runway",
            });
            continue;
        }

        let reading = read_width(way, PavementWidth::runway_default());
        if let Some(warning) = reading.warning {
            ctx.warn(warning);
        }
        runways.push(RunwayGeometry {
            way,
            path: &entry.path,
            first,
            last,
            width: reading.width,
            width_px: reading.width.px(ctx.projection),
        });
    }
    runways
}

/// Straight pavement from first to last node, then the two edge lines.
fn draw_pavement(runway: &RunwayGeometry<'_>, surface: &mut dyn Surface) {
    let pavement = Stroke::solid(defaults::RUNWAY_PAVEMENT, runway.width_px);
    surface.stroke_path(&VectorPath::line(runway.first, runway.last), &pavement);

    let m = slope(runway.first, runway.last);
    let half = runway.width_px / 2.0;
    let (Some([first_one, first_two]), Some([last_one, last_two])) = (
        perpendicular_points(runway.first, m, half),
        perpendicular_points(runway.last, m, half),
    ) else {
        return;
    };

    // Pair the end-cap points so that both edges run along the runway
    let axis = runway.last - runway.first;
    let edges = if same_slope(last_two - first_one, axis) {
        [(first_one, last_two), (first_two, last_one)]
    } else {
        [(first_one, last_one), (first_two, last_two)]
    };

    let edge = Stroke::solid(defaults::RUNWAY_MARKING, defaults::RUNWAY_EDGE_WIDTH);
    for (from, to) in edges {
        surface.stroke_path(&VectorPath::line(from, to), &edge);
    }
}
