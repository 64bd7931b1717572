//! Taxiway centerlines, ref labels and holding-position bars.

use super::context::LayerContext;
use super::defaults;
use super::geometry::{perpendicular_points, slope};
use super::labels::draw_label;
use super::layers::Layer;
use super::style::Stroke;
use super::surface::{Surface, VectorPath};
use super::width::{PavementWidth, read_width};
use crate::cache::FeatureKey;
use crate::classify::Category;
use crate::elements::{Tagged, Way};
use crate::errors::RenderWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxiways;

impl Layer for Taxiways {
    fn name(&self) -> &'static str {
        "taxiways"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let cache = ctx.cache;
        let centerline = Stroke::solid(defaults::TAXIWAY_COLOR, defaults::TAXIWAY_CENTERLINE_WIDTH);

        for way in ctx.ways_in(Category::Taxiway) {
            let Some(entry) = cache.get(FeatureKey::way(way.id)) else {
                continue;
            };
            if entry.path.is_empty() {
                continue;
            }
            surface.stroke_path(&entry.path, &centerline);

            if let (Some(reference), Some(center)) = (way.tag("ref"), entry.center) {
                draw_label(surface, reference, center, defaults::TAXIWAY_COLOR);
            }

            draw_holding_positions(ctx, way, surface);
        }
    }
}

/// A bar across the taxiway at every `aeroway=holding_position` node.
///
/// The bar is the chord of a circle of half the taxiway width around the node,
/// perpendicular to the segment towards the next node (the previous one at the
/// end of the way).
fn draw_holding_positions(ctx: &mut LayerContext<'_>, way: &Way, surface: &mut dyn Surface) {
    let holding: Vec<usize> = way
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.tag_is("aeroway", "holding_position"))
        .map(|(i, _)| i)
        .collect();
    if holding.is_empty() {
        return;
    }

    // Width warnings were raised with the pavement
    let half_width = read_width(way, PavementWidth::taxiway_default()).width.px(ctx.projection) / 2.0;
    let bar = Stroke::solid(defaults::HOLDING_POSITION, defaults::TAXIWAY_CENTERLINE_WIDTH);

    for i in holding {
        let neighbour = way.nodes.get(i + 1).or_else(|| i.checked_sub(1).and_then(|j| way.nodes.get(j)));
        let at = ctx.projection.coordinates_to_xy(way.nodes[i].location);
        let points = neighbour
            .map(|n| ctx.projection.coordinates_to_xy(n.location))
            .and_then(|toward| perpendicular_points(at, slope(at, toward), half_width));

        match points {
            Some([one, two]) => surface.stroke_path(&VectorPath::line(one, two), &bar),
            None => ctx.warn(RenderWarning::DegenerateSegment {
                way: way.id,
                marking: "holding position",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Element, Tags, Way};
    use crate::render::style::Color;
    use crate::render::surface::DrawCommand;
    use crate::render::testing::{Scene, node_at, offset};

    fn taxiway(id: i64, pairs: &[(&str, &str)], nodes: Vec<crate::elements::Node>) -> Element {
        let mut tags: Tags = crate::render::testing::tags(pairs);
        tags.insert("aeroway".to_string(), "taxiway".to_string());
        Element::Way(Way { id, tags, nodes })
    }

    #[test]
    fn centerline_label_and_holding_bar() {
        let scene = Scene::new(vec![taxiway(
            3,
            &[("ref", "Taxiway B")],
            vec![
                node_at(1, offset(0.0, 0.0), &[("aeroway", "holding_position")]),
                node_at(2, offset(0.0, 200.0), &[]),
            ],
        )]);
        let (surface, warnings) = scene.draw(Taxiways);
        assert!(warnings.is_empty());

        let commands: Vec<&DrawCommand> = surface.commands().collect();
        let names: Vec<&str> = commands.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["stroke_path", "fill_rect", "fill_text", "stroke_path"]);

        match commands[2] {
            DrawCommand::FillText { text, .. } => assert_eq!(text, "B"),
            other => panic!("expected label, got {other:?}"),
        }

        match commands[3] {
            DrawCommand::StrokePath { path, stroke } => {
                assert_eq!(stroke.color, Color::RED);
                let (a, b) = (path.first().unwrap(), path.last().unwrap());
                // The node is the reference point, so the bar is centered on the origin
                assert!((a + b).length() < 1e-9);
                let expected = 30.0 * 3.28084 * 0.000164579 * scene.projection.nm_to_px();
                assert!(((a - b).length() - expected).abs() < 1e-9);
                // and perpendicular to the eastbound centerline
                assert!((a - b).x.abs() < 1e-3 * expected);
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn last_node_uses_previous_neighbour() {
        let scene = Scene::new(vec![taxiway(
            3,
            &[],
            vec![
                node_at(1, offset(0.0, -200.0), &[]),
                node_at(2, offset(0.0, 0.0), &[("aeroway", "holding_position")]),
            ],
        )]);
        let (surface, warnings) = scene.draw(Taxiways);
        assert!(warnings.is_empty());
        assert_eq!(surface.commands().count(), 2);
    }

    #[test]
    fn coincident_neighbour_warns() {
        let scene = Scene::new(vec![taxiway(
            4,
            &[],
            vec![
                node_at(1, offset(10.0, 10.0), &[("aeroway", "holding_position")]),
                node_at(2, offset(10.0, 10.0), &[]),
            ],
        )]);
        let (_, warnings) = scene.draw(Taxiways);
        assert_eq!(
            warnings,
            vec![RenderWarning::DegenerateSegment {
                way: 4,
                marking: "holding position"
            }]
        );
    }

    #[test]
    fn lone_holding_node_warns() {
        let scene = Scene::new(vec![taxiway(
            5,
            &[],
            vec![node_at(1, offset(0.0, 0.0), &[("aeroway", "holding_position")])],
        )]);
        let (_, warnings) = scene.draw(Taxiways);
        assert_eq!(warnings.len(), 1);
    }
}
