//! Scene builders shared by the layer tests

use crate::cache::PathCache;
use crate::classify::{Features, classify};
use crate::config::ViewConfig;
use crate::elements::{Element, ElementId, GeoPoint, Node, Tags, Way};
use crate::errors::RenderWarning;
use crate::projection::ProjectionState;

use super::context::LayerContext;
use super::layers::Layer;
use super::surface::RecordingSurface;

pub const CENTER: GeoPoint = GeoPoint::new(51.47, -0.45);

const METRES_PER_DEGREE: f64 = 111_320.0;

/// Point `north` and `east` metres away from [`CENTER`]
pub fn offset(north: f64, east: f64) -> GeoPoint {
    GeoPoint::new(
        CENTER.lat + north / METRES_PER_DEGREE,
        CENTER.long + east / (METRES_PER_DEGREE * CENTER.lat.to_radians().cos()),
    )
}

pub fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn node_at(id: ElementId, location: GeoPoint, pairs: &[(&str, &str)]) -> Node {
    Node {
        id,
        location,
        tags: tags(pairs),
    }
}

pub fn way(id: ElementId, pairs: &[(&str, &str)], points: &[GeoPoint]) -> Element {
    Element::Way(Way {
        id,
        tags: tags(pairs),
        nodes: points
            .iter()
            .enumerate()
            .map(|(i, &p)| node_at(id * 100 + i as ElementId, p, &[]))
            .collect(),
    })
}

pub struct Scene {
    pub elements: Vec<Element>,
    pub features: Features,
    pub cache: PathCache,
    pub projection: ProjectionState,
    pub view: ViewConfig,
}

impl Scene {
    pub fn new(elements: Vec<Element>) -> Self {
        Self::with_view(elements, ViewConfig::new(CENTER))
    }

    pub fn with_view(elements: Vec<Element>, view: ViewConfig) -> Self {
        let projection = ProjectionState::new(
            view.center,
            view.radius_nm,
            view.viewport_width_px,
            view.heading_deg,
        )
        .unwrap();
        let features = classify(&elements, &view.classify_options());
        let mut cache = PathCache::new();
        cache.rebuild(&elements, &projection, 1);
        Scene {
            elements,
            features,
            cache,
            projection,
            view,
        }
    }

    /// Run one layer against a fresh recording surface.
    pub fn draw(&self, layer: impl Layer) -> (RecordingSurface, Vec<RenderWarning>) {
        let mut ctx = LayerContext::new(
            &self.elements,
            &self.features,
            &self.cache,
            &self.projection,
            &self.view,
        );
        let mut surface = RecordingSurface::new();
        layer.draw(&mut ctx, &mut surface);
        (surface, ctx.warnings)
    }
}
