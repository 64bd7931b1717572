//! The diagram pipeline: elements, classification, projection and cache,
//! driven by view changes and rendered in one call.

use glam::DVec2;

use crate::cache::PathCache;
use crate::classify::{Features, classify};
use crate::config::ViewConfig;
use crate::elements::{self, Element};
use crate::errors::{ElementError, ProjectionError};
use crate::log::debug;
use crate::overpass;
use crate::projection::ProjectionState;
use crate::render::{LayerContext, RenderReport, Surface, defaults, draw_frame};

/// Owns everything needed to draw one airport from one viewpoint
#[derive(Debug)]
pub struct Diagram {
    elements: Vec<Element>,
    /// Bumped on every element change; part of the cache stamp
    generation: u64,
    features: Features,
    view: ViewConfig,
    projection: ProjectionState,
    cache: PathCache,
}

impl Diagram {
    pub fn new(view: ViewConfig) -> Result<Self, ProjectionError> {
        view.validate()?;
        let projection = ProjectionState::new(
            view.center,
            view.radius_nm,
            view.viewport_width_px,
            view.heading_deg,
        )?;
        Ok(Diagram {
            elements: Vec::new(),
            generation: 0,
            features: Features::default(),
            view,
            projection,
            cache: PathCache::new(),
        })
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.set_elements(elements);
        self
    }

    /// Replace the element set. The cache is rebuilt on the next render.
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        self.generation += 1;
        self.features = classify(&self.elements, &self.view.classify_options());
        debug!(
            elements = self.elements.len(),
            generation = self.generation,
            "elements replaced"
        );
    }

    /// Load pre-resolved elements from JSON.
    pub fn load_elements_json(&mut self, json: &str) -> Result<(), ElementError> {
        let elements = elements::from_json(json)?;
        self.set_elements(elements);
        Ok(())
    }

    /// Load a raw Overpass response. Returns the node references that could
    /// not be resolved; the affected ways are loaded without those nodes.
    pub fn load_overpass_json(&mut self, json: &str) -> Result<Vec<ElementError>, ElementError> {
        let resolved = overpass::parse_response(json)?;
        self.set_elements(resolved.elements);
        Ok(resolved.unresolved)
    }

    /// Apply a new view. Invalid views are rejected and nothing changes.
    ///
    /// The projection is recomputed (bumping its version) only when center,
    /// radius, heading or viewport width differ; a pan alone leaves it and the
    /// cache untouched.
    pub fn set_view(&mut self, view: ViewConfig) -> Result<(), ProjectionError> {
        view.validate()?;

        let moved = view.center != self.view.center
            || view.radius_nm != self.view.radius_nm
            || view.heading_deg != self.view.heading_deg
            || view.viewport_width_px != self.view.viewport_width_px;
        if moved {
            self.projection.compute(
                view.center,
                view.radius_nm,
                view.viewport_width_px,
                view.heading_deg,
            )?;
        }

        let reclassify = view.classify_options() != self.view.classify_options();
        self.view = view;
        if reclassify {
            self.features = classify(&self.elements, &self.view.classify_options());
        }
        Ok(())
    }

    /// Move the diagram on screen by `delta` pixels.
    pub fn pan_by(&mut self, delta: DVec2) {
        self.view.pan += delta;
    }

    /// Halve the zoom radius, down to 0.1 nm. Returns the new radius.
    pub fn zoom_in(&mut self) -> Result<f64, ProjectionError> {
        let radius = (self.view.radius_nm / 2.0).max(defaults::MIN_RADIUS_NM);
        self.set_view(self.view.clone().with_radius(radius))?;
        Ok(radius)
    }

    /// Double the zoom radius. Returns the new radius.
    pub fn zoom_out(&mut self) -> Result<f64, ProjectionError> {
        let radius = self.view.radius_nm * 2.0;
        self.set_view(self.view.clone().with_radius(radius))?;
        Ok(radius)
    }

    /// Rebuild the cache if stale, then draw one frame onto `surface`.
    pub fn render(&mut self, surface: &mut dyn Surface) -> RenderReport {
        let cache_rebuilt = self
            .cache
            .ensure_fresh(&self.elements, &self.projection, self.generation);

        let mut ctx = LayerContext::new(
            &self.elements,
            &self.features,
            &self.cache,
            &self.projection,
            &self.view,
        );
        draw_frame(&mut ctx, surface);

        let mut warnings = self.cache.warnings().to_vec();
        warnings.extend(ctx.warnings);
        debug!(
            warnings = warnings.len(),
            cache_rebuilt,
            version = self.projection.version(),
            "frame rendered"
        );

        RenderReport {
            warnings,
            cache_rebuilt,
            projection_version: self.projection.version(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    pub fn projection(&self) -> &ProjectionState {
        &self.projection
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }
}
