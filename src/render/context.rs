//! Layer context - everything a layer reads during one render pass

use crate::cache::{PathCache, PathEntry};
use crate::classify::{Category, Features};
use crate::config::ViewConfig;
use crate::elements::{Element, Way};
use crate::errors::RenderWarning;
use crate::log::warn;
use crate::projection::ProjectionState;
use crate::types::Metres;

/// Read-only inputs of a render pass, plus the warnings it collects
pub struct LayerContext<'a> {
    pub elements: &'a [Element],
    pub features: &'a Features,
    pub cache: &'a PathCache,
    pub projection: &'a ProjectionState,
    pub view: &'a ViewConfig,
    pub warnings: Vec<RenderWarning>,
}

impl<'a> LayerContext<'a> {
    pub fn new(
        elements: &'a [Element],
        features: &'a Features,
        cache: &'a PathCache,
        projection: &'a ProjectionState,
        view: &'a ViewConfig,
    ) -> Self {
        LayerContext {
            elements,
            features,
            cache,
            projection,
            view,
            warnings: Vec::new(),
        }
    }

    /// Elements of a category, in element order
    pub fn elements_in(&self, category: Category) -> impl Iterator<Item = &'a Element> + use<'a> {
        let elements = self.elements;
        self.features
            .get(category)
            .iter()
            .filter_map(move |&index| elements.get(index))
    }

    /// Ways of a category
    pub fn ways_in(&self, category: Category) -> impl Iterator<Item = &'a Way> + use<'a> {
        self.elements_in(category).filter_map(Element::as_way)
    }

    /// Elements of a category with a non-empty cached path
    pub fn paths_in(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&'a Element, &'a PathEntry)> + use<'a> {
        let cache = self.cache;
        self.elements_in(category).filter_map(move |element| {
            cache
                .entry_for(element)
                .filter(|entry| !entry.path.is_empty())
                .map(|entry| (element, entry))
        })
    }

    /// Pixels for a length in metres, by the metre scale directly.
    ///
    /// Pavement widths go through [`PavementWidth::px`](super::width::PavementWidth::px)
    /// instead.
    pub fn m_px(&self, length: Metres) -> f64 {
        length.raw() * self.projection.m_to_px()
    }

    pub fn warn(&mut self, warning: RenderWarning) {
        warn!(%warning, "render warning");
        self.warnings.push(warning);
    }
}
