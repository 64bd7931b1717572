//! Airport surface diagrams from OpenStreetMap features.
//!
//! Runways, taxiways, aprons, terminals and towers are projected around a
//! moving reference point (heading up, at a zoom radius in nautical miles) and
//! drawn as vector commands against a [`Surface`](render::Surface).
//!
//! ```
//! use tarmac::{GeoPoint, ViewConfig, render::RecordingSurface};
//!
//! let elements = tarmac::elements::from_json(r#"[
//!     {"type": "way", "id": 1, "tags": {"aeroway": "runway", "width": "45"},
//!      "nodes": [{"location": {"lat": 51.4775, "lon": -0.4850}},
//!                {"location": {"lat": 51.4775, "lon": -0.4330}}]}
//! ]"#)?;
//! let view = ViewConfig::new(GeoPoint::new(51.4700, -0.4543)).with_radius(2.0);
//!
//! let mut surface = RecordingSurface::new();
//! let report = tarmac::render(elements, view, &mut surface)?;
//! assert!(report.is_clean());
//! # Ok::<(), miette::Report>(())
//! ```

pub mod cache;
pub mod classify;
pub mod config;
pub mod diagram;
pub mod elements;
pub mod errors;
pub mod log;
pub mod overpass;
pub mod projection;
pub mod render;
pub mod types;

pub use config::ViewConfig;
pub use diagram::Diagram;
pub use elements::{Element, GeoPoint};
pub use errors::{ConfigError, ElementError, ProjectionError, RenderWarning};
pub use render::{RenderReport, Surface};

/// Render `elements` once from `view`.
///
/// For repeated frames keep a [`Diagram`] instead, so the path cache survives
/// between them.
pub fn render(
    elements: Vec<Element>,
    view: ViewConfig,
    surface: &mut dyn Surface,
) -> Result<RenderReport, ProjectionError> {
    let mut diagram = Diagram::new(view)?.with_elements(elements);
    Ok(diagram.render(surface))
}
