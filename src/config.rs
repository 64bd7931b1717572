//! View configuration: where the diagram looks from and how it is framed.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::classify::ClassifyOptions;
use crate::elements::GeoPoint;
use crate::errors::{ConfigError, ProjectionError};
use crate::render::defaults;

/// Everything a host supplies to frame one diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Reference position (own aircraft), drawn at the viewport center
    pub center: GeoPoint,
    /// Zoom radius in nautical miles; the viewport width spans twice this
    pub radius_nm: f64,
    /// Heading that points up the screen, in degrees
    pub heading_deg: f64,
    pub viewport_width_px: f64,
    pub viewport_height_px: f64,
    /// Screen-space pan, in pixels
    pub pan: DVec2,
    /// Draw only `airside=yes` service roads
    pub airside_service_roads_only: bool,
    /// Parking outlines and refs are drawn only below this radius
    pub parking_detail_radius_nm: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            center: GeoPoint::default(),
            radius_nm: defaults::RADIUS_NM,
            heading_deg: 0.0,
            viewport_width_px: defaults::VIEWPORT_WIDTH_PX,
            viewport_height_px: defaults::VIEWPORT_HEIGHT_PX,
            pan: DVec2::ZERO,
            airside_service_roads_only: false,
            parking_detail_radius_nm: defaults::PARKING_DETAIL_RADIUS_NM,
        }
    }
}

impl ViewConfig {
    pub fn new(center: GeoPoint) -> Self {
        ViewConfig {
            center,
            ..Self::default()
        }
    }

    /// Decode from JSON and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_center(mut self, center: GeoPoint) -> Self {
        self.center = center;
        self
    }

    pub fn with_radius(mut self, radius_nm: f64) -> Self {
        self.radius_nm = radius_nm;
        self
    }

    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = heading_deg;
        self
    }

    pub fn with_viewport(mut self, width_px: f64, height_px: f64) -> Self {
        self.viewport_width_px = width_px;
        self.viewport_height_px = height_px;
        self
    }

    pub fn with_pan(mut self, pan: DVec2) -> Self {
        self.pan = pan;
        self
    }

    pub fn with_airside_service_roads_only(mut self, only: bool) -> Self {
        self.airside_service_roads_only = only;
        self
    }

    pub fn with_parking_detail_radius(mut self, radius_nm: f64) -> Self {
        self.parking_detail_radius_nm = radius_nm;
        self
    }

    pub fn viewport_size(&self) -> DVec2 {
        DVec2::new(self.viewport_width_px, self.viewport_height_px)
    }

    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            airside_service_roads_only: self.airside_service_roads_only,
        }
    }

    /// Whether parking position detail is visible at the current radius
    pub fn shows_parking_detail(&self) -> bool {
        self.radius_nm < self.parking_detail_radius_nm
    }

    /// Reject views that cannot be drawn, naming the first bad field.
    ///
    /// The center is checked by
    /// [`ProjectionState::compute`](crate::projection::ProjectionState::compute).
    pub fn validate(&self) -> Result<(), ProjectionError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.radius_nm) {
            return Err(ProjectionError::invalid(
                "radius_nm",
                self.radius_nm,
                "the zoom radius must be a finite number of nautical miles greater than zero",
            ));
        }
        if !positive(self.viewport_width_px) {
            return Err(ProjectionError::invalid(
                "viewport_width_px",
                self.viewport_width_px,
                "the viewport width must be a finite number of pixels greater than zero",
            ));
        }
        if !positive(self.viewport_height_px) {
            return Err(ProjectionError::invalid(
                "viewport_height_px",
                self.viewport_height_px,
                "the viewport height must be a finite number of pixels greater than zero",
            ));
        }
        if !self.heading_deg.is_finite() {
            return Err(ProjectionError::invalid(
                "heading_deg",
                self.heading_deg,
                "the heading must be a finite number of degrees",
            ));
        }
        if !self.pan.is_finite() {
            let bad = if self.pan.x.is_finite() { self.pan.y } else { self.pan.x };
            return Err(ProjectionError::invalid("pan", bad, "the pan offset must be finite"));
        }
        if self.parking_detail_radius_nm.is_nan() || self.parking_detail_radius_nm < 0.0 {
            return Err(ProjectionError::invalid(
                "parking_detail_radius_nm",
                self.parking_detail_radius_nm,
                "the parking detail radius must not be negative",
            ));
        }
        Ok(())
    }
}
