//! Map projection: geographic points to pixel offsets around a moving reference.
//!
//! The reference (usually the own aircraft) sits at the origin. A point is placed
//! at its great-circle distance along the initial bearing from the reference,
//! rotated so that the current heading points up the screen (negative Y).

use glam::{DVec2, dvec2};

use crate::elements::GeoPoint;
use crate::errors::ProjectionError;
use crate::types::{METRES_PER_NM, NauticalMiles, check_positive};

/// Earth radius in nautical miles, used for distance calculations.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two points in nautical miles (haversine).
pub fn distance_nm(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.long - from.long).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_NM * c
}

/// Initial great-circle bearing from `from` to `to`, in degrees `[0, 360)`.
pub fn bearing_deg(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lon = (to.long - from.long).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    x.atan2(y).to_degrees().rem_euclid(360.0)
}

/// Current projection parameters and the scales derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    center: GeoPoint,
    radius_nm: f64,
    viewport_width_px: f64,
    /// Normalized to `[0, 360)`
    heading_deg: f64,
    nm_to_px: f64,
    m_to_px: f64,
    version: u64,
}

impl ProjectionState {
    /// Create a projection and compute it once (version 1).
    pub fn new(
        center: GeoPoint,
        radius_nm: f64,
        viewport_width_px: f64,
        heading_deg: f64,
    ) -> Result<Self, ProjectionError> {
        let mut state = ProjectionState {
            center,
            radius_nm: 1.0,
            viewport_width_px: 1.0,
            heading_deg: 0.0,
            nm_to_px: 0.0,
            m_to_px: 0.0,
            version: 0,
        };
        state.compute(center, radius_nm, viewport_width_px, heading_deg)?;
        Ok(state)
    }

    /// Recompute scales for new inputs and bump the version.
    ///
    /// Invalid inputs are rejected before anything changes, so a failed call
    /// leaves the previous state (and version) intact.
    pub fn compute(
        &mut self,
        center: GeoPoint,
        radius_nm: f64,
        viewport_width_px: f64,
        heading_deg: f64,
    ) -> Result<u64, ProjectionError> {
        check_positive(radius_nm).map_err(|_| {
            ProjectionError::invalid(
                "radius_nm",
                radius_nm,
                "the zoom radius must be a finite number of nautical miles greater than zero",
            )
        })?;
        check_positive(viewport_width_px).map_err(|_| {
            ProjectionError::invalid(
                "viewport_width_px",
                viewport_width_px,
                "the viewport width must be a finite number of pixels greater than zero",
            )
        })?;
        if !heading_deg.is_finite() {
            return Err(ProjectionError::invalid(
                "heading_deg",
                heading_deg,
                "the heading must be a finite number of degrees",
            ));
        }
        if !(center.lat.is_finite() && (-90.0..=90.0).contains(&center.lat)) {
            return Err(ProjectionError::invalid(
                "center.lat",
                center.lat,
                "latitude must lie within [-90, 90]",
            ));
        }
        if !center.long.is_finite() {
            return Err(ProjectionError::invalid(
                "center.long",
                center.long,
                "longitude must be finite",
            ));
        }

        self.center = center;
        self.radius_nm = radius_nm;
        self.viewport_width_px = viewport_width_px;
        self.heading_deg = heading_deg.rem_euclid(360.0);
        self.nm_to_px = viewport_width_px / (2.0 * radius_nm);
        self.m_to_px = self.nm_to_px / METRES_PER_NM;
        self.version += 1;

        Ok(self.version)
    }

    /// Pixel offset of `point` relative to the center, heading up.
    pub fn coordinates_to_xy(&self, point: GeoPoint) -> DVec2 {
        let distance_px = distance_nm(self.center, point) * self.nm_to_px;
        if distance_px == 0.0 {
            return DVec2::ZERO;
        }
        let relative = (bearing_deg(self.center, point) - self.heading_deg).to_radians();
        dvec2(distance_px * relative.sin(), -distance_px * relative.cos())
    }

    /// Pixels for a physical distance in nautical miles
    pub fn nm_px(&self, distance: NauticalMiles) -> f64 {
        distance.raw() * self.nm_to_px
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_nm(&self) -> f64 {
        self.radius_nm
    }

    pub fn viewport_width_px(&self) -> f64 {
        self.viewport_width_px
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    pub fn nm_to_px(&self) -> f64 {
        self.nm_to_px
    }

    pub fn m_to_px(&self) -> f64 {
        self.m_to_px
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
