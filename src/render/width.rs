//! Pavement widths from `width` tags, and the threshold stripe catalog.
//!
//! A `width` tag is metres unless it carries a foot suffix (`ft` or `'`).
//! Runway markings are keyed by nominal width in feet: a bare tag value is
//! read as that nominal width directly, while a value with an explicit unit is
//! converted.

use super::defaults;
use crate::elements::{Tagged, Way};
use crate::errors::RenderWarning;
use crate::log::trace;
use crate::projection::ProjectionState;
use crate::types::{Feet, Metres};

/// A pavement width and the nominal width used for marking lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PavementWidth {
    pub pavement: Metres,
    pub nominal: Feet,
}

impl PavementWidth {
    pub fn runway_default() -> Self {
        PavementWidth {
            pavement: defaults::RUNWAY_WIDTH,
            nominal: defaults::RUNWAY_NOMINAL_WIDTH,
        }
    }

    pub fn taxiway_default() -> Self {
        PavementWidth {
            pavement: defaults::TAXIWAY_WIDTH,
            nominal: defaults::TAXIWAY_WIDTH.to_feet(),
        }
    }

    /// Stroke width in pixels: metres to feet to nautical miles to pixels.
    pub fn px(&self, projection: &ProjectionState) -> f64 {
        metres_px(self.pavement, projection)
    }
}

/// Pixels for a physical length in metres, via feet and nautical miles
pub fn metres_px(length: Metres, projection: &ProjectionState) -> f64 {
    projection.nm_px(length.to_feet().to_nautical_miles())
}

/// Parse a `width` value. `None` unless it is a positive finite number with
/// an optional `m`, `ft` or `'` suffix.
pub fn parse_width(value: &str) -> Option<PavementWidth> {
    let value = value.trim();
    let (number, unit) = if let Some(n) = value.strip_suffix("ft") {
        (n, Some(Unit::Feet))
    } else if let Some(n) = value.strip_suffix('\'') {
        (n, Some(Unit::Feet))
    } else if let Some(n) = value.strip_suffix('m') {
        (n, Some(Unit::Metres))
    } else {
        (value, None)
    };

    let number: f64 = number.trim().parse().ok()?;
    if !number.is_finite() || number <= 0.0 {
        return None;
    }

    Some(match unit {
        Some(Unit::Feet) => PavementWidth {
            pavement: Feet(number).to_metres(),
            nominal: Feet(number),
        },
        Some(Unit::Metres) => PavementWidth {
            pavement: Metres(number),
            nominal: Metres(number).to_feet(),
        },
        None => PavementWidth {
            pavement: Metres(number),
            nominal: Feet(number),
        },
    })
}

enum Unit {
    Metres,
    Feet,
}

/// Width of a way, with a warning when the tag is present but unreadable
#[derive(Debug, Clone, PartialEq)]
pub struct WidthReading {
    pub width: PavementWidth,
    pub warning: Option<RenderWarning>,
}

/// Read the `width` tag of `way`, falling back to `default`.
pub fn read_width(way: &Way, default: PavementWidth) -> WidthReading {
    let Some(raw) = way.tag("width") else {
        return WidthReading {
            width: default,
            warning: None,
        };
    };
    match parse_width(raw) {
        Some(width) => {
            trace!(way = way.id, raw, pavement = width.pavement.raw(), "width tag");
            WidthReading {
                width,
                warning: None,
            }
        }
        None => WidthReading {
            width: default,
            warning: Some(RenderWarning::AmbiguousTagValue {
                way: way.id,
                key: "width",
                value: raw.to_string(),
                fallback: default.pavement.to_string(),
            }),
        },
    }
}

/// Catalog width (ft) nearest to `nominal`, clamped to the catalog range.
/// Exactly halfway between two entries picks the upper one.
pub fn nearest_catalog_width(nominal: Feet) -> f64 {
    let catalog = defaults::THRESHOLD_STRIPES;
    let value = nominal.raw();
    match catalog.iter().position(|&(width, _)| width >= value) {
        None => catalog[catalog.len() - 1].0,
        Some(0) => catalog[0].0,
        Some(i) => {
            let (lower, upper) = (catalog[i - 1].0, catalog[i].0);
            if value >= (lower + upper) / 2.0 {
                upper
            } else {
                lower
            }
        }
    }
}

/// Number of threshold stripes for a runway of the given nominal width
pub fn stripe_count(nominal: Feet) -> usize {
    let width = nearest_catalog_width(nominal);
    defaults::THRESHOLD_STRIPES
        .iter()
        .find(|&&(w, _)| w == width)
        .map_or(defaults::THRESHOLD_STRIPES[0].1, |&(_, count)| count)
}
