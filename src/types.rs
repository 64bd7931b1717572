//! Strongly-typed numeric primitives for tarmac (zero-cost newtypes).
//!
//! Physical distances stay in their unit until the very last step, where the
//! projection scale turns them into pixels. Conversion factors are fixed:
//! 1 m = 3.28084 ft, 1 ft = 0.000164579 nm, 1 nm = 1852 m.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use glam::{DVec2, dvec2};

/// Feet per metre.
pub const FEET_PER_METRE: f64 = 3.28084;

/// Nautical miles per foot.
pub const NM_PER_FOOT: f64 = 0.000164579;

/// Metres per nautical mile.
pub const METRES_PER_NM: f64 = 1852.0;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN, infinite, zero and negative values.
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

macro_rules! distance_unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
        #[repr(transparent)]
        pub struct $name(pub f64);

        impl $name {
            pub const ZERO: $name = $name(0.0);

            /// Get the raw value (use sparingly, prefer typed operations)
            #[inline]
            pub fn raw(self) -> f64 {
                self.0
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name { $name(self.0 + rhs.0) }
        }
        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name { $name(self.0 - rhs.0) }
        }
        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name { $name(self.0 * rhs) }
        }
        impl Div<f64> for $name {
            type Output = $name;
            fn div(self, rhs: f64) -> $name { $name(self.0 / rhs) }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    };
}

distance_unit!(
    /// Length in metres (OSM's unit for `width` tags)
    Metres,
    " m"
);
distance_unit!(
    /// Length in feet (runway marking catalog unit)
    Feet,
    " ft"
);
distance_unit!(
    /// Length in nautical miles (zoom radius unit)
    NauticalMiles,
    " nm"
);

impl Metres {
    #[inline]
    pub fn to_feet(self) -> Feet {
        Feet(self.0 * FEET_PER_METRE)
    }

    #[inline]
    pub fn to_nautical_miles(self) -> NauticalMiles {
        NauticalMiles(self.0 / METRES_PER_NM)
    }
}

impl Feet {
    #[inline]
    pub fn to_metres(self) -> Metres {
        Metres(self.0 / FEET_PER_METRE)
    }

    #[inline]
    pub fn to_nautical_miles(self) -> NauticalMiles {
        NauticalMiles(self.0 * NM_PER_FOOT)
    }
}

impl NauticalMiles {
    #[inline]
    pub fn to_metres(self) -> Metres {
        Metres(self.0 * METRES_PER_NM)
    }
}

/// Axis-aligned bounding box in pixel space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: dvec2(f64::MAX, f64::MAX),
            max: dvec2(f64::MIN, f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another box
    pub fn union(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.expand_point(other.min);
        self.expand_point(other.max);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point, `None` when nothing was ever added.
    pub fn center(&self) -> Option<DVec2> {
        if self.is_empty() {
            None
        } else {
            Some(self.min + (self.max - self.min) / 2.0)
        }
    }
}

/// Rectangle given by its top-left corner and size, in surface units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            origin: dvec2(x, y),
            size: dvec2(w, h),
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: DVec2, size: DVec2) -> Self {
        Rect {
            origin: center - size / 2.0,
            size,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    /// The four corners, clockwise from the origin.
    pub fn corners(&self) -> [DVec2; 4] {
        let o = self.origin;
        [
            o,
            o + dvec2(self.size.x, 0.0),
            o + self.size,
            o + dvec2(0.0, self.size.y),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}
