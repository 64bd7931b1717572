//! Default sizes, colors and settings
//!
//! Physical sizes are in their real-world unit and scaled by the projection at
//! draw time. Plain `f64` sizes are screen pixels.

use super::style::{Color, Font};
use crate::types::{Feet, Metres};

// View
pub const RADIUS_NM: f64 = 1.0;
pub const VIEWPORT_WIDTH_PX: f64 = 1000.0;
pub const VIEWPORT_HEIGHT_PX: f64 = 1000.0;
pub const PARKING_DETAIL_RADIUS_NM: f64 = 1.0;
pub const MIN_RADIUS_NM: f64 = 0.1;

// Colors
pub const BACKGROUND: Color = Color::BLACK;
pub const TAXIWAY_COLOR: Color = Color::rgb(0xe6, 0xd5, 0x45);
pub const SERVICE_ROAD_COLOR: Color = Color::rgb(0xbf, 0xb2, 0x39);
pub const GATE_SHAPE_COLOR: Color = Color::rgb(0x66, 0x66, 0x66);
pub const RUNWAY_PAVEMENT: Color = Color::rgb(0x33, 0x33, 0x33);
pub const TAXIWAY_PAVEMENT: Color = Color::rgb(0x44, 0x44, 0x44);
pub const APRON_FILL: Color = Color::rgb(0x55, 0x55, 0x55);
pub const BUILDING_FILL: Color = Color::rgb(0x1f, 0x6c, 0xba);
pub const GATE_BUILDING_FILL: Color = Color::CYAN;
pub const TERMINAL_FILL: Color = Color::CYAN;
pub const AIRSIDE_FOOTWAY_COLOR: Color = Color::CYAN;
pub const RUNWAY_MARKING: Color = Color::WHITE;
pub const THRESHOLD_STRIPE: Color = Color::LIGHT_GREY;
pub const HOLDING_POSITION: Color = Color::RED;
pub const TOWER_LABEL: Color = Color::GREEN;
pub const PARKING_LABEL: Color = Color::CYAN;
pub const TERMINAL_LABEL: Color = Color::CYAN;
pub const LABEL_BACKGROUND: Color = Color::BLACK;

// Pavement widths
pub const RUNWAY_WIDTH: Metres = Metres(46.0);
pub const TAXIWAY_WIDTH: Metres = Metres(30.0);
pub const SERVICE_ROAD_WIDTH: Metres = Metres(10.0);
pub const PARKING_POSITION_WIDTH: Feet = Feet(200.0);
/// Nominal runway width for marking lookup when the way has no `width`
pub const RUNWAY_NOMINAL_WIDTH: Feet = Feet(150.0);

// Line widths (px)
pub const RUNWAY_EDGE_WIDTH: f64 = 1.25;
pub const TAXIWAY_CENTERLINE_WIDTH: f64 = 0.75;
pub const AIRSIDE_FOOTWAY_WIDTH: f64 = 5.0;

// Runway centerline
pub const CENTERLINE_DASH: Feet = Feet(120.0);
pub const CENTERLINE_GAP: Feet = Feet(80.0);
pub const CENTERLINE_WIDTH: Metres = Metres(1.0);

// Threshold markings
pub const THRESHOLD_STRIPE_WIDTH: Metres = Metres(1.0);
pub const THRESHOLD_STRIPE_LENGTH: Metres = Metres(46.0);
pub const THRESHOLD_STRIPE_GAP: Metres = Metres(1.5);
pub const THRESHOLD_BOTTOM_OFFSET: Metres = Metres(3.0);
pub const THRESHOLD_SIDE_OFFSET: Metres = Metres(0.8);
/// Nominal runway width (ft) to number of threshold stripes, ascending
pub const THRESHOLD_STRIPES: [(f64, usize); 5] =
    [(60.0, 4), (75.0, 6), (100.0, 8), (150.0, 12), (200.0, 16)];

// Icons and labels
pub const ICON_SIZE: f64 = 32.0;
pub const LABEL_FONT: Font = Font {
    size_px: 21.0,
    family: "Ecam",
};
pub const LABEL_CHAR_WIDTH: f64 = 13.0;
pub const LABEL_HEIGHT: f64 = 20.0;
/// Label background sits this far above the text baseline
pub const LABEL_RAISE: f64 = 8.0;
pub const TOWER_LABEL_TEXT: &str = "TWR";

/// `runway=*` values that get no centerline or threshold markings
pub const UNMARKED_RUNWAY_KINDS: [&str; 3] = ["displaced_threshold", "blast_pad", "stopway"];
/// Terminal `building=*` values that get no name label
pub const UNLABELLED_TERMINAL_BUILDINGS: [&str; 2] = ["warehouse", "commercial"];
