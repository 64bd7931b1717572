//! Area and road layers: service roads, aprons, parking positions, buildings,
//! taxiway pavement and airside footways.

use super::context::LayerContext;
use super::defaults;
use super::labels::draw_label;
use super::layers::Layer;
use super::style::{FillRule, Stroke};
use super::surface::Surface;
use super::width::{PavementWidth, read_width};
use crate::classify::Category;
use crate::elements::{Element, Tagged};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRoads;

impl Layer for ServiceRoads {
    fn name(&self) -> &'static str {
        "service_roads"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let stroke = Stroke::solid(
            defaults::SERVICE_ROAD_COLOR,
            ctx.m_px(defaults::SERVICE_ROAD_WIDTH),
        );
        for (_, entry) in ctx.paths_in(Category::ServiceRoad) {
            surface.stroke_path(&entry.path, &stroke);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aprons;

impl Layer for Aprons {
    fn name(&self) -> &'static str {
        "aprons"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        for (_, entry) in ctx.paths_in(Category::Apron) {
            surface.fill_path(&entry.path, defaults::APRON_FILL, FillRule::NonZero);
        }
    }
}

/// Parking stands: wide gray strokes, with outlines and refs when zoomed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingPositions;

impl Layer for ParkingPositions {
    fn name(&self) -> &'static str {
        "parking_positions"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let stand = Stroke::solid(
            defaults::GATE_SHAPE_COLOR,
            ctx.projection
                .nm_px(defaults::PARKING_POSITION_WIDTH.to_nautical_miles()),
        );
        for (_, entry) in ctx.paths_in(Category::ParkingPosition) {
            surface.stroke_path(&entry.path, &stand);
        }

        if !ctx.view.shows_parking_detail() {
            return;
        }

        let outline = Stroke::solid(defaults::TAXIWAY_COLOR, defaults::TAXIWAY_CENTERLINE_WIDTH);
        for (element, entry) in ctx.paths_in(Category::ParkingPosition) {
            surface.stroke_path(&entry.path, &outline);
            if let (Some(reference), Some(center)) = (element.tag("ref"), entry.center) {
                draw_label(surface, reference, center, defaults::PARKING_LABEL);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buildings;

impl Layer for Buildings {
    fn name(&self) -> &'static str {
        "buildings"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        for (element, entry) in ctx.paths_in(Category::Building) {
            let color = if element.tag_is("building", "gate") {
                defaults::GATE_BUILDING_FILL
            } else {
                defaults::BUILDING_FILL
            };
            surface.fill_path(&entry.path, color, FillRule::NonZero);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxiwayPavements;

impl Layer for TaxiwayPavements {
    fn name(&self) -> &'static str {
        "taxiway_pavements"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        for (element, entry) in ctx.paths_in(Category::Taxiway) {
            let Element::Way(way) = element else { continue };
            let reading = read_width(way, PavementWidth::taxiway_default());
            if let Some(warning) = reading.warning {
                ctx.warn(warning);
            }
            let stroke = Stroke::solid(defaults::TAXIWAY_PAVEMENT, reading.width.px(ctx.projection));
            surface.stroke_path(&entry.path, &stroke);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirsideFootways;

impl Layer for AirsideFootways {
    fn name(&self) -> &'static str {
        "airside_footways"
    }

    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface) {
        let stroke = Stroke::solid(defaults::AIRSIDE_FOOTWAY_COLOR, defaults::AIRSIDE_FOOTWAY_WIDTH);
        for (_, entry) in ctx.paths_in(Category::AirsideFootway) {
            surface.stroke_path(&entry.path, &stroke);
        }
    }
}
