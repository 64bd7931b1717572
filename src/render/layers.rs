//! The fixed list of drawing layers and their z-order.

use enum_dispatch::enum_dispatch;

use super::context::LayerContext;
use super::icons::{OwnPosition, Towers};
use super::pavement::{
    AirsideFootways, Aprons, Buildings, ParkingPositions, ServiceRoads, TaxiwayPavements,
};
use super::runways::Runways;
use super::surface::Surface;
use super::taxiways::Taxiways;
use super::terminals::Terminals;

/// One pass over a feature category
#[enum_dispatch]
pub trait Layer {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Issue this layer's drawing commands.
    fn draw(&self, ctx: &mut LayerContext<'_>, surface: &mut dyn Surface);
}

#[enum_dispatch(Layer)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    ServiceRoads,
    Aprons,
    ParkingPositions,
    Buildings,
    TaxiwayPavements,
    Runways,
    Towers,
    Taxiways,
    Terminals,
    AirsideFootways,
    OwnPosition,
}

/// Layers bottom to top
pub const Z_ORDER: [LayerKind; 11] = [
    LayerKind::ServiceRoads(ServiceRoads),
    LayerKind::Aprons(Aprons),
    LayerKind::ParkingPositions(ParkingPositions),
    LayerKind::Buildings(Buildings),
    LayerKind::TaxiwayPavements(TaxiwayPavements),
    LayerKind::Runways(Runways),
    LayerKind::Towers(Towers),
    LayerKind::Taxiways(Taxiways),
    LayerKind::Terminals(Terminals),
    LayerKind::AirsideFootways(AirsideFootways),
    LayerKind::OwnPosition(OwnPosition),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_order_names() {
        let names: Vec<&str> = Z_ORDER.iter().map(|layer| layer.name()).collect();
        insta::assert_debug_snapshot!(names, @r#"
        [
            "service_roads",
            "aprons",
            "parking_positions",
            "buildings",
            "taxiway_pavements",
            "runways",
            "towers",
            "taxiways",
            "terminals",
            "airside_footways",
            "own_position",
        ]
        "#);
    }
}
