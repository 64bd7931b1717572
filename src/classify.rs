//! Feature classification: partition elements into drawable categories by tag.

use crate::elements::{Element, Tagged};

/// Drawable feature categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Runway,
    Taxiway,
    Apron,
    Terminal,
    ParkingPosition,
    Building,
    Tower,
    ServiceRoad,
    AirsideFootway,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Runway,
        Category::Taxiway,
        Category::Apron,
        Category::Terminal,
        Category::ParkingPosition,
        Category::Building,
        Category::Tower,
        Category::ServiceRoad,
        Category::AirsideFootway,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Runway => "runway",
            Category::Taxiway => "taxiway",
            Category::Apron => "apron",
            Category::Terminal => "terminal",
            Category::ParkingPosition => "parking_position",
            Category::Building => "building",
            Category::Tower => "tower",
            Category::ServiceRoad => "service_road",
            Category::AirsideFootway => "airside_footway",
        }
    }

    /// Whether `element` belongs to this category.
    pub fn matches(self, element: &Element, options: &ClassifyOptions) -> bool {
        let is_way = matches!(element, Element::Way(_));
        match self {
            Category::Runway => is_way && element.tag_is("aeroway", "runway"),
            Category::Taxiway => is_way && element.tag_is("aeroway", "taxiway"),
            Category::Apron => is_way && element.tag_is("aeroway", "apron"),
            Category::ParkingPosition => is_way && element.tag_is("aeroway", "parking_position"),
            Category::Terminal => {
                !matches!(element, Element::Node(_)) && element.tag_is("aeroway", "terminal")
            }
            Category::Building => {
                is_way
                    && element
                        .tag("building")
                        .is_some_and(|b| !EXCLUDED_BUILDINGS.contains(&b))
                    && !element.tag_is("aeroway", "terminal")
            }
            Category::Tower => {
                !matches!(element, Element::Relation(_))
                    && (element
                        .tag("aeroway")
                        .is_some_and(|a| TOWER_AEROWAYS.contains(&a))
                        || element.tag_is("man_made", "tower"))
            }
            Category::ServiceRoad => {
                is_way
                    && element.tag_is("highway", "service")
                    && (!options.airside_service_roads_only || element.tag_is("airside", "yes"))
            }
            Category::AirsideFootway => {
                is_way
                    && element.tag_is("highway", "footway")
                    && element.tag_is("airside", "yes")
                    && !element.tag_is("tunnel", "yes")
            }
        }
    }
}

const EXCLUDED_BUILDINGS: [&str; 3] = ["storage_tank", "transportation", "yes"];
const TOWER_AEROWAYS: [&str; 3] = ["control_tower", "control_center", "tower"];

/// Options that change category membership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Keep only `airside=yes` service roads
    pub airside_service_roads_only: bool,
}

/// Element indices per category, in element order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    pub runways: Vec<usize>,
    pub taxiways: Vec<usize>,
    pub aprons: Vec<usize>,
    pub terminals: Vec<usize>,
    pub parking_positions: Vec<usize>,
    pub buildings: Vec<usize>,
    pub towers: Vec<usize>,
    pub service_roads: Vec<usize>,
    pub airside_footways: Vec<usize>,
}

impl Features {
    pub fn get(&self, category: Category) -> &[usize] {
        match category {
            Category::Runway => &self.runways,
            Category::Taxiway => &self.taxiways,
            Category::Apron => &self.aprons,
            Category::Terminal => &self.terminals,
            Category::ParkingPosition => &self.parking_positions,
            Category::Building => &self.buildings,
            Category::Tower => &self.towers,
            Category::ServiceRoad => &self.service_roads,
            Category::AirsideFootway => &self.airside_footways,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<usize> {
        match category {
            Category::Runway => &mut self.runways,
            Category::Taxiway => &mut self.taxiways,
            Category::Apron => &mut self.aprons,
            Category::Terminal => &mut self.terminals,
            Category::ParkingPosition => &mut self.parking_positions,
            Category::Building => &mut self.buildings,
            Category::Tower => &mut self.towers,
            Category::ServiceRoad => &mut self.service_roads,
            Category::AirsideFootway => &mut self.airside_footways,
        }
    }

    /// Number of elements per category
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.get(category).len()))
            .collect()
    }
}

/// Partition `elements` by category. An element may land in several categories.
pub fn classify(elements: &[Element], options: &ClassifyOptions) -> Features {
    let mut features = Features::default();
    for (index, element) in elements.iter().enumerate() {
        for category in Category::ALL {
            if category.matches(element, options) {
                features.get_mut(category).push(index);
            }
        }
    }
    features
}
