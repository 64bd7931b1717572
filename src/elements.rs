//! Element data model: nodes, ways and relations with their tags.
//!
//! Ways carry their nodes inline (already resolved); see [`crate::overpass`] for
//! turning a raw Overpass response into this form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ElementError;

/// OSM element id. Unique only within one [`ElementKind`].
pub type ElementId = i64;

/// Tag mapping of an element
pub type Tags = BTreeMap<String, String>;

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub long: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Discriminator of the three element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub id: ElementId,
    pub location: GeoPoint,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    pub id: ElementId,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(rename = "ref")]
    pub reference: ElementId,
    #[serde(default)]
    pub role: String,
}

impl Member {
    /// Outer and inner rings contribute geometry to a multipolygon.
    pub fn is_ring(&self) -> bool {
        self.role == "outer" || self.role == "inner"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub id: ElementId,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Any element, dispatched on its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

/// Read access to an element's tags
pub trait Tagged {
    fn tags(&self) -> &Tags;

    fn tag(&self, key: &str) -> Option<&str> {
        self.tags().get(key).map(String::as_str)
    }

    fn has_tag(&self, key: &str) -> bool {
        self.tags().contains_key(key)
    }

    fn tag_is(&self, key: &str, value: &str) -> bool {
        self.tag(key) == Some(value)
    }
}

impl Tagged for Node {
    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Tagged for Way {
    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Tagged for Relation {
    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Tagged for Element {
    fn tags(&self) -> &Tags {
        match self {
            Element::Node(n) => &n.tags,
            Element::Way(w) => &w.tags,
            Element::Relation(r) => &r.tags,
        }
    }
}

impl Way {
    /// Center of the latitude/longitude extent of the way's nodes
    pub fn geo_center(&self) -> Option<GeoPoint> {
        let first = self.nodes.first()?.location;
        let (mut min, mut max) = (first, first);
        for node in &self.nodes[1..] {
            let GeoPoint { lat, long } = node.location;
            min.lat = min.lat.min(lat);
            min.long = min.long.min(long);
            max.lat = max.lat.max(lat);
            max.long = max.long.max(long);
        }
        Some(GeoPoint::new(
            (min.lat + max.lat) / 2.0,
            (min.long + max.long) / 2.0,
        ))
    }
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Node(n) => n.id,
            Element::Way(w) => w.id,
            Element::Relation(r) => r.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Node(_) => ElementKind::Node,
            Element::Way(_) => ElementKind::Way,
            Element::Relation(_) => ElementKind::Relation,
        }
    }

    pub fn as_way(&self) -> Option<&Way> {
        match self {
            Element::Way(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Element::Relation(r) => Some(r),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ElementDocument {
    List(Vec<Element>),
    Wrapped { elements: Vec<Element> },
}

/// Decode pre-resolved elements from JSON.
///
/// Accepts either a bare array or an object with an `elements` array.
pub fn from_json(json: &str) -> Result<Vec<Element>, ElementError> {
    let doc: ElementDocument = serde_json::from_str(json)?;
    Ok(match doc {
        ElementDocument::List(elements) | ElementDocument::Wrapped { elements } => elements,
    })
}
