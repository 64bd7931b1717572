//! Resolution of raw Overpass API responses into inline-node elements.
//!
//! A raw way lists node ids; the nodes themselves arrive as separate elements in
//! the same response. Resolution looks every id up and copies the node inline.
//! Ids missing from the response are dropped from the way and reported.

use std::collections::HashMap;

use serde::Deserialize;

use crate::elements::{Element, ElementId, GeoPoint, Node, Relation, Tags, Way};
use crate::errors::ElementError;
use crate::log::{debug, warn};

/// One element exactly as the Overpass API returns it
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node {
        id: ElementId,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: Tags,
    },
    Way {
        id: ElementId,
        #[serde(default)]
        tags: Tags,
        #[serde(default)]
        nodes: Vec<ElementId>,
    },
    Relation(Relation),
}

#[derive(Deserialize)]
struct RawResponse {
    elements: Vec<RawElement>,
}

/// Elements after resolution, with the node references that could not be found
#[derive(Debug, Default)]
pub struct Resolved {
    pub elements: Vec<Element>,
    pub unresolved: Vec<ElementError>,
}

/// Parse an Overpass JSON response (`{"elements": [...]}`) and resolve it.
pub fn parse_response(json: &str) -> Result<Resolved, ElementError> {
    let response: RawResponse = serde_json::from_str(json)?;
    Ok(resolve(response.elements))
}

/// Replace node references in ways by inline node data.
///
/// Element order is preserved. Standalone nodes are kept as node elements.
pub fn resolve(raw: Vec<RawElement>) -> Resolved {
    let locations: HashMap<ElementId, (GeoPoint, &Tags)> = raw
        .iter()
        .filter_map(|element| match element {
            RawElement::Node { id, lat, lon, tags } => Some((*id, (GeoPoint::new(*lat, *lon), tags))),
            _ => None,
        })
        .collect();

    let mut resolved = Resolved::default();
    for element in &raw {
        let element = match element {
            RawElement::Node { id, lat, lon, tags } => Element::Node(Node {
                id: *id,
                location: GeoPoint::new(*lat, *lon),
                tags: tags.clone(),
            }),
            RawElement::Way { id, tags, nodes } => {
                let mut inline = Vec::with_capacity(nodes.len());
                for node_id in nodes {
                    match locations.get(node_id) {
                        Some((location, node_tags)) => inline.push(Node {
                            id: *node_id,
                            location: *location,
                            tags: (*node_tags).clone(),
                        }),
                        None => {
                            warn!(way = id, node = node_id, "way references missing node");
                            resolved.unresolved.push(ElementError::UnresolvedNode {
                                way: *id,
                                node: *node_id,
                            });
                        }
                    }
                }
                Element::Way(Way {
                    id: *id,
                    tags: tags.clone(),
                    nodes: inline,
                })
            }
            RawElement::Relation(relation) => Element::Relation(relation.clone()),
        };
        resolved.elements.push(element);
    }

    debug!(
        elements = resolved.elements.len(),
        unresolved = resolved.unresolved.len(),
        "resolved overpass response"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Tagged;

    const RESPONSE: &str = r#"{
        "version": 0.6,
        "elements": [
            {"type": "node", "id": 10, "lat": 1.0, "lon": 2.0, "timestamp": "2023-01-01T00:00:00Z"},
            {"type": "node", "id": 11, "lat": 1.5, "lon": 2.5, "tags": {"aeroway": "holding_position"}},
            {"type": "way", "id": 20, "tags": {"aeroway": "taxiway"}, "nodes": [10, 11, 12]},
            {"type": "relation", "id": 30, "tags": {"aeroway": "terminal"},
             "members": [{"type": "way", "ref": 20, "role": "outer"}]}
        ]
    }"#;

    #[test]
    fn resolves_node_references_inline() {
        let resolved = parse_response(RESPONSE).unwrap();
        assert_eq!(resolved.elements.len(), 4);

        let way = resolved.elements[2].as_way().unwrap();
        assert_eq!(way.nodes.len(), 2);
        assert_eq!(way.nodes[0].location, GeoPoint::new(1.0, 2.0));
        assert_eq!(way.nodes[1].id, 11);
        assert!(way.nodes[1].tag_is("aeroway", "holding_position"));
    }

    #[test]
    fn reports_missing_nodes() {
        let resolved = parse_response(RESPONSE).unwrap();
        assert_eq!(resolved.unresolved.len(), 1);
        assert!(matches!(
            resolved.unresolved[0],
            ElementError::UnresolvedNode { way: 20, node: 12 }
        ));
    }

    #[test]
    fn keeps_relations_unchanged() {
        let resolved = parse_response(RESPONSE).unwrap();
        let relation = resolved.elements[3].as_relation().unwrap();
        assert_eq!(relation.members[0].reference, 20);
    }
}
