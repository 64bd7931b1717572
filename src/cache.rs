//! Path/position cache: projected polylines and bounding boxes per feature.
//!
//! Entries are built against one projection version and one element
//! generation. When either moves on, the whole cache is rebuilt before the next
//! draw; there is no partial invalidation.

use std::collections::HashMap;

use glam::DVec2;

use crate::elements::{Element, ElementId, ElementKind, Relation, Way};
use crate::errors::RenderWarning;
use crate::log::{debug, warn};
use crate::projection::ProjectionState;
use crate::render::surface::VectorPath;
use crate::types::Bounds;

/// Cache key. OSM ids are only unique within one element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey {
    pub kind: ElementKind,
    pub id: ElementId,
}

impl FeatureKey {
    pub const fn way(id: ElementId) -> Self {
        FeatureKey {
            kind: ElementKind::Way,
            id,
        }
    }

    pub const fn relation(id: ElementId) -> Self {
        FeatureKey {
            kind: ElementKind::Relation,
            id,
        }
    }

    /// Key of an element, `None` for nodes (they have no path).
    pub fn of(element: &Element) -> Option<Self> {
        match element {
            Element::Way(w) => Some(FeatureKey::way(w.id)),
            Element::Relation(r) => Some(FeatureKey::relation(r.id)),
            Element::Node(_) => None,
        }
    }
}

/// Projected geometry of one feature
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    pub path: VectorPath,
    pub bounds: Bounds,
    /// Bounding-box center; absent when the feature has no points
    pub center: Option<DVec2>,
}

/// Inputs a cache build depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStamp {
    pub projection_version: u64,
    pub elements_generation: u64,
}

#[derive(Debug, Default)]
pub struct PathCache {
    entries: HashMap<FeatureKey, PathEntry>,
    stamp: Option<CacheStamp>,
    warnings: Vec<RenderWarning>,
    rebuilds: u64,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cache was built for exactly these inputs
    pub fn is_fresh(&self, stamp: CacheStamp) -> bool {
        self.stamp == Some(stamp)
    }

    /// Rebuild if the cache is stale. Returns whether a rebuild happened.
    pub fn ensure_fresh(
        &mut self,
        elements: &[Element],
        projection: &ProjectionState,
        elements_generation: u64,
    ) -> bool {
        let stamp = CacheStamp {
            projection_version: projection.version(),
            elements_generation,
        };
        if self.is_fresh(stamp) {
            return false;
        }
        self.rebuild(elements, projection, elements_generation);
        true
    }

    /// Throw away every entry and rebuild from `elements`.
    ///
    /// Ways are cached first so that relations can reuse their paths.
    pub fn rebuild(
        &mut self,
        elements: &[Element],
        projection: &ProjectionState,
        elements_generation: u64,
    ) {
        self.entries.clear();
        self.warnings.clear();

        for way in elements.iter().filter_map(Element::as_way) {
            let entry = self.build_way(way, projection);
            self.entries.insert(FeatureKey::way(way.id), entry);
        }
        for relation in elements.iter().filter_map(Element::as_relation) {
            let entry = self.build_relation(relation);
            self.entries.insert(FeatureKey::relation(relation.id), entry);
        }

        self.stamp = Some(CacheStamp {
            projection_version: projection.version(),
            elements_generation,
        });
        self.rebuilds += 1;
        debug!(
            entries = self.entries.len(),
            warnings = self.warnings.len(),
            version = projection.version(),
            "path cache rebuilt"
        );
    }

    fn build_way(&mut self, way: &Way, projection: &ProjectionState) -> PathEntry {
        let mut bounds = Bounds::new();
        let points: Vec<DVec2> = way
            .nodes
            .iter()
            .map(|node| {
                let p = projection.coordinates_to_xy(node.location);
                bounds.expand_point(p);
                p
            })
            .collect();

        if points.len() < 2 {
            warn!(way = way.id, nodes = points.len(), "degenerate way");
            self.warnings.push(RenderWarning::DegenerateWay {
                way: way.id,
                nodes: points.len(),
            });
        }

        PathEntry {
            path: VectorPath::polyline(points),
            center: bounds.center(),
            bounds,
        }
    }

    fn build_relation(&mut self, relation: &Relation) -> PathEntry {
        let mut path = VectorPath::new();
        let mut bounds = Bounds::new();

        for member in &relation.members {
            if member.kind != ElementKind::Way || !member.is_ring() {
                continue;
            }
            match self.entries.get(&FeatureKey::way(member.reference)) {
                Some(entry) => {
                    path.append(&entry.path);
                    bounds.union(&entry.bounds);
                }
                None => {
                    warn!(
                        relation = relation.id,
                        member = member.reference,
                        "relation member has no cached geometry"
                    );
                    self.warnings.push(RenderWarning::MissingGeometry {
                        relation: relation.id,
                        member: member.reference,
                    });
                }
            }
        }

        PathEntry {
            path,
            center: bounds.center(),
            bounds,
        }
    }

    pub fn get(&self, key: FeatureKey) -> Option<&PathEntry> {
        self.entries.get(&key)
    }

    /// Entry for a way or relation element
    pub fn entry_for(&self, element: &Element) -> Option<&PathEntry> {
        FeatureKey::of(element).and_then(|key| self.get(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stamp(&self) -> Option<CacheStamp> {
        self.stamp
    }

    /// Warnings raised by the last rebuild
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// Number of rebuilds since creation
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{GeoPoint, Member, Node, Tags};

    const CENTER: GeoPoint = GeoPoint::new(51.47, -0.45);

    fn projection() -> ProjectionState {
        ProjectionState::new(CENTER, 1.0, 1000.0, 30.0).unwrap()
    }

    fn way(id: ElementId, points: &[(f64, f64)]) -> Element {
        Element::Way(Way {
            id,
            tags: Tags::new(),
            nodes: points
                .iter()
                .map(|&(lat, long)| Node {
                    id: 0,
                    location: GeoPoint::new(lat, long),
                    tags: Tags::new(),
                })
                .collect(),
        })
    }

    fn relation(id: ElementId, members: &[(ElementId, &str)]) -> Element {
        Element::Relation(Relation {
            id,
            tags: Tags::new(),
            members: members
                .iter()
                .map(|&(reference, role)| Member {
                    kind: ElementKind::Way,
                    reference,
                    role: role.to_string(),
                })
                .collect(),
        })
    }

    fn sample() -> Vec<Element> {
        vec![
            way(1, &[(51.470, -0.450), (51.471, -0.452), (51.472, -0.449)]),
            way(2, &[(51.468, -0.455), (51.469, -0.456)]),
            relation(1, &[(1, "outer"), (99, "outer"), (2, "inner"), (2, "label")]),
        ]
    }

    #[test]
    fn rebuild_is_deterministic() {
        let elements = sample();
        let projection = projection();
        let mut first = PathCache::new();
        first.rebuild(&elements, &projection, 1);
        let mut second = PathCache::new();
        second.rebuild(&elements, &projection, 1);
        second.rebuild(&elements, &projection, 1);

        assert_eq!(first.entries, second.entries);
        assert_eq!(first.warnings(), second.warnings());
        assert_eq!(second.rebuild_count(), 2);
    }

    #[test]
    fn way_center_is_bounding_box_center() {
        let elements = sample();
        let mut cache = PathCache::new();
        cache.rebuild(&elements, &projection(), 1);

        let entry = cache.get(FeatureKey::way(2)).unwrap();
        let pts: Vec<DVec2> = entry.path.points().collect();
        assert_eq!(pts.len(), 2);
        let expected = (pts[0].min(pts[1]) + pts[0].max(pts[1])) / 2.0;
        assert!((entry.center.unwrap() - expected).length() < 1e-9);
    }

    #[test]
    fn relation_skips_missing_member() {
        let elements = sample();
        let mut cache = PathCache::new();
        cache.rebuild(&elements, &projection(), 1);

        let relation = cache.get(FeatureKey::relation(1)).unwrap();
        // outer way 1 and inner way 2; the missing way and the label role add nothing
        assert_eq!(relation.path.subpaths().len(), 2);
        assert_eq!(relation.path.point_count(), 5);
        assert_eq!(
            cache.warnings(),
            &[RenderWarning::MissingGeometry {
                relation: 1,
                member: 99
            }]
        );

        let mut union = cache.get(FeatureKey::way(1)).unwrap().bounds;
        union.union(&cache.get(FeatureKey::way(2)).unwrap().bounds);
        assert_eq!(relation.bounds, union);
    }

    #[test]
    fn way_and_relation_with_same_id_are_distinct() {
        let elements = sample();
        let mut cache = PathCache::new();
        cache.rebuild(&elements, &projection(), 1);
        assert_ne!(
            cache.get(FeatureKey::way(1)),
            cache.get(FeatureKey::relation(1))
        );
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn degenerate_ways_warn() {
        let elements = vec![way(7, &[]), way(8, &[(51.47, -0.45)])];
        let mut cache = PathCache::new();
        cache.rebuild(&elements, &projection(), 1);

        let empty = cache.get(FeatureKey::way(7)).unwrap();
        assert!(empty.path.is_empty());
        assert_eq!(empty.center, None);

        let point = cache.get(FeatureKey::way(8)).unwrap();
        assert_eq!(point.path.point_count(), 1);
        assert!(point.center.is_some());

        assert_eq!(
            cache.warnings(),
            &[
                RenderWarning::DegenerateWay { way: 7, nodes: 0 },
                RenderWarning::DegenerateWay { way: 8, nodes: 1 },
            ]
        );
    }

    #[test]
    fn stale_after_version_or_generation_change() {
        let elements = sample();
        let mut projection = projection();
        let mut cache = PathCache::new();

        assert!(cache.ensure_fresh(&elements, &projection, 1));
        assert!(!cache.ensure_fresh(&elements, &projection, 1));

        projection.compute(CENTER, 2.0, 1000.0, 30.0).unwrap();
        assert!(cache.ensure_fresh(&elements, &projection, 1));

        assert!(cache.ensure_fresh(&elements, &projection, 2));
        assert_eq!(cache.rebuild_count(), 3);
        assert_eq!(
            cache.stamp(),
            Some(CacheStamp {
                projection_version: 2,
                elements_generation: 2
            })
        );
    }
}
