//! End-to-end checks through the public API: elements in, draw commands out.

use glam::dvec2;
use tarmac::elements::{Node, Tags, Way};
use tarmac::render::{Color, DrawCommand, RecordingSurface, defaults};
use tarmac::{ConfigError, Diagram, Element, GeoPoint, ProjectionError, ViewConfig};

const CENTER: GeoPoint = GeoPoint::new(51.47, -0.45);

fn offset(north: f64, east: f64) -> GeoPoint {
    const METRES_PER_DEGREE: f64 = 111_320.0;
    GeoPoint::new(
        CENTER.lat + north / METRES_PER_DEGREE,
        CENTER.long + east / (METRES_PER_DEGREE * CENTER.lat.to_radians().cos()),
    )
}

fn way(id: i64, pairs: &[(&str, &str)], points: &[(f64, f64)]) -> Element {
    let tags: Tags = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Element::Way(Way {
        id,
        tags,
        nodes: points
            .iter()
            .enumerate()
            .map(|(i, &(north, east))| Node {
                id: id * 10 + i as i64,
                location: offset(north, east),
                tags: Tags::new(),
            })
            .collect(),
    })
}

fn square(id: i64, pairs: &[(&str, &str)], north: f64, east: f64, size: f64) -> Element {
    way(
        id,
        pairs,
        &[
            (north, east),
            (north, east + size),
            (north + size, east + size),
            (north + size, east),
            (north, east),
        ],
    )
}

fn airport() -> Vec<Element> {
    vec![
        way(1, &[("aeroway", "runway"), ("width", "45")], &[(0.0, -500.0), (0.0, 500.0)]),
        way(2, &[("aeroway", "taxiway"), ("ref", "Taxiway C")], &[(100.0, -400.0), (100.0, 400.0)]),
        square(3, &[("aeroway", "apron")], 150.0, -200.0, 200.0),
        square(4, &[("aeroway", "terminal"), ("name", "West")], 400.0, -200.0, 100.0),
        way(5, &[("highway", "service")], &[(140.0, -400.0), (140.0, 400.0)]),
        Element::Node(Node {
            id: 6,
            location: offset(550.0, 0.0),
            tags: [("aeroway".to_string(), "control_tower".to_string())].into(),
        }),
    ]
}

fn first_index(surface: &RecordingSurface, pred: impl Fn(&DrawCommand) -> bool) -> usize {
    surface
        .commands()
        .position(pred)
        .unwrap_or_else(|| panic!("command not found in {} ops", surface.ops().len()))
}

#[test]
fn runway_pavement_and_thresholds() {
    let elements = vec![way(
        1,
        &[("aeroway", "runway"), ("width", "45")],
        &[(0.0, -500.0), (0.0, 500.0)],
    )];
    let mut diagram = Diagram::new(ViewConfig::new(CENTER)).unwrap().with_elements(elements);
    let mut surface = RecordingSurface::new();
    let report = diagram.render(&mut surface);
    assert!(report.is_clean(), "{:#?}", report.warnings);

    let pavement = surface
        .commands()
        .find_map(|c| match c {
            DrawCommand::StrokePath { stroke, .. } if stroke.color == defaults::RUNWAY_PAVEMENT => {
                Some(stroke.width)
            }
            _ => None,
        })
        .unwrap();
    let expected = 45.0 * 3.28084 * 0.000164579 * diagram.projection().nm_to_px();
    assert!((pavement - expected).abs() < 1e-9 * expected);

    // Four stripes and a bar at each end
    let fills = surface
        .commands()
        .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == defaults::THRESHOLD_STRIPE))
        .count();
    assert_eq!(fills, 10);
}

#[test]
fn layers_draw_in_z_order() {
    let mut diagram = Diagram::new(ViewConfig::new(CENTER)).unwrap().with_elements(airport());
    let mut surface = RecordingSurface::new();
    let report = diagram.render(&mut surface);
    assert!(report.is_clean(), "{:#?}", report.warnings);

    let stroke_of = |color: Color| {
        move |c: &DrawCommand| matches!(c, DrawCommand::StrokePath { stroke, .. } if stroke.color == color)
    };
    let fill_of = |color: Color| {
        move |c: &DrawCommand| matches!(c, DrawCommand::FillPath { color: fill, .. } if *fill == color)
    };

    let order = [
        first_index(&surface, stroke_of(defaults::SERVICE_ROAD_COLOR)),
        first_index(&surface, fill_of(defaults::APRON_FILL)),
        first_index(&surface, stroke_of(defaults::TAXIWAY_PAVEMENT)),
        first_index(&surface, stroke_of(defaults::RUNWAY_PAVEMENT)),
        first_index(&surface, |c| matches!(c, DrawCommand::DrawImage { .. })),
        first_index(&surface, stroke_of(defaults::TAXIWAY_COLOR)),
        first_index(&surface, fill_of(defaults::TERMINAL_FILL)),
    ];
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");

    // The aircraft is the last thing drawn before the frame restore
    let ops = surface.ops();
    assert!(matches!(ops[ops.len() - 2].command, DrawCommand::DrawImage { .. }));
    assert!(matches!(ops[ops.len() - 1].command, DrawCommand::Restore));
    assert_eq!(surface.depth(), 0);
}

#[test]
fn frame_is_finite_from_any_heading() {
    let mut diagram = Diagram::new(ViewConfig::new(CENTER)).unwrap().with_elements(airport());
    for heading in [0.0, 33.3, 90.0, 180.0, 271.0] {
        diagram
            .set_view(ViewConfig::new(CENTER).with_heading(heading))
            .unwrap();
        let mut surface = RecordingSurface::new();
        diagram.render(&mut surface);
        for op in surface.ops() {
            assert!(op.command.numbers().iter().all(|n| n.is_finite()), "{:?}", op.command);
            assert!(op.transform.to_cols_array().iter().all(|n| n.is_finite()));
        }
        assert_eq!(surface.depth(), 0);
    }
}

#[test]
fn pan_reuses_cache_and_zoom_rebuilds() {
    let mut diagram = Diagram::new(ViewConfig::new(CENTER)).unwrap().with_elements(airport());
    let mut surface = RecordingSurface::new();
    let first = diagram.render(&mut surface);
    assert!(first.cache_rebuilt);

    diagram.pan_by(dvec2(30.0, -10.0));
    let panned = diagram.render(&mut surface);
    assert!(!panned.cache_rebuilt);
    assert_eq!(panned.projection_version, first.projection_version);

    diagram.zoom_out().unwrap();
    let zoomed = diagram.render(&mut surface);
    assert!(zoomed.cache_rebuilt);
    assert_eq!(zoomed.projection_version, first.projection_version + 1);
    assert_eq!(diagram.cache().rebuild_count(), 2);
}

#[test]
fn overpass_response_reports_unresolved_nodes() {
    let json = r#"{
        "version": 0.6,
        "elements": [
            {"type": "node", "id": 1, "lat": 51.47, "lon": -0.46},
            {"type": "node", "id": 2, "lat": 51.47, "lon": -0.44},
            {"type": "way", "id": 10, "tags": {"aeroway": "runway"}, "nodes": [1, 3, 2]}
        ]
    }"#;
    let mut diagram = Diagram::new(ViewConfig::new(CENTER)).unwrap();
    let unresolved = diagram.load_overpass_json(json).unwrap();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(
        unresolved[0].to_string(),
        "way 10 references node 3 which is not in the response"
    );

    let report = diagram.render(&mut RecordingSurface::new());
    assert!(report.is_clean());
    assert_eq!(diagram.features().runways, vec![2]);
}

#[test]
fn single_node_way_is_reported_and_skipped() {
    let elements = vec![way(7, &[("aeroway", "runway")], &[(0.0, 0.0)])];
    let mut surface = RecordingSurface::new();
    let report = tarmac::render(elements, ViewConfig::new(CENTER), &mut surface).unwrap();
    assert_eq!(
        report.warnings,
        vec![tarmac::RenderWarning::DegenerateWay { way: 7, nodes: 1 }]
    );
    assert!(
        !surface
            .commands()
            .any(|c| matches!(c, DrawCommand::StrokePath { stroke, .. } if stroke.color == defaults::RUNWAY_PAVEMENT))
    );
}

#[test]
fn view_config_from_json() {
    let view = ViewConfig::from_json(
        r#"{"center": {"lat": 51.47, "lon": -0.45}, "radius_nm": 2.5, "pan": [3.0, 4.0]}"#,
    )
    .unwrap();
    assert_eq!(view.center, CENTER);
    assert_eq!(view.radius_nm, 2.5);
    assert_eq!(view.pan, dvec2(3.0, 4.0));
    assert_eq!(view.heading_deg, 0.0);

    match ViewConfig::from_json(r#"{"radius_nm": 0}"#) {
        Err(ConfigError::Invalid(ProjectionError::InvalidProjectionInput { field, .. })) => {
            assert_eq!(field, "radius_nm")
        }
        other => panic!("expected an invalid radius, got {other:?}"),
    }
    assert!(matches!(ViewConfig::from_json("{"), Err(ConfigError::Json(_))));
}
