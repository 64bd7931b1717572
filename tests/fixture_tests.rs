//! Renders every airport under tests/fixtures and checks the recorded frame.
//!
//! A fixture holds a view and either resolved `elements` or a raw Overpass
//! response under `overpass`, plus the counts the frame is expected to show.

use datatest_stable::Utf8Path;
use serde::Deserialize;
use tarmac::render::{Color, DrawCommand, RecordingSurface};
use tarmac::{Diagram, Element, ViewConfig};

#[derive(Deserialize)]
struct Fixture {
    view: ViewConfig,
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    overpass: Option<serde_json::Value>,
    expect: Expect,
}

#[derive(Deserialize)]
struct Expect {
    runways: usize,
    taxiways: usize,
    terminals: usize,
    towers: usize,
    warnings: usize,
    #[serde(default)]
    unresolved: usize,
    labels: usize,
    threshold_fills: usize,
}

const THRESHOLD_COLOR: Color = Color::LIGHT_GREY;

fn check_frame(surface: &RecordingSurface, context: &str) -> datatest_stable::Result<()> {
    if surface.depth() != 0 {
        return Err(format!("{context}: unbalanced save/restore, depth {}", surface.depth()).into());
    }
    let saves = surface.commands().filter(|c| matches!(c, DrawCommand::Save)).count();
    let restores = surface.commands().filter(|c| matches!(c, DrawCommand::Restore)).count();
    if saves != restores {
        return Err(format!("{context}: {saves} saves but {restores} restores").into());
    }

    for (i, op) in surface.ops().iter().enumerate() {
        if let Some(n) = op.command.numbers().into_iter().find(|n| !n.is_finite()) {
            return Err(format!("{context}: op {i} ({}) carries {n}", op.command.name()).into());
        }
        let m = op.transform.to_cols_array();
        if m.iter().any(|n| !n.is_finite()) {
            return Err(format!("{context}: op {i} has transform {m:?}").into());
        }
    }
    Ok(())
}

fn render_fixture(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let fixture: Fixture = serde_json::from_str(&source)?;
    let expect = fixture.expect;

    let mut diagram = Diagram::new(fixture.view.clone())?;
    let unresolved = match fixture.overpass {
        Some(response) => diagram.load_overpass_json(&response.to_string())?,
        None => {
            diagram.set_elements(fixture.elements);
            Vec::new()
        }
    };
    assert_eq!(unresolved.len(), expect.unresolved, "unresolved node references");

    let features = diagram.features();
    assert_eq!(features.runways.len(), expect.runways, "runways");
    assert_eq!(features.taxiways.len(), expect.taxiways, "taxiways");
    assert_eq!(features.terminals.len(), expect.terminals, "terminals");
    assert_eq!(features.towers.len(), expect.towers, "towers");

    let mut surface = RecordingSurface::new();
    let report = diagram.render(&mut surface);
    check_frame(&surface, "initial view")?;
    assert!(report.cache_rebuilt);
    assert_eq!(report.warnings.len(), expect.warnings, "{:#?}", report.warnings);

    let labels = surface
        .commands()
        .filter(|c| matches!(c, DrawCommand::FillText { .. }))
        .count();
    assert_eq!(labels, expect.labels, "labels");

    let threshold_fills = surface
        .commands()
        .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == THRESHOLD_COLOR))
        .count();
    assert_eq!(threshold_fills, expect.threshold_fills, "threshold fills");

    // The same frame from every quarter, and across north
    for heading in [0.0, 90.0, 180.0, 270.0, 359.5, -45.0] {
        let view = fixture.view.clone().with_heading(heading);
        diagram.set_view(view)?;
        surface.reset();
        let report = diagram.render(&mut surface);
        check_frame(&surface, &format!("heading {heading}"))?;
        assert_eq!(report.warnings.len(), expect.warnings, "heading {heading}");
    }

    diagram.zoom_in()?;
    surface.reset();
    diagram.render(&mut surface);
    check_frame(&surface, "zoomed in")?;

    Ok(())
}

datatest_stable::harness! {
    { test = render_fixture, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.json$" },
}
