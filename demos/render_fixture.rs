//! Render one airport fixture and summarize the recorded frame.
//!
//!     RUST_LOG=tarmac=debug cargo run --features tracing --example render_fixture -- tests/fixtures/crosswind.json

use std::collections::BTreeMap;

use miette::{IntoDiagnostic, Result};
use tarmac::render::RecordingSurface;
use tarmac::{Diagram, ViewConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/single_runway.json".to_string());
    let source = std::fs::read_to_string(&path).into_diagnostic()?;
    let fixture: serde_json::Value = serde_json::from_str(&source).into_diagnostic()?;

    let view = ViewConfig::from_json(&fixture["view"].to_string())?;
    let mut diagram = Diagram::new(view)?;
    if let Some(response) = fixture.get("overpass") {
        for unresolved in diagram.load_overpass_json(&response.to_string())? {
            eprintln!("{:?}", miette::Report::new(unresolved));
        }
    } else {
        diagram.load_elements_json(&fixture["elements"].to_string())?;
    }

    for (category, count) in diagram.features().counts() {
        println!("{:>18}: {count}", category.name());
    }

    let mut surface = RecordingSurface::new();
    let report = diagram.render(&mut surface);

    let mut commands: BTreeMap<&str, usize> = BTreeMap::new();
    for command in surface.commands() {
        *commands.entry(command.name()).or_default() += 1;
    }
    println!(
        "{} commands at projection version {}",
        surface.ops().len(),
        report.projection_version
    );
    for (name, count) in commands {
        println!("{name:>18}: {count}");
    }

    for warning in report.warnings {
        eprintln!("{:?}", miette::Report::new(warning));
    }
    Ok(())
}
