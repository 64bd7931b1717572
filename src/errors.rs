//! Error types with rich diagnostics using miette
//!
//! Fatal errors (`ProjectionError`, `ElementError`) are returned as `Err`.
//! Everything that can go wrong with a single feature during a render pass is a
//! `RenderWarning`: the pass recovers locally and lists them in its report.

use miette::Diagnostic;
use thiserror::Error;

use crate::elements::ElementId;

// ============================================================================
// Projection Errors
// ============================================================================

/// Errors that reject a view before the projection is recomputed
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("invalid projection input: {field} = {value}")]
    #[diagnostic(
        code(tarmac::projection::invalid_input),
        help("{requirement}")
    )]
    InvalidProjectionInput {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, value: f64, requirement: &'static str) -> Self {
        ProjectionError::InvalidProjectionInput {
            field,
            value,
            requirement,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors loading a view configuration
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("malformed view configuration")]
    #[diagnostic(code(tarmac::config::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] ProjectionError),
}

// ============================================================================
// Element Errors
// ============================================================================

/// Errors that occur while decoding or resolving element data
#[derive(Error, Diagnostic, Debug)]
pub enum ElementError {
    #[error("malformed element data")]
    #[diagnostic(code(tarmac::elements::json))]
    Json(#[from] serde_json::Error),

    #[error("way {way} references node {node} which is not in the response")]
    #[diagnostic(
        code(tarmac::elements::unresolved_node),
        severity(Warning),
        help("the node is dropped from the way")
    )]
    UnresolvedNode { way: ElementId, node: ElementId },
}

// ============================================================================
// Render Warnings
// ============================================================================

/// Problems with a single feature, recovered locally during a render pass
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderWarning {
    #[error("relation {relation} member way {member} has no cached geometry")]
    #[diagnostic(
        code(tarmac::render::missing_geometry),
        severity(Warning),
        help("the member is skipped; the rest of the relation is still drawn")
    )]
    MissingGeometry {
        relation: ElementId,
        member: ElementId,
    },

    #[error("way {way} has {nodes} node(s) and cannot form a line")]
    #[diagnostic(code(tarmac::render::degenerate_way), severity(Warning))]
    DegenerateWay { way: ElementId, nodes: usize },

    #[error("way {way}: could not read `{key}={value}`, using {fallback}")]
    #[diagnostic(code(tarmac::render::ambiguous_tag_value), severity(Warning))]
    AmbiguousTagValue {
        way: ElementId,
        key: &'static str,
        value: String,
        fallback: String,
    },

    #[error("way {way}: {marking} has no direction (coincident points)")]
    #[diagnostic(code(tarmac::render::degenerate_segment), severity(Warning))]
    DegenerateSegment {
        way: ElementId,
        marking: &'static str,
    },
}
