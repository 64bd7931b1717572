//! The abstract drawing surface and a recording implementation.
//!
//! The renderer never talks to a canvas directly: it issues commands against
//! [`Surface`]. Hosts implement it for their backend; [`RecordingSurface`]
//! captures the commands for tests and offline consumers.

use glam::{DAffine2, DVec2};

use super::style::{Color, FillRule, Font, Icon, Stroke};
use crate::types::Rect;

/// A vector path made of one or more open polylines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorPath {
    subpaths: Vec<Vec<DVec2>>,
}

impl VectorPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single polyline
    pub fn polyline(points: Vec<DVec2>) -> Self {
        let mut path = Self::new();
        path.push_subpath(points);
        path
    }

    /// A straight segment
    pub fn line(from: DVec2, to: DVec2) -> Self {
        Self::polyline(vec![from, to])
    }

    /// Axis-aligned rectangle outline, closed
    pub fn rect(rect: Rect) -> Self {
        let [a, b, c, d] = rect.corners();
        Self::polyline(vec![a, b, c, d, a])
    }

    /// Empty polylines are not stored.
    pub fn push_subpath(&mut self, points: Vec<DVec2>) {
        if !points.is_empty() {
            self.subpaths.push(points);
        }
    }

    /// Append every sub-path of `other`, keeping them separate.
    pub fn append(&mut self, other: &VectorPath) {
        self.subpaths.extend(other.subpaths.iter().cloned());
    }

    pub fn subpaths(&self) -> &[Vec<DVec2>] {
        &self.subpaths
    }

    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.subpaths.iter().flatten().copied()
    }

    pub fn first(&self) -> Option<DVec2> {
        self.subpaths.first().and_then(|s| s.first()).copied()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.subpaths.last().and_then(|s| s.last()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }
}

/// A 2D drawing target with a save/restore transform stack
pub trait Surface {
    /// Clear a rectangle to transparent.
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_path(&mut self, path: &VectorPath, stroke: &Stroke);
    fn fill_path(&mut self, path: &VectorPath, color: Color, rule: FillRule);
    /// Draw an icon scaled into `rect`.
    fn draw_image(&mut self, icon: Icon, rect: Rect);
    /// Draw text horizontally centered on `anchor` (baseline at `anchor.y`).
    fn fill_text(&mut self, text: &str, anchor: DVec2, font: Font, color: Color);
    fn save(&mut self);
    fn restore(&mut self);
    fn reset_transform(&mut self);
    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, radians: f64);
    fn clip(&mut self, rect: Rect);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
    StrokePath { path: VectorPath, stroke: Stroke },
    FillPath { path: VectorPath, color: Color, rule: FillRule },
    DrawImage { icon: Icon, rect: Rect },
    FillText { text: String, anchor: DVec2, font: Font, color: Color },
    Save,
    Restore,
    ResetTransform,
    Translate(DVec2),
    Rotate(f64),
    Clip(Rect),
}

impl DrawCommand {
    /// Short name of the command, for summaries
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::Clear(_) => "clear",
            DrawCommand::FillRect { .. } => "fill_rect",
            DrawCommand::StrokePath { .. } => "stroke_path",
            DrawCommand::FillPath { .. } => "fill_path",
            DrawCommand::DrawImage { .. } => "draw_image",
            DrawCommand::FillText { .. } => "fill_text",
            DrawCommand::Save => "save",
            DrawCommand::Restore => "restore",
            DrawCommand::ResetTransform => "reset_transform",
            DrawCommand::Translate(_) => "translate",
            DrawCommand::Rotate(_) => "rotate",
            DrawCommand::Clip(_) => "clip",
        }
    }

    /// Every coordinate and length carried by the command.
    pub fn numbers(&self) -> Vec<f64> {
        let rect = |r: &Rect| vec![r.origin.x, r.origin.y, r.size.x, r.size.y];
        match self {
            DrawCommand::Clear(r) | DrawCommand::Clip(r) => rect(r),
            DrawCommand::FillRect { rect: r, .. } | DrawCommand::DrawImage { rect: r, .. } => rect(r),
            DrawCommand::StrokePath { path, stroke } => path
                .points()
                .flat_map(|p| [p.x, p.y])
                .chain([stroke.width])
                .chain(stroke.dash.iter().copied())
                .collect(),
            DrawCommand::FillPath { path, .. } => path.points().flat_map(|p| [p.x, p.y]).collect(),
            DrawCommand::FillText { anchor, .. } | DrawCommand::Translate(anchor) => vec![anchor.x, anchor.y],
            DrawCommand::Rotate(angle) => vec![*angle],
            DrawCommand::Save | DrawCommand::Restore | DrawCommand::ResetTransform => Vec::new(),
        }
    }
}

/// A recorded command with the surface transform in effect when it was issued
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub command: DrawCommand,
    pub transform: DAffine2,
}

impl DrawOp {
    /// Map a point in the command's local space to surface space.
    pub fn to_surface(&self, local: DVec2) -> DVec2 {
        self.transform.transform_point2(local)
    }
}

/// A surface that keeps every command, tracking the transform stack
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    transform: DAffine2,
    stack: Vec<DAffine2>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            transform: DAffine2::IDENTITY,
            stack: Vec::new(),
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.ops.iter().map(|op| &op.command)
    }

    /// Current transform
    pub fn transform(&self) -> DAffine2 {
        self.transform
    }

    /// Number of unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget all commands and reset the transform stack.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn record(&mut self, command: DrawCommand) {
        self.ops.push(DrawOp {
            command,
            transform: self.transform,
        });
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.record(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::FillRect { rect, color });
    }

    fn stroke_path(&mut self, path: &VectorPath, stroke: &Stroke) {
        self.record(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn fill_path(&mut self, path: &VectorPath, color: Color, rule: FillRule) {
        self.record(DrawCommand::FillPath {
            path: path.clone(),
            color,
            rule,
        });
    }

    fn draw_image(&mut self, icon: Icon, rect: Rect) {
        self.record(DrawCommand::DrawImage { icon, rect });
    }

    fn fill_text(&mut self, text: &str, anchor: DVec2, font: Font, color: Color) {
        self.record(DrawCommand::FillText {
            text: text.to_string(),
            anchor,
            font,
            color,
        });
    }

    fn save(&mut self) {
        self.record(DrawCommand::Save);
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        self.record(DrawCommand::Restore);
        // An unbalanced restore is ignored, as on a canvas
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn reset_transform(&mut self) {
        self.record(DrawCommand::ResetTransform);
        self.transform = DAffine2::IDENTITY;
    }

    fn translate(&mut self, offset: DVec2) {
        self.record(DrawCommand::Translate(offset));
        self.transform = self.transform * DAffine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.record(DrawCommand::Rotate(radians));
        self.transform = self.transform * DAffine2::from_angle(radians);
    }

    fn clip(&mut self, rect: Rect) {
        self.record(DrawCommand::Clip(rect));
    }
}
