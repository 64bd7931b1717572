//! Runway threshold markings: two symmetric groups of stripes and a bar.
//!
//! Layout happens in a local frame with the threshold at the origin, +x along
//! the runway pointing inward and y across the pavement. Drawing moves the
//! surface into that frame and back.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;

use super::defaults;
use super::geometry::slope;
use super::surface::Surface;
use crate::types::{Metres, Rect};

/// Rectangles of one threshold marking in the local frame
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLayout {
    pub stripes: Vec<Rect>,
    pub bar: Rect,
}

/// Lay out `stripe_count` stripes across a runway `width_px` wide.
///
/// `m_px` scales marking dimensions from metres to pixels. The gap between
/// the two groups takes up whatever usable width the groups leave, and is
/// never negative.
pub fn layout(width_px: f64, stripe_count: usize, m_px: impl Fn(Metres) -> f64) -> ThresholdLayout {
    let stripe_width = m_px(defaults::THRESHOLD_STRIPE_WIDTH);
    let stripe_length = m_px(defaults::THRESHOLD_STRIPE_LENGTH);
    let stripe_gap = m_px(defaults::THRESHOLD_STRIPE_GAP);
    let bottom = m_px(defaults::THRESHOLD_BOTTOM_OFFSET);
    let side = m_px(defaults::THRESHOLD_SIDE_OFFSET);

    let per_group = stripe_count / 2;
    let pitch = stripe_width + stripe_gap;
    let group = per_group as f64 * stripe_width + per_group.saturating_sub(1) as f64 * stripe_gap;
    let usable = width_px - 2.0 * side;
    let between = (usable - 2.0 * group).max(0.0);

    let first_group = -width_px / 2.0 + side;
    let second_group = first_group + group + between;

    let stripes = [first_group, second_group]
        .into_iter()
        .flat_map(|start| (0..per_group).map(move |k| start + k as f64 * pitch))
        .map(|y| Rect::new(bottom, y, stripe_length, stripe_width))
        .collect();

    ThresholdLayout {
        stripes,
        bar: Rect::new(0.0, -width_px / 2.0, stripe_width, width_px),
    }
}

/// Rotation that makes the local +x axis point from `threshold` to `far`.
///
/// The angle of the runway's slope, turned half a revolution when the far end
/// lies to the left of the threshold. Vertical runways compare y instead.
/// `None` when the two points coincide.
pub fn threshold_angle(threshold: DVec2, far: DVec2) -> Option<f64> {
    let m = slope(threshold, far);
    if m.is_nan() {
        None
    } else if m.is_infinite() {
        Some(if far.y > threshold.y { FRAC_PI_2 } else { -FRAC_PI_2 })
    } else {
        let flip = far.x < threshold.x;
        Some(m.atan() + if flip { PI } else { 0.0 })
    }
}

/// Draw a laid-out threshold at `at`, rotated by `angle`.
pub fn draw_threshold(surface: &mut dyn Surface, at: DVec2, angle: f64, layout: &ThresholdLayout) {
    surface.save();
    surface.translate(at);
    surface.rotate(angle);
    for stripe in &layout.stripes {
        surface.fill_rect(*stripe, defaults::THRESHOLD_STRIPE);
    }
    surface.fill_rect(layout.bar, defaults::THRESHOLD_STRIPE);
    surface.rotate(-angle);
    surface.translate(-at);
    surface.restore();
}
