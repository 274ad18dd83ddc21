//! Mapping between track pixels and gradient fractions.
//!
//! With track origin `X₀`, width `W` and handle-center offset `C`:
//!
//! ```text
//! fraction = clamp((draw_x - X₀ + C) / W, 0, 1)
//! draw_x   = X₀ + fraction * W - C
//! ```
//!
//! `draw_x` is a handle's draw position, which sits `C` left of its visual
//! center. A pointer at `P` therefore maps to `(P - X₀) / W`.

use crate::config::PickerConfig;
use crate::coords::{Rect, Vec2};
use crate::handle::{HandleKind, clamp_unit};

/// Track geometry plus the handle metrics needed to place handles around it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Track {
    rect: Rect,
    handle_center: f32,
    handle_height: f32,
    drag_y_offset: f32,
}

impl Track {
    pub fn new(rect: Rect, config: &PickerConfig) -> Self {
        Self {
            rect,
            handle_center: config.handle_center,
            handle_height: config.handle_height,
            drag_y_offset: config.drag_y_offset,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Fraction for a handle drawn at `draw_x`. A zero-width track maps
    /// everything to 0.
    pub fn fraction_at(&self, draw_x: f32) -> f32 {
        let w = self.rect.width();
        if w.is_nan() || w <= 0.0 {
            return 0.0;
        }
        clamp_unit((draw_x - self.rect.left() + self.handle_center) / w)
    }

    /// Fraction under a pointer at `x`.
    #[inline]
    pub fn fraction_at_pointer(&self, x: f32) -> f32 {
        self.fraction_at(x - self.handle_center)
    }

    #[inline]
    pub fn draw_x(&self, fraction: f32) -> f32 {
        self.rect.left() + fraction * self.rect.width() - self.handle_center
    }

    /// Draw-x range a dragged handle is confined to.
    #[inline]
    pub fn clamp_draw_x(&self, x: f32) -> f32 {
        let min = self.rect.left() - self.handle_center;
        let max = self.rect.right() - self.handle_center;
        if x.is_nan() { min } else { x.clamp(min, max.max(min)) }
    }

    /// Resting row of color handles: the track's bottom edge.
    #[inline]
    pub fn color_row_y(&self) -> f32 {
        self.rect.bottom()
    }

    /// Fixed row of alpha handles, one handle height above the track.
    #[inline]
    pub fn alpha_row_y(&self) -> f32 {
        self.rect.top() - self.handle_height
    }

    /// Largest downward lift; reaching it marks a color handle for removal.
    #[inline]
    pub fn max_lift(&self) -> f32 {
        self.drag_y_offset
    }

    /// Lift for a color handle whose draw position would be at `y`.
    pub fn lift_at(&self, y: f32) -> f32 {
        let lift = y - self.color_row_y();
        if lift.is_nan() { 0.0 } else { lift.clamp(0.0, self.drag_y_offset.max(0.0)) }
    }

    /// Draw position of a handle.
    pub fn position(&self, kind: HandleKind, fraction: f32, lift: f32) -> Vec2 {
        let x = self.draw_x(fraction);
        match kind {
            HandleKind::Color => Vec2::new(x, self.color_row_y() + lift),
            HandleKind::Alpha => Vec2::new(x, self.alpha_row_y()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(Rect::new(10.0, 25.0, 180.0, 20.0), &PickerConfig::default())
    }

    // ── fraction mapping ──────────────────────────────────────────────────

    #[test]
    fn draw_x_and_fraction_are_inverse() {
        let t = track();
        for f in [0.0, 0.25, 0.5, 1.0] {
            assert!((t.fraction_at(t.draw_x(f)) - f).abs() < 1e-6);
        }
    }

    #[test]
    fn draw_x_applies_center_offset() {
        let t = track();
        assert_eq!(t.draw_x(0.0), 5.5);
        assert_eq!(t.draw_x(1.0), 185.5);
    }

    #[test]
    fn fraction_clamps_outside_track() {
        let t = track();
        assert_eq!(t.fraction_at(-100.0), 0.0);
        assert_eq!(t.fraction_at(1000.0), 1.0);
    }

    #[test]
    fn pointer_maps_without_center_offset() {
        let t = track();
        assert_eq!(t.fraction_at_pointer(100.0), 0.5);
    }

    #[test]
    fn zero_width_track_maps_to_zero() {
        let t = Track::new(Rect::new(10.0, 0.0, 0.0, 20.0), &PickerConfig::default());
        assert_eq!(t.fraction_at(50.0), 0.0);
    }

    #[test]
    fn clamp_draw_x_bounds() {
        let t = track();
        assert_eq!(t.clamp_draw_x(-50.0), 5.5);
        assert_eq!(t.clamp_draw_x(500.0), 185.5);
        assert_eq!(t.clamp_draw_x(50.0), 50.0);
    }

    // ── vertical placement ────────────────────────────────────────────────

    #[test]
    fn rows_sit_around_track() {
        let t = track();
        assert_eq!(t.position(HandleKind::Color, 0.0, 0.0).y, 45.0);
        assert_eq!(t.position(HandleKind::Alpha, 0.0, 5.0).y, 12.0);
    }

    #[test]
    fn lift_is_confined_to_band() {
        let t = track();
        assert_eq!(t.lift_at(10.0), 0.0);
        assert_eq!(t.lift_at(50.0), 5.0);
        assert_eq!(t.lift_at(500.0), t.max_lift());
    }
}
