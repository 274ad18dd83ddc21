//! Draggable handles.
//!
//! A stop is represented by two handles: a [`HandleKind::Color`] handle below
//! the track carrying the RGB value, and a [`HandleKind::Alpha`] handle above
//! it carrying the opacity. The two are linked by id; the link itself is
//! maintained by [`crate::handle_set::HandleSet`].

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::coords::{Rect, Vec2};
use crate::paint::Rgb;
use crate::paint::gradient::cmp_offset;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

// ── HandleId ──────────────────────────────────────────────────────────────

/// Unique identifier for a handle.
///
/// Allocated once per handle construction and never reused, so a stale id
/// held by the host simply stops resolving after its handle is removed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    fn next() -> Self {
        HandleId(NEXT_HANDLE_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ── HandleKind ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandleKind {
    /// Sits below the track; its fraction and color define a stop.
    Color,
    /// Sits above the track; defines the opacity of its paired stop.
    Alpha,
}

// ── Handle ────────────────────────────────────────────────────────────────

/// A positioned, typed point on the gradient track.
///
/// Invariants:
/// - `fraction` and `alpha` are always in `[0, 1]`; setters clamp silently
///   and map NaN to 0, so a written value may not round-trip.
/// - `position` is a projection of `fraction`, `lift` and the track geometry
///   and is rewritten by every layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    id: HandleId,
    kind: HandleKind,
    fraction: f32,
    color: Rgb,
    alpha: f32,
    /// Downward drag displacement of a color handle below its resting row.
    lift: f32,
    position: Vec2,
    linked: Option<HandleId>,
    focused: bool,
}

impl Handle {
    pub fn new(kind: HandleKind, fraction: f32, color: Rgb, alpha: f32) -> Self {
        Self {
            id: HandleId::next(),
            kind,
            fraction: clamp_unit(fraction),
            color,
            alpha: clamp_unit(alpha),
            lift: 0.0,
            position: Vec2::zero(),
            linked: None,
            focused: false,
        }
    }

    /// A fully opaque color handle.
    pub fn new_color(fraction: f32, color: Rgb) -> Self {
        Self::new(HandleKind::Color, fraction, color, 1.0)
    }

    /// An alpha handle; its color is unused.
    pub fn new_alpha(fraction: f32, alpha: f32) -> Self {
        Self::new(HandleKind::Alpha, fraction, Rgb::black(), alpha)
    }

    #[inline]
    pub fn id(&self) -> HandleId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    #[inline]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn lift(&self) -> f32 {
        self.lift
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn linked(&self) -> Option<HandleId> {
        self.linked
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn is_color(&self) -> bool {
        self.kind == HandleKind::Color
    }

    pub fn set_kind(&mut self, kind: HandleKind) {
        self.kind = kind;
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = clamp_unit(fraction);
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = clamp_unit(alpha);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_lift(&mut self, lift: f32) {
        self.lift = if lift.is_nan() { 0.0 } else { lift.max(0.0) };
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Only [`crate::handle_set::HandleSet::link`] may write links, so both
    /// sides always change together.
    pub(crate) fn set_linked(&mut self, linked: Option<HandleId>) {
        self.linked = linked;
    }

    /// Square hit box anchored at the draw position.
    #[inline]
    pub fn bounds(&self, size: f32) -> Rect {
        Rect::new(self.position.x, self.position.y, size, size)
    }

    /// Total order by fraction. Ties compare equal; stable sorts keep
    /// insertion order for them.
    #[inline]
    pub fn cmp_by_fraction(&self, other: &Handle) -> Ordering {
        cmp_offset(self.fraction, other.fraction)
    }
}

/// Clamps into `[0, 1]`, mapping NaN to 0 and `-0.0` to `0.0`.
#[inline]
pub(crate) fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) + 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn fraction_setter_clamps() {
        let mut h = Handle::new_color(0.5, Rgb::white());
        h.set_fraction(-5.0);
        assert_eq!(h.fraction(), 0.0);
        h.set_fraction(1.7);
        assert_eq!(h.fraction(), 1.0);
        h.set_fraction(0.3);
        assert_eq!(h.fraction(), 0.3);
    }

    #[test]
    fn alpha_setter_clamps() {
        let mut h = Handle::new_alpha(0.5, 0.5);
        h.set_alpha(-5.0);
        assert_eq!(h.alpha(), 0.0);
        h.set_alpha(1.7);
        assert_eq!(h.alpha(), 1.0);
    }

    #[test]
    fn constructor_clamps() {
        let h = Handle::new(HandleKind::Alpha, 3.0, Rgb::black(), -1.0);
        assert_eq!(h.fraction(), 1.0);
        assert_eq!(h.alpha(), 0.0);
    }

    #[test]
    fn nan_clamps_to_zero() {
        let mut h = Handle::new_color(0.5, Rgb::white());
        h.set_fraction(f32::NAN);
        assert_eq!(h.fraction(), 0.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert!(clamp_unit(-0.0).is_sign_positive());
    }

    // ── identity and ordering ─────────────────────────────────────────────

    #[test]
    fn ids_are_unique() {
        let a = Handle::new_color(0.0, Rgb::white());
        let b = Handle::new_color(0.0, Rgb::white());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn orders_by_fraction() {
        let lo = Handle::new_color(0.2, Rgb::white());
        let hi = Handle::new_alpha(0.8, 1.0);
        assert_eq!(lo.cmp_by_fraction(&hi), Ordering::Less);
        assert_eq!(hi.cmp_by_fraction(&lo), Ordering::Greater);
        assert_eq!(lo.cmp_by_fraction(&lo.clone()), Ordering::Equal);
    }

    #[test]
    fn new_handles_are_unlinked_and_unfocused() {
        let h = Handle::new_color(0.0, Rgb::white());
        assert_eq!(h.linked(), None);
        assert!(!h.is_focused());
        assert_eq!(h.lift(), 0.0);
    }
}
