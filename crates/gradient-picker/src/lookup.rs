//! Color at an arbitrary fraction of a stop list.

use crate::paint::{GradientStop, Rgba, sort_stops};

/// Interpolating lookup over its own sorted copy of a stop list.
///
/// Owning the copy means a lookup never runs against a list that was
/// mutated after sorting.
#[derive(Debug, Clone, Default)]
pub struct GradientLookup {
    stops: Vec<GradientStop>,
}

impl GradientLookup {
    pub fn new(stops: &[GradientStop]) -> Self {
        let mut lookup = Self::default();
        lookup.set_stops(stops);
        lookup
    }

    /// Replaces the stops and re-sorts them.
    pub fn set_stops(&mut self, stops: &[GradientStop]) {
        self.stops.clear();
        self.stops.extend_from_slice(stops);
        sort_stops(&mut self.stops);
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn color_at(&self, fraction: f32) -> Rgba {
        color_at(&self.stops, fraction)
    }
}

/// Color at `fraction` over `stops`, which must already be sorted by offset.
///
/// - before the first stop (inclusive): the first color, unchanged
/// - after the last stop (inclusive): the last color, unchanged
/// - otherwise every channel, alpha included, is interpolated linearly
///   between the bounding stops
///
/// An empty list yields transparent black.
pub fn color_at(stops: &[GradientStop], fraction: f32) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::transparent();
    };

    // NaN compares false everywhere and lands on the first stop.
    if fraction.is_nan() || fraction <= first.offset {
        return first.color;
    }
    if fraction >= last.offset {
        return last.color;
    }

    // fraction < last.offset, so hi < len. hi is 0 only when the first
    // offset is NaN.
    let hi = stops.partition_point(|s| s.offset <= fraction);
    if hi == 0 {
        return first.color;
    }
    let (lo, hi) = (&stops[hi - 1], &stops[hi]);

    let width = hi.offset - lo.offset;
    if width <= 0.0 {
        return lo.color;
    }
    let t = (fraction - lo.offset) / width;
    lo.color.lerp(hi.color, t)
}
