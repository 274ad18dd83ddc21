use std::cmp::Ordering;

use super::Rgba;

/// A single gradient stop.
///
/// `offset` is in [0, 1] for stops produced by the picker; stops handed in
/// from elsewhere are not validated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Sorts stops ascending by offset.
///
/// The sort is stable: stops sharing an offset keep their relative order.
pub fn sort_stops(stops: &mut [GradientStop]) {
    stops.sort_by(|a, b| cmp_offset(a.offset, b.offset));
}

/// Offset comparison used for every stop and handle sort in the crate.
///
/// Incomparable values (NaN) compare equal so a stable sort keeps them in place.
#[inline]
pub(crate) fn cmp_offset(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
