//! Projection of handles into the renderer's stop list.

use crate::handle::{Handle, HandleKind};
use crate::paint::GradientStop;

/// Builds the canonical stop list from a handle collection.
pub struct GradientBuilder;

impl GradientBuilder {
    /// One stop per color handle, ascending by fraction.
    ///
    /// The stop's alpha comes from the linked alpha handle; a color handle
    /// without a resolvable link falls back to its cached alpha. Color
    /// handles sharing a fraction keep their insertion order.
    pub fn build(handles: &[Handle]) -> Vec<GradientStop> {
        let mut colors: Vec<&Handle> = handles.iter().filter(|h| h.is_color()).collect();
        colors.sort_by(|a, b| a.cmp_by_fraction(b));

        colors
            .into_iter()
            .map(|h| {
                let alpha = h
                    .linked()
                    .and_then(|id| handles.iter().find(|o| o.id() == id))
                    .filter(|o| o.kind() == HandleKind::Alpha)
                    .map_or(h.alpha(), Handle::alpha);
                GradientStop::new(h.fraction(), h.color().with_alpha(alpha))
            })
            .collect()
    }
}
