//! Coordinate and geometry types shared by the handle model and the host.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware), as delivered by the host layout
//! - Origin top-left
//! - +X right, +Y down
//!
//! Handles are positioned in this space; fractions live in [0, 1] and are
//! mapped through [`crate::track::Track`].

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
