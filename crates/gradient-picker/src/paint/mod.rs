//! Paint model shared between the handle model and renderers.
//!
//! Scope:
//! - color representation (straight, linear RGB / RGBA)
//! - gradient stops, the output consumed by the renderer
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Rgb, Rgba};
pub use gradient::{GradientStop, sort_stops};
