//! Text export of a stop list.
//!
//! ```text
//! Css:   rgba(255, 255, 255, 1.000) 0%
//! Tuple: (0, 255, 255, 255, 1.000)
//! ```
//!
//! Channels are truncated to `0..=255`, the offset is printed as a floored
//! whole percent and entries are joined by `",\n"` with no trailing separator.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::FormatError;
use crate::paint::{GradientStop, sort_stops};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ExportFormat {
    /// CSS color-stop syntax, ready for `linear-gradient(...)`.
    #[default]
    Css,
    /// `(percent, r, g, b, alpha)` tuples.
    Tuple,
}

impl FromStr for ExportFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "tuple" => Ok(ExportFormat::Tuple),
            _ => Err(FormatError { name: s.to_string() }),
        }
    }
}

/// Formats `stops` in ascending offset order.
pub fn export_stops(stops: &[GradientStop], format: ExportFormat) -> String {
    let mut sorted = stops.to_vec();
    sort_stops(&mut sorted);

    let mut out = String::new();
    for (i, stop) in sorted.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        let [r, g, b] = stop.color.to_u8_rgb();
        let a = stop.color.a;
        let pct = percent(stop.offset);
        // Writing into a String cannot fail.
        let _ = match format {
            ExportFormat::Css => write!(out, "rgba({r}, {g}, {b}, {a:.3}) {pct}%"),
            ExportFormat::Tuple => write!(out, "({pct}, {r}, {g}, {b}, {a:.3})"),
        };
    }
    out
}

#[inline]
fn percent(offset: f32) -> u32 {
    let p = (offset * 100.0).floor();
    if p.is_nan() { 0 } else { p.clamp(0.0, 100.0) as u32 }
}
