//! Gradient picker core: an interactive editor model for multi-stop linear
//! gradients.
//!
//! Handles on a horizontal track define stops. Each stop is a linked pair: a
//! color handle below the track and an alpha handle above it. Every mutation
//! rebuilds the sorted stop list synchronously and notifies listeners before
//! returning.
//!
//! # Quick start
//!
//! ```rust
//! use gradient_picker::prelude::*;
//!
//! let track = Rect::new(10.0, 25.0, 180.0, 20.0);
//! let mut picker = GradientPicker::new(PickerConfig::default(), track);
//! picker.seed_defaults();
//! picker.on_change(|change| println!("{} stops", change.stops.len()));
//!
//! // Double-click the middle of the track to insert a stop there.
//! picker.handle_input(PickerInput::DoubleClick { pos: Vec2::new(100.0, 35.0) });
//! assert_eq!(picker.stops().len(), 3);
//!
//! println!("{}", picker.export(ExportFormat::Css));
//! ```

pub mod builder;
pub mod config;
pub mod coords;
pub mod drag;
pub mod error;
pub mod export;
pub mod handle;
pub mod handle_set;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod paint;
pub mod picker;
pub mod track;

pub use picker::GradientPicker;

/// The types a host needs to drive a picker.
pub mod prelude {
    pub use crate::config::{ClickConfig, OpacityPolicy, PickerConfig};
    pub use crate::coords::{Rect, Vec2};
    pub use crate::drag::EditorRequest;
    pub use crate::error::{FormatError, HandleError};
    pub use crate::export::ExportFormat;
    pub use crate::handle::{Handle, HandleId, HandleKind};
    pub use crate::handle_set::{Change, ChangeKind};
    pub use crate::input::{InputEvent, Modifiers, MouseButton, PickerInput, PointerState};
    pub use crate::lookup::GradientLookup;
    pub use crate::paint::{GradientStop, Rgb, Rgba};
    pub use crate::picker::GradientPicker;
}
