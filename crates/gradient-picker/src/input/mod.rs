//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Hosts either feed [`PickerInput`] gestures straight into the picker, or
//! feed raw [`InputEvent`]s through a [`PointerState`], which recognizes
//! drags and double-clicks.

pub mod platform;
mod state;
mod types;

pub use state::PointerState;
pub use types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PickerInput,
    PointerButtonEvent,
    PointerMoveEvent,
};
