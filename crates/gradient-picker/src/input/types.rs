use crate::coords::{Rect, Vec2};
use crate::paint::Rgb;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are included so gesture recognition does not depend on an
/// external "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Raw, platform-agnostic pointer events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    /// Pointer left the window surface.
    PointerLeft,
}

/// Everything the picker reacts to.
///
/// Pointer gestures come from the host (or a [`super::PointerState`]);
/// committed values come from the host's auxiliary editors, already parsed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PickerInput {
    Press { pos: Vec2, button: MouseButton, modifiers: Modifiers },
    Drag { pos: Vec2 },
    Release { pos: Vec2 },
    DoubleClick { pos: Vec2 },
    CommitFraction(f32),
    CommitAlpha(f32),
    CommitColor(Rgb),
    TrackResized(Rect),
}
