use std::time::Instant;

use log::trace;

use crate::config::ClickConfig;
use crate::coords::Vec2;

use super::types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PickerInput,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Pointer state for a single window, turning raw events into gestures.
///
/// - a press starts a gesture and is reported as [`PickerInput::Press`]
/// - moves while the gesture's button is held become [`PickerInput::Drag`]
/// - releasing that button ends it with [`PickerInput::Release`]
/// - a second primary press close enough in time and space to the previous
///   one is reported as [`PickerInput::DoubleClick`] instead of a press
#[derive(Debug)]
pub struct PointerState {
    config: ClickConfig,

    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<Vec2>,

    /// Button that started the current gesture.
    held: Option<MouseButton>,

    /// Time and place of the last primary press, for double-click detection.
    last_primary: Option<(Instant, Vec2)>,
}

impl PointerState {
    pub fn new(config: ClickConfig) -> Self {
        Self {
            config,
            modifiers: Modifiers::default(),
            pointer_pos: None,
            held: None,
            last_primary: None,
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Applies a raw event observed at `now`, returning the gesture it completes, if any.
    pub fn apply_event(&mut self, ev: InputEvent, now: Instant) -> Option<PickerInput> {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
                None
            }

            InputEvent::PointerLeft => {
                // The gesture stays alive; the host keeps delivering moves
                // while the button is captured.
                self.pointer_pos = None;
                None
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let pos = Vec2::new(x, y);
                self.pointer_pos = Some(pos);
                self.held.map(|_| PickerInput::Drag { pos })
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                let pos = Vec2::new(x, y);
                self.pointer_pos = Some(pos);
                self.modifiers = modifiers;

                match state {
                    MouseButtonState::Pressed => self.press(button, pos, now),
                    MouseButtonState::Released => {
                        if self.held != Some(button) {
                            return None;
                        }
                        self.held = None;
                        Some(PickerInput::Release { pos })
                    }
                }
            }
        }
    }

    fn press(&mut self, button: MouseButton, pos: Vec2, now: Instant) -> Option<PickerInput> {
        if self.held.is_some() {
            // Chorded presses do not start a second gesture.
            return None;
        }
        self.held = Some(button);

        if button != MouseButton::Left {
            return Some(PickerInput::Press { pos, button, modifiers: self.modifiers });
        }

        let is_double = self.last_primary.is_some_and(|(t, p)| {
            now.saturating_duration_since(t) <= self.config.double_click_interval
                && p.distance(pos) <= self.config.slop
        });

        if is_double {
            trace!("double click at ({:.1}, {:.1})", pos.x, pos.y);
            // A third press starts a fresh sequence.
            self.last_primary = None;
            Some(PickerInput::DoubleClick { pos })
        } else {
            self.last_primary = Some((now, pos));
            Some(PickerInput::Press { pos, button, modifiers: self.modifiers })
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(ClickConfig::default())
    }
}
