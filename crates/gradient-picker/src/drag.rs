//! Pointer gestures → handle mutations.
//!
//! ```text
//! Idle ──press──▶ Pressed ──drag──▶ Dragging ──release──▶ Idle
//!   │                 └────────────release───────────────▶ Idle
//!   └──double-click on track background──▶ new pair, Idle
//! ```
//!
//! A release while dragging either keeps the handle (its lift snaps back
//! to the resting row) or, for a color handle pulled to the bottom of the
//! drag band, removes the whole pair.

use log::{debug, trace, warn};

use crate::coords::Vec2;
use crate::handle::{HandleId, HandleKind};
use crate::handle_set::HandleSet;
use crate::input::{Modifiers, MouseButton};
use crate::lookup::color_at;
use crate::paint::Rgb;

/// Gesture state. Scoped to a single press/release cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Button down on a handle, no motion yet.
    Pressed { handle: HandleId, offset: Vec2 },
    /// Handle follows the pointer.
    Dragging { handle: HandleId, offset: Vec2 },
}

/// Request for the host to open one of its auxiliary editors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EditorRequest {
    Color { handle: HandleId, color: Rgb },
    Alpha { handle: HandleId, alpha: f32 },
    Position { handle: HandleId, fraction: f32 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PressOutcome {
    /// A handle was grabbed and may now be dragged.
    Grabbed(HandleId),
    /// The press opens an editor instead of starting a drag.
    Editor(EditorRequest),
    /// Nothing under the pointer, or a button the picker does not use.
    Ignored,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReleaseOutcome {
    /// The handle stays, at the fraction of the last drag step.
    Kept(HandleId),
    /// The handle and its partner were removed.
    Removed(HandleId),
    /// No gesture was in progress.
    Ignored,
}

/// Converts press/drag/release/double-click into [`HandleSet`] mutations.
#[derive(Debug)]
pub struct DragController {
    state: DragState,
    /// Target of committed editor values; survives the gesture that set it.
    selected: Option<HandleId>,
    handle_size: f32,
}

impl DragController {
    pub fn new(handle_size: f32) -> Self {
        Self {
            state: DragState::Idle,
            selected: None,
            handle_size,
        }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn selected(&self) -> Option<HandleId> {
        self.selected
    }

    /// Pointer pressed at `pos`.
    ///
    /// Secondary button or Alt asks for the color editor (color handle) or
    /// alpha editor (alpha handle); Ctrl on a color handle asks for the
    /// position editor. None of those start a drag.
    pub fn press(
        &mut self,
        set: &mut HandleSet,
        pos: Vec2,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> PressOutcome {
        self.state = DragState::Idle;

        if !matches!(button, MouseButton::Left | MouseButton::Right) {
            return PressOutcome::Ignored;
        }
        let Some(id) = set.hit_test(pos, self.handle_size) else {
            return PressOutcome::Ignored;
        };
        let Some(handle) = set.get(id) else {
            return PressOutcome::Ignored;
        };
        let (kind, offset) = (handle.kind(), handle.position() - pos);

        set.focus(Some(id));
        self.selected = Some(id);

        if button == MouseButton::Right || modifiers.alt {
            return PressOutcome::Editor(match kind {
                HandleKind::Color => EditorRequest::Color {
                    handle: id,
                    color: handle_color(set, id),
                },
                HandleKind::Alpha => EditorRequest::Alpha {
                    handle: id,
                    alpha: handle_alpha(set, id),
                },
            });
        }
        if modifiers.ctrl && kind == HandleKind::Color {
            let fraction = set.get(id).map_or(0.0, |h| h.fraction());
            return PressOutcome::Editor(EditorRequest::Position { handle: id, fraction });
        }

        debug!("grabbed {id} at ({:.1}, {:.1})", pos.x, pos.y);
        self.state = DragState::Pressed { handle: id, offset };
        PressOutcome::Grabbed(id)
    }

    /// Pointer moved to `pos` with the button held.
    ///
    /// Returns `true` when a handle moved.
    pub fn drag(&mut self, set: &mut HandleSet, pos: Vec2) -> bool {
        let (id, offset) = match self.state {
            DragState::Pressed { handle, offset } | DragState::Dragging { handle, offset } => {
                (handle, offset)
            }
            DragState::Idle => return false,
        };
        let Some(kind) = set.get(id).map(|h| h.kind()) else {
            self.state = DragState::Idle;
            return false;
        };
        self.state = DragState::Dragging { handle: id, offset };

        let target = pos + offset;
        let track = *set.track();
        let fraction = track.fraction_at(track.clamp_draw_x(target.x));
        let lift = match kind {
            HandleKind::Color => Some(track.lift_at(target.y)),
            HandleKind::Alpha => None,
        };
        trace!("drag {id}: fraction {fraction:.4} lift {lift:?}");
        set.move_handle(id, fraction, lift).is_ok()
    }

    /// Pointer released.
    ///
    /// The fraction is whatever the last drag step produced; the release
    /// position itself does not move the handle.
    pub fn release(&mut self, set: &mut HandleSet) -> ReleaseOutcome {
        let state = std::mem::take(&mut self.state);
        let id = match state {
            DragState::Pressed { handle, .. } | DragState::Dragging { handle, .. } => handle,
            DragState::Idle => return ReleaseOutcome::Ignored,
        };
        let Some((kind, lift)) = set.get(id).map(|h| (h.kind(), h.lift())) else {
            return ReleaseOutcome::Ignored;
        };

        // A zero-height band would otherwise remove on a plain click.
        let remove = kind == HandleKind::Color && lift > 0.0 && lift >= set.track().max_lift();
        if remove && set.remove(id).is_ok() {
            debug!("released {id} past removal threshold");
            if self.selected.is_some_and(|s| set.get(s).is_none()) {
                self.selected = None;
            }
            return ReleaseOutcome::Removed(id);
        }

        if lift > 0.0 {
            // Snap back to the resting row.
            if let Err(e) = set.set_lift(id, 0.0) {
                warn!("release {id}: {e}");
            }
        }
        ReleaseOutcome::Kept(id)
    }

    /// Double-click at `pos`.
    ///
    /// On the track background this inserts a pair whose color is the
    /// current gradient's color at that point, so the gradient looks the
    /// same before and after. Returns the new color handle.
    pub fn double_click(&mut self, set: &mut HandleSet, pos: Vec2) -> Option<HandleId> {
        self.state = DragState::Idle;

        if set.hit_test(pos, self.handle_size).is_some() || !set.track().rect().contains(pos) {
            return None;
        }
        let fraction = set.track().fraction_at_pointer(pos.x);
        let color = if set.stops().is_empty() {
            Rgb::white()
        } else {
            color_at(set.stops(), fraction).rgb()
        };

        let (color_id, _) = set.add_pair(fraction, color)?;
        self.selected = Some(color_id);
        debug!("inserted stop {color_id} at {fraction:.3}");
        Some(color_id)
    }
}

fn handle_color(set: &HandleSet, id: HandleId) -> Rgb {
    set.get(id).map_or(Rgb::black(), |h| h.color())
}

fn handle_alpha(set: &HandleSet, id: HandleId) -> f32 {
    set.get(id).map_or(1.0, |h| h.alpha())
}
