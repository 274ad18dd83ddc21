//! The gradient picker facade.
//!
//! [`GradientPicker`] wires a [`HandleSet`] and a [`DragController`] behind a
//! single input entry point. Hosts feed [`PickerInput`]s, listen for stop
//! list changes with [`GradientPicker::on_change`], and open their auxiliary
//! editors when [`GradientPicker::on_editor_request`] fires.

use log::{debug, warn};

use crate::config::PickerConfig;
use crate::coords::Rect;
use crate::drag::{DragController, EditorRequest, PressOutcome};
use crate::error::HandleError;
use crate::export::{ExportFormat, export_stops};
use crate::handle::HandleId;
use crate::handle_set::{Change, HandleSet};
use crate::input::{Modifiers, MouseButton, PickerInput};
use crate::lookup::color_at;
use crate::paint::{GradientStop, Rgb, Rgba};
use crate::track::Track;

pub struct GradientPicker {
    config: PickerConfig,
    handles: HandleSet,
    drag: DragController,
    editor_listeners: Vec<Box<dyn FnMut(&EditorRequest)>>,
    seeded: bool,
}

impl GradientPicker {
    /// An empty picker over `track`. Call [`Self::seed_defaults`] before
    /// first display to get the white-to-black starting gradient.
    pub fn new(config: PickerConfig, track: Rect) -> Self {
        let handles = HandleSet::new(Track::new(track, &config), config.opacity);
        let drag = DragController::new(config.handle_size);
        Self {
            config,
            handles,
            drag,
            editor_listeners: Vec::new(),
            seeded: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    #[inline]
    pub fn handle_set(&self) -> &HandleSet {
        &self.handles
    }

    #[inline]
    pub fn drag_controller(&self) -> &DragController {
        &self.drag
    }

    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        self.handles.stops()
    }

    /// Handle that committed editor values apply to.
    #[inline]
    pub fn selected(&self) -> Option<HandleId> {
        self.drag.selected()
    }

    /// Registers a stop list listener. See [`HandleSet::on_change`].
    pub fn on_change(&mut self, f: impl FnMut(&Change<'_>) + 'static) {
        self.handles.on_change(f);
    }

    /// Registers a listener for editor requests (secondary click, Alt or Ctrl
    /// press on a handle). The request carries the value to pre-fill.
    pub fn on_editor_request(&mut self, f: impl FnMut(&EditorRequest) + 'static) {
        self.editor_listeners.push(Box::new(f));
    }

    /// Inserts the default white@0 and black@1 stops.
    ///
    /// Only the first call has an effect. Returns whether stops were added.
    pub fn seed_defaults(&mut self) -> bool {
        if self.seeded {
            return false;
        }
        self.seeded = true;
        self.handles.add_pair(0.0, Rgb::white());
        self.handles.add_pair(1.0, Rgb::black());
        debug!("seeded default stops");
        true
    }

    pub fn handle_input(&mut self, input: PickerInput) {
        if !input_is_finite(&input) {
            warn!("dropped non-finite input {input:?}");
            return;
        }
        match input {
            PickerInput::Press { pos, button, modifiers } => {
                let outcome = self.drag.press(&mut self.handles, pos, button, modifiers);
                if let PressOutcome::Editor(req) = outcome {
                    self.emit_editor_request(req);
                }
            }

            PickerInput::Drag { pos } => {
                self.drag.drag(&mut self.handles, pos);
            }

            PickerInput::Release { .. } => {
                self.drag.release(&mut self.handles);
            }

            PickerInput::DoubleClick { pos } => {
                // The second click of a double-click on a handle grabs it.
                if self.handles.hit_test(pos, self.config.handle_size).is_some() {
                    let modifiers = Modifiers::default();
                    self.drag.press(&mut self.handles, pos, MouseButton::Left, modifiers);
                } else {
                    self.drag.double_click(&mut self.handles, pos);
                }
            }

            PickerInput::CommitFraction(f) => {
                self.commit("fraction", |set, id| set.set_fraction(id, f));
            }

            PickerInput::CommitAlpha(a) => {
                self.commit("alpha", |set, id| set.set_alpha(id, a));
            }

            PickerInput::CommitColor(c) => {
                self.commit("color", |set, id| set.set_color(id, c));
            }

            PickerInput::TrackResized(rect) => {
                self.handles.set_track(rect);
            }
        }
    }

    /// Color of the current gradient at `fraction`.
    pub fn color_at(&self, fraction: f32) -> Rgba {
        color_at(self.handles.stops(), fraction)
    }

    pub fn export(&self, format: ExportFormat) -> String {
        export_stops(self.handles.stops(), format)
    }

    fn commit(
        &mut self,
        what: &str,
        apply: impl FnOnce(&mut HandleSet, HandleId) -> Result<(), HandleError>,
    ) {
        let Some(id) = self.drag.selected() else {
            debug!("committed {what} with no selected handle, ignored");
            return;
        };
        if let Err(e) = apply(&mut self.handles, id) {
            warn!("commit {what}: {e}");
        }
    }

    fn emit_editor_request(&mut self, req: EditorRequest) {
        debug!("editor request {req:?}");
        for f in self.editor_listeners.iter_mut() {
            f(&req);
        }
    }
}

fn input_is_finite(input: &PickerInput) -> bool {
    match *input {
        PickerInput::Press { pos, .. }
        | PickerInput::Drag { pos }
        | PickerInput::Release { pos }
        | PickerInput::DoubleClick { pos } => pos.is_finite(),
        PickerInput::CommitColor(c) => c.is_finite(),
        // Fractions and alphas clamp NaN to 0.
        PickerInput::CommitFraction(_) | PickerInput::CommitAlpha(_) => true,
        PickerInput::TrackResized(r) => r.origin.is_finite() && r.size.is_finite(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::OpacityPolicy;
    use crate::coords::Vec2;
    use crate::handle::HandleKind;

    const SIZE: f32 = 12.0;

    fn track() -> Rect {
        Rect::new(10.0, 25.0, 180.0, 20.0)
    }

    fn seeded() -> GradientPicker {
        let mut p = GradientPicker::new(PickerConfig::default(), track());
        p.seed_defaults();
        p
    }

    fn color_handle_at(p: &GradientPicker, fraction: f32) -> HandleId {
        p.handle_set()
            .iter()
            .find(|h| h.kind() == HandleKind::Color && h.fraction() == fraction)
            .map(|h| h.id())
            .unwrap()
    }

    fn over(p: &GradientPicker, id: HandleId) -> Vec2 {
        p.handle_set().get(id).unwrap().position() + Vec2::new(SIZE * 0.5, SIZE * 0.5)
    }

    fn press(p: &mut GradientPicker, pos: Vec2, button: MouseButton, modifiers: Modifiers) {
        p.handle_input(PickerInput::Press { pos, button, modifiers });
    }

    fn left_drag(p: &mut GradientPicker, from: Vec2, to: Vec2) {
        press(p, from, MouseButton::Left, Modifiers::default());
        p.handle_input(PickerInput::Drag { pos: to });
        p.handle_input(PickerInput::Release { pos: to });
    }

    // ── seeding ───────────────────────────────────────────────────────────

    #[test]
    fn seed_defaults_runs_once() {
        let mut p = GradientPicker::new(PickerConfig::default(), track());
        assert!(p.seed_defaults());
        assert!(!p.seed_defaults());
        assert_eq!(p.stops().len(), 2);
        assert_eq!(p.handle_set().len(), 4);
    }

    #[test]
    fn seeded_gradient_is_white_to_black() {
        let p = seeded();
        let mid = p.color_at(0.5);
        assert_eq!(mid.to_u8_rgb(), [127, 127, 127]);
        assert_eq!(mid.a, 1.0);
    }

    // ── double click ──────────────────────────────────────────────────────

    #[test]
    fn double_click_on_empty_picker_adds_one_stop() {
        let mut p = GradientPicker::new(PickerConfig::default(), track());
        p.handle_input(PickerInput::DoubleClick { pos: Vec2::new(100.0, 35.0) });
        assert_eq!(p.stops().len(), 1);
        assert_eq!(p.stops()[0].offset, 0.5);
        assert_eq!(p.stops()[0].color, Rgba::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn double_click_keeps_the_gradient_unchanged() {
        let mut p = seeded();
        let before = p.color_at(0.25);
        p.handle_input(PickerInput::DoubleClick { pos: Vec2::new(55.0, 35.0) });
        assert_eq!(p.stops().len(), 3);
        assert_eq!(p.stops()[1].offset, 0.25);
        assert_eq!(p.color_at(0.25), before);
    }

    #[test]
    fn double_click_on_handle_grabs_it() {
        let mut p = seeded();
        let black = color_handle_at(&p, 1.0);
        let at = over(&p, black);
        p.handle_input(PickerInput::DoubleClick { pos: at });
        assert_eq!(p.stops().len(), 2);
        assert_eq!(p.selected(), Some(black));
    }

    // ── dragging ──────────────────────────────────────────────────────────

    #[test]
    fn dragging_middle_stop_resorts() {
        let mut p = seeded();
        p.handle_input(PickerInput::DoubleClick { pos: Vec2::new(100.0, 35.0) });
        let mid = color_handle_at(&p, 0.5);
        p.handle_input(PickerInput::CommitColor(Rgb::new(1.0, 0.0, 0.0)));

        let from = over(&p, mid);
        left_drag(&mut p, from, Vec2::new(0.0, from.y));

        let offsets: Vec<f32> = p.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.0, 1.0]);
        // Ties keep insertion order: the seeded white stop stays first.
        assert_eq!(p.stops()[0].color.rgb(), Rgb::white());
        assert_eq!(p.stops()[1].color.rgb(), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn drag_past_threshold_removes_pair() {
        let mut p = seeded();
        let black = color_handle_at(&p, 1.0);
        let from = over(&p, black);
        left_drag(&mut p, from, from + Vec2::new(0.0, 40.0));

        assert_eq!(p.stops().len(), 1);
        assert_eq!(p.handle_set().len(), 2);
        assert_eq!(p.selected(), None);
    }

    #[test]
    fn short_vertical_drag_snaps_back() {
        let mut p = seeded();
        let black = color_handle_at(&p, 1.0);
        let from = over(&p, black);
        left_drag(&mut p, from, from + Vec2::new(0.0, 5.0));

        assert_eq!(p.stops().len(), 2);
        assert_eq!(p.handle_set().get(black).unwrap().lift(), 0.0);
    }

    // ── editors ───────────────────────────────────────────────────────────

    #[test]
    fn secondary_press_requests_color_editor() {
        let mut p = seeded();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        p.on_editor_request(move |r| sink.borrow_mut().push(*r));

        let white = color_handle_at(&p, 0.0);
        let at = over(&p, white);
        press(&mut p, at, MouseButton::Right, Modifiers::default());

        assert_eq!(
            *seen.borrow(),
            vec![EditorRequest::Color { handle: white, color: Rgb::white() }]
        );
    }

    #[test]
    fn ctrl_press_requests_position_editor() {
        let mut p = seeded();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        p.on_editor_request(move |r| sink.borrow_mut().push(*r));

        let black = color_handle_at(&p, 1.0);
        let at = over(&p, black);
        press(&mut p, at, MouseButton::Left, Modifiers { ctrl: true, ..Modifiers::default() });

        assert_eq!(
            *seen.borrow(),
            vec![EditorRequest::Position { handle: black, fraction: 1.0 }]
        );
    }

    #[test]
    fn committed_values_apply_to_selection() {
        let mut p = seeded();
        let black = color_handle_at(&p, 1.0);
        let at = over(&p, black);
        press(&mut p, at, MouseButton::Right, Modifiers::default());

        p.handle_input(PickerInput::CommitAlpha(0.5));
        p.handle_input(PickerInput::CommitFraction(0.75));
        p.handle_input(PickerInput::CommitColor(Rgb::new(0.0, 0.0, 1.0)));

        let last = p.stops()[1];
        assert_eq!(last.offset, 0.75);
        assert_eq!(last.color, Rgba::new(0.0, 0.0, 1.0, 0.5));
    }

    #[test]
    fn commit_without_selection_is_ignored() {
        let mut p = seeded();
        let before = p.stops().to_vec();
        p.handle_input(PickerInput::CommitAlpha(0.1));
        assert_eq!(p.stops(), &before[..]);
    }

    #[test]
    fn non_finite_inputs_are_dropped() {
        let mut p = seeded();
        let before = p.stops().to_vec();
        p.handle_input(PickerInput::DoubleClick { pos: Vec2::new(f32::NAN, 35.0) });
        p.handle_input(PickerInput::TrackResized(Rect::new(0.0, 0.0, f32::INFINITY, 20.0)));
        assert_eq!(p.stops(), &before[..]);
        assert_eq!(p.handle_set().track().rect(), track());
    }

    // ── geometry and export ───────────────────────────────────────────────

    #[test]
    fn resize_keeps_stops() {
        let mut p = seeded();
        p.handle_input(PickerInput::TrackResized(Rect::new(0.0, 0.0, 400.0, 20.0)));
        assert_eq!(p.stops().len(), 2);
        let white = color_handle_at(&p, 0.0);
        assert_eq!(p.handle_set().get(white).unwrap().position().x, -4.5);
    }

    #[test]
    fn opaque_policy_inserts_opaque_stops() {
        let config = PickerConfig::default().opacity(OpacityPolicy::Opaque);
        let mut p = GradientPicker::new(config, track());
        p.seed_defaults();
        let white = color_handle_at(&p, 0.0);
        let at = over(&p, white);
        press(&mut p, at, MouseButton::Right, Modifiers::default());
        p.handle_input(PickerInput::CommitAlpha(0.0));

        p.handle_input(PickerInput::DoubleClick { pos: Vec2::new(100.0, 35.0) });
        assert_eq!(p.stops()[1].color.a, 1.0);
    }

    #[test]
    fn export_uses_current_stops() {
        let p = seeded();
        assert_eq!(
            p.export(ExportFormat::Css),
            "rgba(255, 255, 255, 1.000) 0%,\nrgba(0, 0, 0, 1.000) 100%"
        );
    }
}
