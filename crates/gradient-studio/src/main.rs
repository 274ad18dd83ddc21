//! Replays a scripted editing session against a gradient picker and prints
//! the resulting stop list.
//!
//! ```text
//! gradient-studio [css|tuple]
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use gradient_picker::input::{MouseButtonState, PointerButtonEvent, PointerMoveEvent};
use gradient_picker::logging::{LoggingConfig, init_logging};
use gradient_picker::prelude::*;

const TRACK: Rect = Rect::new(10.0, 25.0, 180.0, 20.0);

/// Raw pointer events through gesture recognition into the picker, with a
/// synthetic clock.
struct Session {
    picker: GradientPicker,
    pointer: PointerState,
    now: Instant,
}

impl Session {
    fn new(picker: GradientPicker) -> Self {
        let pointer = PointerState::new(picker.config().click);
        Self { picker, pointer, now: Instant::now() }
    }

    fn feed(&mut self, ev: InputEvent) {
        if let Some(input) = self.pointer.apply_event(ev, self.now) {
            self.picker.handle_input(input);
        }
    }

    fn wait(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
    }

    fn button(&mut self, button: MouseButton, state: MouseButtonState, at: Vec2) {
        let modifiers = self.pointer.modifiers;
        self.feed(InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x: at.x,
            y: at.y,
            modifiers,
        }));
    }

    fn click(&mut self, button: MouseButton, at: Vec2) {
        self.feed(InputEvent::PointerMoved(PointerMoveEvent { x: at.x, y: at.y }));
        self.button(button, MouseButtonState::Pressed, at);
        self.wait(60);
        self.button(button, MouseButtonState::Released, at);
    }

    fn double_click(&mut self, at: Vec2) {
        self.click(MouseButton::Left, at);
        self.wait(80);
        self.click(MouseButton::Left, at);
        // Keep the next click from pairing with this one.
        self.wait(1000);
    }

    fn drag(&mut self, from: Vec2, to: Vec2, steps: u32) {
        self.feed(InputEvent::PointerMoved(PointerMoveEvent { x: from.x, y: from.y }));
        self.button(MouseButton::Left, MouseButtonState::Pressed, from);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let p = from + Vec2::new((to.x - from.x) * t, (to.y - from.y) * t);
            self.wait(16);
            self.feed(InputEvent::PointerMoved(PointerMoveEvent { x: p.x, y: p.y }));
        }
        self.button(MouseButton::Left, MouseButtonState::Released, to);
        self.wait(1000);
    }

    /// Pointer position over the center of `id`'s hit box.
    fn over(&self, id: HandleId) -> Result<Vec2> {
        let half = self.picker.config().handle_size * 0.5;
        let h = self
            .picker
            .handle_set()
            .get(id)
            .ok_or_else(|| anyhow!("handle {id} vanished"))?;
        Ok(h.position() + Vec2::new(half, half))
    }

    /// Pointer position on the track background at `fraction`.
    fn on_track(&self, fraction: f32) -> Vec2 {
        let rect = self.picker.handle_set().track().rect();
        Vec2::new(rect.left() + fraction * rect.width(), rect.top() + rect.height() * 0.5)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let format: ExportFormat = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("parsing export format argument")?,
        None => ExportFormat::default(),
    };

    let mut picker = GradientPicker::new(PickerConfig::default(), TRACK);

    let changes = Rc::new(RefCell::new(0usize));
    let counter = changes.clone();
    picker.on_change(move |change| {
        *counter.borrow_mut() += 1;
        log::trace!("{:?}: {} stops", change.kind, change.stops.len());
    });

    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = requests.clone();
    picker.on_editor_request(move |req| sink.borrow_mut().push(*req));

    picker.seed_defaults();
    let mut session = Session::new(picker);

    // Insert a stop at 30% and recolor it through the color editor.
    let at = session.on_track(0.3);
    session.double_click(at);
    let orange = session
        .picker
        .selected()
        .context("double-click on the track did not insert a stop")?;
    let pos = session.over(orange)?;
    session.click(MouseButton::Right, pos);
    let request = requests.borrow_mut().pop();
    if let Some(EditorRequest::Color { color, .. }) = request {
        log::info!("color editor opened on {orange} with {color:?}");
        session.picker.handle_input(PickerInput::CommitColor(Rgb::new(1.0, 0.55, 0.0)));
    }

    // Insert a half-transparent stop at 70%.
    let at = session.on_track(0.7);
    session.double_click(at);
    session.picker.handle_input(PickerInput::CommitAlpha(0.5));

    // Slide the orange stop to 40%.
    let from = session.over(orange)?;
    let to = from + Vec2::new(0.1 * TRACK.width(), 0.0);
    session.drag(from, to, 6);

    // Pull the black end stop off the track.
    let black = session
        .picker
        .handle_set()
        .iter()
        .filter(|h| h.kind() == HandleKind::Color)
        .max_by(|a, b| a.cmp_by_fraction(b))
        .map(|h| h.id())
        .context("no color stops left")?;
    let from = session.over(black)?;
    session.drag(from, from + Vec2::new(0.0, 40.0), 4);

    log::info!(
        "session done: {} stops after {} changes",
        session.picker.stops().len(),
        changes.borrow()
    );
    println!("{}", session.picker.export(format));
    Ok(())
}
