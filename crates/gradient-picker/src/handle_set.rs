//! The observable handle collection.
//!
//! [`HandleSet`] owns every handle, keeps color/alpha pairs linked, and after
//! each mutation synchronously re-lays out the handles, rebuilds the stop
//! list and notifies listeners. Observers therefore never see a handle
//! position or stop list that lags behind the handles themselves.

use log::{debug, trace, warn};

use crate::builder::GradientBuilder;
use crate::config::OpacityPolicy;
use crate::coords::{Rect, Vec2};
use crate::error::HandleError;
use crate::handle::{Handle, HandleId, HandleKind};
use crate::paint::color::lerp;
use crate::paint::{GradientStop, Rgb};
use crate::track::Track;

/// What kind of mutation produced a [`Change`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChangeKind {
    /// A color/alpha pair was inserted.
    Added,
    /// A color/alpha pair was removed.
    Removed,
    /// A fraction or drag lift changed.
    Moved,
    /// A color or alpha value changed.
    Restyled,
    /// A link between two handles was rewritten.
    Relinked,
    /// Focus moved.
    Focus,
    /// Track geometry changed.
    Resized,
}

/// Snapshot handed to listeners after every mutation.
#[derive(Debug)]
pub struct Change<'a> {
    pub kind: ChangeKind,
    /// Freshly rebuilt stop list.
    pub stops: &'a [GradientStop],
    /// All handles with up-to-date draw positions, in insertion order.
    pub handles: &'a [Handle],
}

type Listener = Box<dyn FnMut(&Change<'_>)>;

/// Ordered collection of handles.
///
/// Insertion order is kept: it breaks fraction ties when building stops and
/// decides hit-testing, where the most recently added handle wins.
pub struct HandleSet {
    handles: Vec<Handle>,
    track: Track,
    opacity: OpacityPolicy,
    stops: Vec<GradientStop>,
    listeners: Vec<Listener>,
}

impl HandleSet {
    pub fn new(track: Track, opacity: OpacityPolicy) -> Self {
        Self {
            handles: Vec::new(),
            track,
            opacity,
            stops: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener. Listeners run in registration order, before
    /// the mutating call returns.
    pub fn on_change(&mut self, f: impl FnMut(&Change<'_>) + 'static) {
        self.listeners.push(Box::new(f));
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    #[inline]
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[inline]
    pub fn opacity_policy(&self) -> OpacityPolicy {
        self.opacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    pub fn get(&self, id: HandleId) -> Option<&Handle> {
        self.handles.iter().find(|h| h.id() == id)
    }

    pub fn focused(&self) -> Option<HandleId> {
        self.handles.iter().find(|h| h.is_focused()).map(Handle::id)
    }

    /// The linked partner of `id`, if both are in the set.
    pub fn partner(&self, id: HandleId) -> Option<HandleId> {
        self.get(id)?.linked().filter(|p| self.get(*p).is_some())
    }

    /// The color handle of the pair `id` belongs to.
    pub fn color_of(&self, id: HandleId) -> Option<HandleId> {
        self.pair_member(id, HandleKind::Color)
    }

    /// The alpha handle of the pair `id` belongs to.
    pub fn alpha_of(&self, id: HandleId) -> Option<HandleId> {
        self.pair_member(id, HandleKind::Alpha)
    }

    fn pair_member(&self, id: HandleId, kind: HandleKind) -> Option<HandleId> {
        let h = self.get(id)?;
        if h.kind() == kind {
            return Some(id);
        }
        self.partner(id).filter(|p| self.get(*p).is_some_and(|o| o.kind() == kind))
    }

    /// Topmost handle whose hit box contains `p`. Later insertions win.
    pub fn hit_test(&self, p: Vec2, handle_size: f32) -> Option<HandleId> {
        self.handles
            .iter()
            .rev()
            .find(|h| h.bounds(handle_size).contains(p))
            .map(Handle::id)
    }

    /// Opacity for a new stop at `fraction`, per the configured policy.
    ///
    /// Looks at the nearest stops strictly below and strictly above
    /// `fraction`. Unless both exist the result is fully opaque.
    pub fn opacity_at(&self, fraction: f32) -> f32 {
        let mut below: Option<(f32, f32)> = None;
        let mut above: Option<(f32, f32)> = None;

        for h in self.handles.iter().filter(|h| h.is_color()) {
            let f = h.fraction();
            let alpha = self.stop_alpha(h);
            if f < fraction && below.is_none_or(|(bf, _)| f > bf) {
                below = Some((f, alpha));
            } else if f > fraction && above.is_none_or(|(af, _)| f < af) {
                above = Some((f, alpha));
            }
        }

        match (self.opacity, below, above) {
            (OpacityPolicy::Interpolate, Some((lf, la)), Some((uf, ua))) => {
                let t = (fraction - lf) / (uf - lf);
                lerp(la, ua, t).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    fn stop_alpha(&self, color: &Handle) -> f32 {
        color
            .linked()
            .and_then(|id| self.get(id))
            .map_or(color.alpha(), Handle::alpha)
    }

    // ── structural mutations ──────────────────────────────────────────────

    /// Inserts a linked color/alpha pair at `fraction` and focuses the color
    /// handle. Returns `(color, alpha)` ids.
    ///
    /// A fraction outside `[0, 1]` is a no-op returning `None`.
    pub fn add_pair(&mut self, fraction: f32, color: Rgb) -> Option<(HandleId, HandleId)> {
        if !(0.0..=1.0).contains(&fraction) {
            debug!("add_pair: fraction {fraction} outside [0, 1], ignored");
            return None;
        }

        let alpha = self.opacity_at(fraction);

        let mut color_handle = Handle::new(HandleKind::Color, fraction, color, alpha);
        let mut alpha_handle = Handle::new_alpha(fraction, alpha);
        color_handle.set_linked(Some(alpha_handle.id()));
        alpha_handle.set_linked(Some(color_handle.id()));

        let ids = (color_handle.id(), alpha_handle.id());
        self.handles.push(alpha_handle);
        self.handles.push(color_handle);
        self.set_focus_flags(Some(ids.0));

        debug!("added pair {}/{} at {fraction:.3} alpha {alpha:.3}", ids.0, ids.1);
        self.commit(ChangeKind::Added);
        Some(ids)
    }

    /// Removes `id` and its linked partner together.
    ///
    /// Refuses to touch the set if `id` is unknown or unpaired, since either
    /// removal would leave an orphan behind.
    pub fn remove(&mut self, id: HandleId) -> Result<(), HandleError> {
        if self.get(id).is_none() {
            warn!("remove: unknown handle {id}");
            return Err(HandleError::UnknownHandle(id));
        }
        let Some(partner) = self.partner(id) else {
            warn!("remove: handle {id} is unpaired");
            return Err(HandleError::Unpaired(id));
        };

        self.handles.retain(|h| h.id() != id && h.id() != partner);
        debug!("removed pair {id}/{partner}");
        self.commit(ChangeKind::Removed);
        Ok(())
    }

    /// Links `a` and `b` symmetrically.
    ///
    /// Any previous link on either side is torn down first, so no handle is
    /// ever linked to two others. Former partners are left unlinked.
    pub fn link(&mut self, a: HandleId, b: HandleId) -> Result<(), HandleError> {
        self.check_link(a, b).inspect_err(|e| warn!("link: {e}"))?;

        for id in [a, b] {
            if let Some(old) = self.get(id).and_then(Handle::linked) {
                if let Some(h) = self.get_mut(old) {
                    h.set_linked(None);
                }
            }
        }
        if let Some(h) = self.get_mut(a) {
            h.set_linked(Some(b));
        }
        if let Some(h) = self.get_mut(b) {
            h.set_linked(Some(a));
        }

        debug!("linked {a} <-> {b}");
        self.commit(ChangeKind::Relinked);
        Ok(())
    }

    fn check_link(&self, a: HandleId, b: HandleId) -> Result<(), HandleError> {
        if a == b {
            return Err(HandleError::SelfLink(a));
        }
        let ka = self.get(a).ok_or(HandleError::UnknownHandle(a))?.kind();
        let kb = self.get(b).ok_or(HandleError::UnknownHandle(b))?.kind();
        if ka == kb {
            return Err(HandleError::KindMismatch(a, b));
        }
        Ok(())
    }

    /// Focuses `id`, or clears focus for `None`. Last write wins.
    pub fn focus(&mut self, id: Option<HandleId>) {
        self.set_focus_flags(id);
        self.commit(ChangeKind::Focus);
    }

    fn set_focus_flags(&mut self, id: Option<HandleId>) {
        for h in &mut self.handles {
            h.set_focused(Some(h.id()) == id);
        }
    }

    // ── value mutations ───────────────────────────────────────────────────

    /// Moves the pair `id` belongs to.
    ///
    /// Both handles of the pair take the new fraction. `lift` applies to the
    /// color handle only; `None` keeps the current lift.
    pub fn move_handle(
        &mut self,
        id: HandleId,
        fraction: f32,
        lift: Option<f32>,
    ) -> Result<(), HandleError> {
        let partner = self.checked_partner(id)?;
        for h in self.handles.iter_mut() {
            if h.id() == id || Some(h.id()) == partner {
                h.set_fraction(fraction);
                if let (Some(lift), HandleKind::Color) = (lift, h.kind()) {
                    h.set_lift(lift);
                }
            }
        }
        trace!("moved {id} to {fraction:.4} lift {lift:?}");
        self.commit(ChangeKind::Moved);
        Ok(())
    }

    pub fn set_fraction(&mut self, id: HandleId, fraction: f32) -> Result<(), HandleError> {
        self.move_handle(id, fraction, None)
    }

    /// Sets the drag lift of the color handle of `id`'s pair.
    pub fn set_lift(&mut self, id: HandleId, lift: f32) -> Result<(), HandleError> {
        let target = self.color_of(id).ok_or(HandleError::UnknownHandle(id))?;
        let fraction = self.get(target).map_or(0.0, Handle::fraction);
        self.move_handle(target, fraction, Some(lift))
    }

    /// Sets the stop opacity of `id`'s pair: stored on the alpha handle and
    /// cached on the color handle.
    pub fn set_alpha(&mut self, id: HandleId, alpha: f32) -> Result<(), HandleError> {
        let partner = self.checked_partner(id)?;
        for h in self.handles.iter_mut() {
            if h.id() == id || Some(h.id()) == partner {
                h.set_alpha(alpha);
            }
        }
        self.commit(ChangeKind::Restyled);
        Ok(())
    }

    /// Sets the stop color of `id`'s pair on its color handle.
    pub fn set_color(&mut self, id: HandleId, color: Rgb) -> Result<(), HandleError> {
        let target = self.color_of(id).ok_or(HandleError::UnknownHandle(id))?;
        if let Some(h) = self.get_mut(target) {
            h.set_color(color);
        }
        self.commit(ChangeKind::Restyled);
        Ok(())
    }

    /// New track geometry from the host layout.
    pub fn set_track(&mut self, rect: Rect) {
        self.track.set_rect(rect);
        self.commit(ChangeKind::Resized);
    }

    fn checked_partner(&self, id: HandleId) -> Result<Option<HandleId>, HandleError> {
        if self.get(id).is_none() {
            return Err(HandleError::UnknownHandle(id));
        }
        Ok(self.partner(id))
    }

    fn get_mut(&mut self, id: HandleId) -> Option<&mut Handle> {
        self.handles.iter_mut().find(|h| h.id() == id)
    }

    // ── recompute ─────────────────────────────────────────────────────────

    fn layout(&mut self) {
        let track = self.track;
        for h in &mut self.handles {
            h.set_position(track.position(h.kind(), h.fraction(), h.lift()));
        }
    }

    fn commit(&mut self, kind: ChangeKind) {
        self.layout();
        self.stops = GradientBuilder::build(&self.handles);

        let change = Change {
            kind,
            stops: &self.stops,
            handles: &self.handles,
        };
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}
