#![forbid(unsafe_code)]

//! Modal registry: the single source of truth for which overlay is on
//! screen.
//!
//! # Invariants
//!
//! - The open stack contains exactly the ids whose phase is `Opening` or
//!   `Open`; stack order is open order (top = most recent).
//! - Z-indices come from a monotonically increasing counter, so the top of
//!   the stack always has the highest layer.
//! - Body scroll is locked exactly while the stack is non-empty: locked on
//!   the empty→non-empty transition, released on non-empty→empty, never
//!   toggled per open/close.
//! - Only the top-of-stack modal receives Escape and Tab handling; a buried
//!   modal can never close out of order via the keyboard.
//!
//! # Failure Modes
//!
//! - Operating on an unregistered id logs a warning and returns `false`;
//!   nothing panics.
//! - `unregister` of an unknown id is a no-op.
//! - A vetoed `BeforeOpen`/`BeforeClose` aborts the transition and returns
//!   `false`; this is normal control flow.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use lui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, PointerButton, PointerEvent, PointerEventKind,
};
use lui_core::surface::{Surface, VisualState};

use lui_core::CallbackResult;

use crate::config::{Z_INDEX_BASE, Z_INDEX_STEP};
use crate::events::{EventCtx, HandlerId, ModalEventKind};
use crate::modal::{Modal, ModalOutcome};
use crate::transition::{ModalPhase, PhaseChange};

/// Overlay region reported by the host's hit test for a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The modal's root element (the backdrop), not a descendant.
    Backdrop,
    /// Anything inside the modal's content.
    Content,
}

/// Hit-test result the host passes alongside pointer events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// The modal the pointer landed on.
    pub view: String,
    /// Which region of it.
    pub region: HitRegion,
}

impl Hit {
    /// A hit on a modal's backdrop.
    #[must_use]
    pub fn backdrop(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            region: HitRegion::Backdrop,
        }
    }

    /// A hit on a modal's content.
    #[must_use]
    pub fn content(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            region: HitRegion::Content,
        }
    }
}

/// Registry counters for monitoring and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    /// Modals currently registered.
    pub registered: usize,
    /// Modals currently open (on the stack).
    pub open: usize,
    /// Id of the top-of-stack modal, if any.
    pub top: Option<String>,
}

/// The modal registry. See the module docs for invariants.
pub struct ModalRegistry<S: Surface> {
    surface: S,
    modals: HashMap<String, Modal>,
    /// Registration order, for deterministic tick processing.
    order: Vec<String>,
    /// Open stack, bottom to top.
    stack: Vec<String>,
    next_z: u32,
    saved_scroll: Option<u32>,
}

impl<S: Surface> ModalRegistry<S> {
    /// Create a registry driving the given surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            modals: HashMap::new(),
            order: Vec::new(),
            stack: Vec::new(),
            next_z: Z_INDEX_BASE,
            saved_scroll: None,
        }
    }

    /// The surface being driven.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Add a modal to the managed set. Re-registering an id replaces the
    /// previous instance.
    pub fn register(&mut self, modal: Modal) {
        let id = modal.id().to_owned();
        if self.modals.insert(id.clone(), modal).is_some() {
            debug!(modal = %id, "modal re-registered, replacing previous instance");
        } else {
            self.order.push(id.clone());
            debug!(modal = %id, "modal registered");
        }
    }

    /// Remove a modal from the managed set. Unknown ids are a no-op.
    ///
    /// An open modal is removed from the stack as well; if that empties the
    /// stack the scroll lock is released, keeping the lock invariant.
    pub fn unregister(&mut self, id: &str) {
        if self.modals.remove(id).is_none() {
            return;
        }
        self.order.retain(|m| m != id);
        if let Some(pos) = self.stack.iter().position(|m| m == id) {
            self.stack.remove(pos);
            self.unlock_scroll_if_idle();
        }
        self.surface.set_visual_state(id, VisualState::Hidden);
        debug!(modal = id, "modal unregistered");
    }

    /// Open a modal.
    ///
    /// Returns `true` if the modal is (or already was) open, `false` for an
    /// unknown id or a vetoed `BeforeOpen`.
    pub fn open(&mut self, id: &str) -> bool {
        if !self.modals.contains_key(id) {
            warn!(modal = id, "open on unregistered modal");
            return false;
        }
        if self.is_open(id) {
            debug!(modal = id, "modal already open");
            return true;
        }
        if self.emit(id, ModalEventKind::BeforeOpen, None) {
            debug!(modal = id, "open vetoed by handler");
            return false;
        }

        self.stack.push(id.to_owned());
        self.next_z += Z_INDEX_STEP;
        self.surface.set_layer(id, self.next_z);
        if self.stack.len() == 1 {
            let offset = self.surface.lock_scroll();
            self.saved_scroll = Some(offset);
        }

        let previous_focus = self.surface.focused();
        self.surface.set_visual_state(id, VisualState::Entering);

        let animate = {
            let Some(modal) = self.modals.get_mut(id) else {
                return false;
            };
            // Reopening mid-close keeps the restore target saved at first open.
            if modal.transition.phase() == ModalPhase::Closed {
                modal.restore_focus = previous_focus;
            }
            modal.transition.start_opening();
            if !modal.config.animate {
                modal.transition.force_open();
            }
            modal.config.animate
        };
        if !animate {
            self.finish_open(id);
        }
        debug!(modal = id, "modal opening");
        true
    }

    /// Close a modal, carrying `outcome` into its `Closed` event.
    ///
    /// Returns `true` if the modal is (or already was) closed, `false` for
    /// an unknown id or a vetoed `BeforeClose`.
    pub fn close(&mut self, id: &str, outcome: Option<ModalOutcome>) -> bool {
        if !self.modals.contains_key(id) {
            warn!(modal = id, "close on unregistered modal");
            return false;
        }
        if !self.is_open(id) {
            debug!(modal = id, "modal already closed");
            return true;
        }
        if self.emit(id, ModalEventKind::BeforeClose, outcome.as_ref()) {
            debug!(modal = id, "close vetoed by handler");
            return false;
        }

        self.stack.retain(|m| m != id);
        self.unlock_scroll_if_idle();
        self.surface.set_visual_state(id, VisualState::Leaving);

        let animate = {
            let Some(modal) = self.modals.get_mut(id) else {
                return false;
            };
            modal.pending_outcome = outcome;
            modal.transition.start_closing();
            if !modal.config.animate {
                modal.transition.force_close();
            }
            modal.config.animate
        };
        if !animate {
            self.finish_close(id);
        }
        debug!(modal = id, "modal closing");
        true
    }

    /// Close every open modal, top-down.
    pub fn close_all(&mut self) {
        let ids: Vec<String> = self.stack.iter().rev().cloned().collect();
        for id in ids {
            self.close(&id, None);
        }
    }

    /// Immediate teardown: remove the modal without transition or events.
    ///
    /// Unknown ids are a no-op. Factory dialogs use `destroy_on_close`
    /// instead, which runs the full close lifecycle first.
    pub fn destroy(&mut self, id: &str) {
        if !self.modals.contains_key(id) {
            return;
        }
        if self.is_open(id) {
            self.stack.retain(|m| m != id);
            self.unlock_scroll_if_idle();
        }
        self.surface.set_visual_state(id, VisualState::Hidden);
        self.modals.remove(id);
        self.order.retain(|m| m != id);
        debug!(modal = id, "modal destroyed");
    }

    /// Advance all in-flight transitions by `delta`, completing lifecycle
    /// steps whose time has come.
    pub fn tick(&mut self, delta: Duration) {
        let ids = self.order.clone();
        for id in ids {
            let change = {
                let Some(modal) = self.modals.get_mut(&id) else {
                    continue;
                };
                let duration = modal.config.transition;
                modal.transition.tick(delta, duration)
            };
            match change {
                Some(PhaseChange::Opened) => self.finish_open(&id),
                Some(PhaseChange::Closed) => self.finish_close(&id),
                None => {}
            }
        }
    }

    /// Route an input event. Returns `true` if the overlay layer consumed it.
    pub fn handle_event(&mut self, event: &Event, hit: Option<&Hit>) -> bool {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_escape(),
            Event::Key(
                key @ KeyEvent {
                    code: KeyCode::Tab,
                    kind: KeyEventKind::Press,
                    ..
                },
            ) => self.handle_tab(key.shift()),
            Event::Key(KeyEvent {
                code: KeyCode::BackTab,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_tab(true),
            Event::Pointer(PointerEvent {
                kind: PointerEventKind::Down,
                button: PointerButton::Primary,
                ..
            }) => self.handle_backdrop_click(hit),
            _ => false,
        }
    }

    /// Whether a modal is currently open (on the stack).
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.stack.iter().any(|m| m == id)
    }

    /// The open stack, bottom to top.
    #[must_use]
    pub fn open_ids(&self) -> &[String] {
        &self.stack
    }

    /// Id of the top-of-stack modal.
    #[must_use]
    pub fn top_id(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Lifecycle phase of a modal, if registered.
    #[must_use]
    pub fn phase(&self, id: &str) -> Option<ModalPhase> {
        self.modals.get(id).map(|m| m.transition.phase())
    }

    /// Registry counters.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            registered: self.modals.len(),
            open: self.stack.len(),
            top: self.stack.last().cloned(),
        }
    }

    /// Register an event handler on a modal. Returns `None` (with a logged
    /// warning) for unknown ids.
    pub fn on(
        &mut self,
        id: &str,
        kind: ModalEventKind,
        handler: impl FnMut(&mut EventCtx<'_>) -> CallbackResult + 'static,
    ) -> Option<HandlerId> {
        match self.modals.get_mut(id) {
            Some(modal) => Some(modal.on(kind, handler)),
            None => {
                warn!(modal = id, "handler registration on unregistered modal");
                None
            }
        }
    }

    /// Remove a previously registered handler.
    pub fn off(&mut self, id: &str, handler_id: HandlerId) -> bool {
        self.modals
            .get_mut(id)
            .is_some_and(|m| m.off(handler_id))
    }

    // --- Internal ---

    fn emit(&mut self, id: &str, kind: ModalEventKind, outcome: Option<&ModalOutcome>) -> bool {
        match self.modals.get_mut(id) {
            Some(modal) => modal.emit(kind, outcome),
            None => false,
        }
    }

    fn finish_open(&mut self, id: &str) {
        self.surface.set_visual_state(id, VisualState::Visible);
        self.emit(id, ModalEventKind::Opened, None);
        let focusables = self.surface.focusable_elements(id);
        if let Some(&first) = focusables.first() {
            self.surface.set_focus(first);
        }
    }

    fn finish_close(&mut self, id: &str) {
        self.surface.set_visual_state(id, VisualState::Hidden);

        let restore = self.modals.get_mut(id).and_then(|m| m.restore_focus.take());
        if let Some(target) = restore
            && self.surface.is_focus_visible(target)
        {
            self.surface.set_focus(target);
        }

        let outcome = self
            .modals
            .get_mut(id)
            .and_then(|m| m.pending_outcome.take());
        self.emit(id, ModalEventKind::Closed, outcome.as_ref());

        if self.modals.get(id).is_some_and(|m| m.destroy_on_close) {
            self.modals.remove(id);
            self.order.retain(|m| m != id);
            debug!(modal = id, "modal destroyed after close");
        }
    }

    fn handle_escape(&mut self) -> bool {
        let Some(top) = self.stack.last().cloned() else {
            return false;
        };
        if !self
            .modals
            .get(&top)
            .is_some_and(|m| m.config.close_on_escape)
        {
            return false;
        }
        self.emit(&top, ModalEventKind::EscapeKey, None);
        self.close(&top, Some(ModalOutcome::Dismissed))
    }

    fn handle_backdrop_click(&mut self, hit: Option<&Hit>) -> bool {
        let Some(hit) = hit else {
            return false;
        };
        if hit.region != HitRegion::Backdrop {
            return false;
        }
        let id = hit.view.clone();
        if !self.is_open(&id) {
            return false;
        }
        if !self
            .modals
            .get(&id)
            .is_some_and(|m| m.config.close_on_backdrop)
        {
            return false;
        }
        self.emit(&id, ModalEventKind::BackdropClick, None);
        self.close(&id, Some(ModalOutcome::Dismissed))
    }

    fn handle_tab(&mut self, backward: bool) -> bool {
        let Some(top) = self.stack.last().cloned() else {
            return false;
        };
        if !self.modals.get(&top).is_some_and(|m| m.config.trap_focus) {
            return false;
        }

        let focusables = self.surface.focusable_elements(&top);
        if focusables.is_empty() {
            // Swallow the press; focus must not escape the modal.
            return true;
        }

        let current = self
            .surface
            .focused()
            .and_then(|f| focusables.iter().position(|&t| t == f));
        let next = match (current, backward) {
            (Some(i), false) => {
                if i + 1 >= focusables.len() {
                    0
                } else {
                    i + 1
                }
            }
            (Some(i), true) => {
                if i == 0 {
                    focusables.len() - 1
                } else {
                    i - 1
                }
            }
            (None, false) => 0,
            (None, true) => focusables.len() - 1,
        };
        self.surface.set_focus(focusables[next]);
        true
    }

    fn unlock_scroll_if_idle(&mut self) {
        if self.stack.is_empty()
            && let Some(offset) = self.saved_scroll.take()
        {
            self.surface.restore_scroll(offset);
        }
    }
}
