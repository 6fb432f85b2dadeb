#![forbid(unsafe_code)]

//! Modal lifecycle events.
//!
//! Events form a closed set so the compiler enforces exhaustive handling;
//! there are no string event names. `BeforeOpen` and `BeforeClose` are
//! cancelable: a handler may call [`EventCtx::prevent_default`] to veto the
//! transition, which is normal control flow, not an error.
//!
//! Handlers are fallible; an `Err` from a handler is logged by the registry
//! and never aborts the operation that emitted the event.

use lui_core::CallbackResult;

use crate::modal::ModalOutcome;

/// The closed set of modal event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalEventKind {
    /// About to open; cancelable.
    BeforeOpen,
    /// Open transition finished.
    Opened,
    /// About to close; cancelable.
    BeforeClose,
    /// Close transition finished; carries the close outcome.
    Closed,
    /// The backdrop was clicked (emitted before the resulting close).
    BackdropClick,
    /// Escape was pressed on the top modal (emitted before the close).
    EscapeKey,
}

/// Identifier for a registered handler, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub(crate) u64);

/// Context passed to event handlers.
#[derive(Debug)]
pub struct EventCtx<'a> {
    /// Id of the modal the event belongs to.
    pub modal_id: &'a str,
    /// Which event fired.
    pub kind: ModalEventKind,
    /// Close outcome, present on `BeforeClose` and `Closed`.
    pub outcome: Option<&'a ModalOutcome>,
    prevented: bool,
}

impl<'a> EventCtx<'a> {
    pub(crate) fn new(
        modal_id: &'a str,
        kind: ModalEventKind,
        outcome: Option<&'a ModalOutcome>,
    ) -> Self {
        Self {
            modal_id,
            kind,
            outcome,
            prevented: false,
        }
    }

    /// Veto the transition. Only honored for `BeforeOpen`/`BeforeClose`.
    pub fn prevent_default(&mut self) {
        self.prevented = true;
    }

    /// Whether a handler vetoed the transition.
    #[must_use]
    pub fn is_prevented(&self) -> bool {
        self.prevented
    }
}

/// Boxed event handler.
pub(crate) type Handler = Box<dyn FnMut(&mut EventCtx<'_>) -> CallbackResult>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctx_starts_unprevented() {
        let ctx = EventCtx::new("login", ModalEventKind::BeforeOpen, None);
        assert!(!ctx.is_prevented());
        assert_eq!(ctx.modal_id, "login");
        assert_eq!(ctx.kind, ModalEventKind::BeforeOpen);
        assert!(ctx.outcome.is_none());
    }

    #[test]
    fn prevent_default_sticks() {
        let mut ctx = EventCtx::new("login", ModalEventKind::BeforeClose, None);
        ctx.prevent_default();
        assert!(ctx.is_prevented());
    }

    #[test]
    fn outcome_is_carried() {
        let outcome = ModalOutcome::Confirmed;
        let ctx = EventCtx::new("confirm-modal-1", ModalEventKind::Closed, Some(&outcome));
        assert_eq!(ctx.outcome, Some(&ModalOutcome::Confirmed));
    }
}
