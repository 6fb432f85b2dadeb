#![forbid(unsafe_code)]

//! A single overlay dialog instance.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use lui_core::CallbackResult;
use lui_core::surface::FocusId;

use crate::config::ModalConfig;
use crate::events::{EventCtx, Handler, HandlerId, ModalEventKind};
use crate::transition::Transition;

/// Result carried by a closing modal into its `Closed` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// Dismissed without a decision (Escape, backdrop, cancel button).
    Dismissed,
    /// The primary action was taken.
    Confirmed,
    /// A caller-defined value.
    Custom(String),
}

/// An overlay dialog managed by the registry.
///
/// A modal is inert until registered; the registry owns all lifecycle
/// decisions and the modal carries its configuration, transition state, and
/// event handlers.
pub struct Modal {
    id: String,
    pub(crate) config: ModalConfig,
    pub(crate) transition: Transition,
    handlers: HashMap<ModalEventKind, Vec<(HandlerId, Handler)>>,
    next_handler: u64,
    /// Element that held focus before this modal opened.
    pub(crate) restore_focus: Option<FocusId>,
    /// Outcome to deliver once the close transition completes.
    pub(crate) pending_outcome: Option<ModalOutcome>,
    /// Unregister automatically once closed (factory dialogs).
    pub(crate) destroy_on_close: bool,
}

impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("id", &self.id)
            .field("phase", &self.transition.phase())
            .field("config", &self.config)
            .field("destroy_on_close", &self.destroy_on_close)
            .finish()
    }
}

impl Modal {
    /// Create a modal with the default configuration.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: ModalConfig::default(),
            transition: Transition::new(),
            handlers: HashMap::new(),
            next_handler: 0,
            restore_focus: None,
            pending_outcome: None,
            destroy_on_close: false,
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    /// Unregister automatically once the modal has closed.
    #[must_use]
    pub fn destroy_on_close(mut self, destroy: bool) -> Self {
        self.destroy_on_close = destroy;
        self
    }

    /// The modal id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register an event handler. Returns an id usable with [`off`](Self::off).
    pub fn on(
        &mut self,
        kind: ModalEventKind,
        handler: impl FnMut(&mut EventCtx<'_>) -> CallbackResult + 'static,
    ) -> HandlerId {
        self.next_handler += 1;
        let id = HandlerId(self.next_handler);
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub fn off(&mut self, handler_id: HandlerId) -> bool {
        for handlers in self.handlers.values_mut() {
            if let Some(pos) = handlers.iter().position(|(id, _)| *id == handler_id) {
                handlers.remove(pos);
                return true;
            }
        }
        false
    }

    /// Run the handlers for `kind`. Returns whether one of them vetoed the
    /// transition. Handler errors are logged and do not stop dispatch.
    pub(crate) fn emit(&mut self, kind: ModalEventKind, outcome: Option<&ModalOutcome>) -> bool {
        let id = self.id.clone();
        let mut ctx = EventCtx::new(&id, kind, outcome);
        if let Some(handlers) = self.handlers.get_mut(&kind) {
            for (_, handler) in handlers.iter_mut() {
                if let Err(err) = handler(&mut ctx) {
                    warn!(modal = %id, event = ?kind, error = %err, "modal event handler failed");
                }
            }
        }
        ctx.is_prevented()
    }
}
