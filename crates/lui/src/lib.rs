#![forbid(unsafe_code)]

//! LinkUp UI public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for page
//! controllers. It re-exports common types from the internal crates and
//! offers [`UiContext`], an explicitly constructed container instead of
//! module-level singletons: build one per page at startup, hand it to the
//! controllers, and drive it from the event loop via [`UiContext::tick`]
//! and [`UiContext::handle_event`].

mod context;

pub use context::UiContext;

// --- Core re-exports -------------------------------------------------------

pub use lui_core::api::ApiResult;
pub use lui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButton, PointerEvent,
    PointerEventKind,
};
pub use lui_core::surface::{FocusId, HeadlessSurface, Surface, VisualState};
pub use lui_core::{CallbackResult, text, validate};

// --- Overlay re-exports ----------------------------------------------------

pub use lui_overlay::{
    AlertHandle, AlertOptions, AlertSeverity, ConfirmHandle, ConfirmOptions, EventCtx, HandlerId,
    Hit, HitRegion, LoadingHandle, LoadingOptions, Modal, ModalConfig, ModalEventKind,
    ModalFactory, ModalOutcome, ModalPhase, ModalRegistry, ModalSize, RegistryStats,
};

// --- Notification re-exports -----------------------------------------------

pub use lui_notify::{
    ApiMessages, Notification, NotificationCenter, NotificationId, NotificationKind, NotifyConfig,
    NotifyStats, ProgressHandle, ToastOptions,
};

/// Commonly used types, for a single glob import in page controllers.
pub mod prelude {
    pub use crate::{
        ApiResult, Event, HeadlessSurface, Hit, KeyCode, KeyEvent, Modal, ModalConfig,
        ModalEventKind, ModalOutcome, NotificationKind, Surface, ToastOptions, UiContext,
    };
}
