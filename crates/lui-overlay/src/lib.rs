#![forbid(unsafe_code)]

//! Overlay dialogs for the LinkUp UI core.
//!
//! This crate is the single source of truth for which overlay is on screen:
//! a registry of modals with an ordered open stack, monotonic z-index
//! assignment, body-scroll locking, focus trapping, and a per-modal
//! lifecycle state machine (`Closed → Opening → Open → Closing`) advanced
//! by ticks instead of detached timers. A factory layers the canned
//! confirm / alert / loading dialogs on top.
//!
//! Rendering happens elsewhere: the registry drives a
//! [`Surface`](lui_core::surface::Surface) and never touches a rendering
//! technology directly.

pub mod config;
pub mod events;
pub mod factory;
pub mod modal;
pub mod registry;
pub mod transition;

pub use config::{ModalConfig, ModalSize, Z_INDEX_BASE, Z_INDEX_STEP};
pub use events::{EventCtx, HandlerId, ModalEventKind};
pub use factory::{
    AlertHandle, AlertOptions, AlertSeverity, ConfirmHandle, ConfirmOptions, LoadingHandle,
    LoadingOptions, LoadingView, ModalFactory,
};
pub use modal::{Modal, ModalOutcome};
pub use registry::{Hit, HitRegion, ModalRegistry, RegistryStats};
pub use transition::{ModalPhase, PhaseChange, Transition};
