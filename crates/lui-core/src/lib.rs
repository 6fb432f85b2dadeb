#![forbid(unsafe_code)]

//! Shared leaf crate for the LinkUp UI coordination core.
//!
//! This crate carries everything the overlay and notification layers have in
//! common but that belongs to neither: canonical input events, the
//! renderable-surface abstraction the coordination logic is written against,
//! text sanitization helpers, the generic API result shape, and client-side
//! form validation.
//!
//! Nothing here touches a rendering technology or performs I/O.

pub mod api;
pub mod event;
pub mod surface;
pub mod text;
pub mod validate;

/// Result type for user-supplied callbacks (event handlers, close hooks).
///
/// A callback error is logged by the dispatching component and never aborts
/// the operation that triggered it.
pub type CallbackResult = Result<(), Box<dyn std::error::Error>>;
