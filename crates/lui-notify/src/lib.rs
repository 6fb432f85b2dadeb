#![forbid(unsafe_code)]

//! Toast notification center for the LinkUp UI core.
//!
//! The center tracks short-lived, non-blocking feedback messages: a mapping
//! from id to toast, a display cap with oldest-first eviction, per-kind
//! default durations, and tick-driven auto-hide and exit-animation
//! processing. Nothing here blocks; the owner advances time by calling
//! [`NotificationCenter::tick`] from its event loop.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use lui_notify::{NotificationCenter, ToastOptions};
//!
//! let mut center = NotificationCenter::with_defaults();
//! let id = center.success("Friend request sent!", ToastOptions::default());
//! assert!(id.is_some());
//!
//! // In the event loop: advance timers, collect removed toasts.
//! let removed = center.tick(Duration::from_secs(6));
//! assert_eq!(center.active_count(), 0);
//! assert!(removed.is_empty()); // still fading out
//! ```

pub mod center;
pub mod toast;

pub use center::{ApiMessages, NotificationCenter, NotifyConfig, NotifyStats, ProgressHandle};
pub use toast::{
    EXIT_ANIMATION, Notification, NotificationId, NotificationKind, ToastOptions,
};
