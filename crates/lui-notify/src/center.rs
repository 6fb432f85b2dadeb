#![forbid(unsafe_code)]

//! Notification center: tracked toasts, display cap, tick-driven expiry.
//!
//! # Invariants
//!
//! - At most `max_visible` toasts are in the `Visible` state; showing one
//!   more evicts the oldest visible toasts first (FIFO by creation order),
//!   regardless of kind.
//! - A toast leaves the tracked set only after its exit animation elapses;
//!   `hide` on an id that is already leaving or gone is a no-op.
//! - A state machine advances at most one lifecycle step per `tick`, so a
//!   manual `hide` racing an auto-hide can never remove a toast twice.
//!
//! # Failure Modes
//!
//! - Blank messages are rejected with a logged warning and `None`.
//! - Close callbacks that fail are logged and never abort removal.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use lui_core::api::ApiResult;
use lui_core::text;
use lui_core::validate::ValidationErrors;

use crate::toast::{
    EXIT_ANIMATION, Notification, NotificationId, NotificationKind, ToastOptions, ToastState,
};

/// Configuration for the notification center.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Maximum number of concurrently visible toasts.
    pub max_visible: usize,
    /// Exit-animation length applied when a toast is hidden.
    pub exit_animation: Duration,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            max_visible: 5,
            exit_animation: EXIT_ANIMATION,
        }
    }
}

impl NotifyConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visible-toast cap.
    #[must_use]
    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    /// Set the exit-animation length.
    #[must_use]
    pub fn exit_animation(mut self, duration: Duration) -> Self {
        self.exit_animation = duration;
        self
    }
}

/// Lifetime counters for monitoring and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyStats {
    /// Toasts accepted by `show`.
    pub shown: u64,
    /// `show` calls rejected for an invalid message.
    pub rejected: u64,
    /// Toasts evicted to stay under the display cap.
    pub evicted: u64,
    /// Toasts that reached their auto-hide deadline.
    pub expired: u64,
    /// Toasts hidden explicitly (`hide`, `clear_all`, `clear_loading`).
    pub dismissed: u64,
}

/// Custom messages for [`NotificationCenter::show_api_result`].
#[derive(Debug, Clone, Default)]
pub struct ApiMessages {
    /// Replaces the default success message.
    pub success: Option<String>,
    /// Replaces the result's error message.
    pub error: Option<String>,
}

impl ApiMessages {
    /// Set the success message.
    #[must_use]
    pub fn success(mut self, message: impl Into<String>) -> Self {
        self.success = Some(message.into());
        self
    }

    /// Set the error message.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum HideReason {
    Evicted,
    Expired,
    Dismissed,
}

/// Tracked-toast manager. See the module docs for invariants.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    config: NotifyConfig,
    toasts: HashMap<u64, Notification>,
    next_id: u64,
    stats: NotifyStats,
}

impl NotificationCenter {
    /// Create a center with the given configuration.
    #[must_use]
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a center with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(NotifyConfig::default())
    }

    /// Show a notification.
    ///
    /// Returns `None` (with a logged warning) if `message` is blank.
    /// Evicts the oldest visible toasts first if the display cap would be
    /// exceeded.
    pub fn show(
        &mut self,
        message: &str,
        kind: NotificationKind,
        opts: ToastOptions,
    ) -> Option<NotificationId> {
        if text::is_blank(message) {
            warn!(kind = kind.as_str(), "rejected notification with blank message");
            self.stats.rejected += 1;
            return None;
        }

        while self.active_count() >= self.config.max_visible {
            let Some(oldest) = self.oldest_visible() else {
                break;
            };
            self.begin_hide(oldest, HideReason::Evicted);
        }

        self.next_id += 1;
        let id = NotificationId::new(self.next_id);

        let remaining = if opts.persistent {
            None
        } else {
            let duration = opts.duration.unwrap_or_else(|| kind.default_duration());
            (!duration.is_zero()).then_some(duration)
        };

        self.toasts.insert(
            id.id(),
            Notification {
                id,
                message: text::escape_text(message.trim()),
                kind,
                closable: opts.closable,
                persistent: opts.persistent,
                state: ToastState::Visible { remaining },
                on_close: opts.on_close,
            },
        );
        self.stats.shown += 1;
        debug!(%id, kind = kind.as_str(), "notification shown");
        Some(id)
    }

    /// Show a success toast.
    pub fn success(&mut self, message: &str, opts: ToastOptions) -> Option<NotificationId> {
        self.show(message, NotificationKind::Success, opts)
    }

    /// Show an error toast.
    pub fn error(&mut self, message: &str, opts: ToastOptions) -> Option<NotificationId> {
        self.show(message, NotificationKind::Error, opts)
    }

    /// Show a warning toast.
    pub fn warning(&mut self, message: &str, opts: ToastOptions) -> Option<NotificationId> {
        self.show(message, NotificationKind::Warning, opts)
    }

    /// Show an info toast.
    pub fn info(&mut self, message: &str, opts: ToastOptions) -> Option<NotificationId> {
        self.show(message, NotificationKind::Info, opts)
    }

    /// Show a loading toast. Loading toasts are persistent and not
    /// user-closable; dismiss them programmatically via [`hide`](Self::hide).
    pub fn loading(&mut self, message: &str, opts: ToastOptions) -> Option<NotificationId> {
        let opts = opts.persistent(true).closable(false);
        self.show(message, NotificationKind::Loading, opts)
    }

    /// Hide a notification. A no-op if the id is unknown or the toast is
    /// already on its way out.
    pub fn hide(&mut self, id: NotificationId) {
        match self.toasts.get(&id.id()) {
            None => debug!(%id, "hide on unknown notification"),
            Some(toast) if toast.is_leaving() => {}
            Some(_) => self.begin_hide(id, HideReason::Dismissed),
        }
    }

    /// Hide every visible notification.
    pub fn clear_all(&mut self) {
        for id in self.visible_ids() {
            self.begin_hide(id, HideReason::Dismissed);
        }
    }

    /// Hide visible loading notifications only.
    pub fn clear_loading(&mut self) {
        let ids: Vec<_> = self
            .visible_ids()
            .into_iter()
            .filter(|id| {
                self.toasts
                    .get(&id.id())
                    .is_some_and(|t| t.kind() == NotificationKind::Loading)
            })
            .collect();
        for id in ids {
            self.begin_hide(id, HideReason::Dismissed);
        }
    }

    /// Advance timers by `delta`. Returns the ids removed this tick.
    ///
    /// Each toast advances at most one lifecycle step per call: visible
    /// toasts whose auto-hide deadline passes start leaving; leaving toasts
    /// whose exit animation finishes are removed and their close callbacks
    /// run.
    pub fn tick(&mut self, delta: Duration) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        let mut done = Vec::new();

        let mut ids: Vec<u64> = self.toasts.keys().copied().collect();
        ids.sort_unstable();

        for raw in ids {
            let Some(toast) = self.toasts.get_mut(&raw) else {
                continue;
            };
            match &mut toast.state {
                ToastState::Visible {
                    remaining: Some(remaining),
                } => {
                    *remaining = remaining.saturating_sub(delta);
                    if remaining.is_zero() {
                        expired.push(toast.id);
                    }
                }
                ToastState::Visible { remaining: None } => {}
                ToastState::Leaving { remaining } => {
                    *remaining = remaining.saturating_sub(delta);
                    if remaining.is_zero() {
                        done.push(toast.id);
                    }
                }
            }
        }

        for id in expired {
            self.begin_hide(id, HideReason::Expired);
        }

        for id in &done {
            if let Some(mut toast) = self.toasts.remove(&id.id()) {
                if let Some(callback) = toast.on_close.as_mut()
                    && let Err(err) = callback(toast.id)
                {
                    warn!(%id, error = %err, "notification close callback failed");
                }
                debug!(%id, "notification removed");
            }
        }

        done
    }

    /// Number of visible (non-leaving) toasts.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.toasts.values().filter(|t| !t.is_leaving()).count()
    }

    /// Number of tracked toasts including those fading out.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.toasts.len()
    }

    /// Whether an id is still tracked.
    #[must_use]
    pub fn exists(&self, id: NotificationId) -> bool {
        self.toasts.contains_key(&id.id())
    }

    /// Look up a tracked toast.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.toasts.get(&id.id())
    }

    /// Visible toasts in creation order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Notification> {
        let mut toasts: Vec<_> = self.toasts.values().filter(|t| !t.is_leaving()).collect();
        toasts.sort_by_key(|t| t.id);
        toasts
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> &NotifyStats {
        &self.stats
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Map an API call outcome to a success or error toast.
    pub fn show_api_result(
        &mut self,
        result: &ApiResult,
        messages: ApiMessages,
    ) -> Option<NotificationId> {
        if result.success {
            let message = messages
                .success
                .unwrap_or_else(|| "Operation completed successfully".to_owned());
            self.success(&message, ToastOptions::default())
        } else {
            let message = messages
                .error
                .or_else(|| result.error.clone())
                .unwrap_or_else(|| "An error occurred".to_owned());
            self.error(&message, ToastOptions::default())
        }
    }

    /// Render a bundle of field errors as one error toast.
    ///
    /// Returns `None` without showing anything when the set is empty.
    pub fn show_validation_errors(
        &mut self,
        errors: &ValidationErrors,
        title: Option<&str>,
    ) -> Option<NotificationId> {
        if errors.is_empty() {
            return None;
        }
        let title = title.unwrap_or("Please correct the following errors:");
        let mut message = title.to_owned();
        for line in errors.messages() {
            message.push_str("\n• ");
            message.push_str(line);
        }
        self.error(
            &message,
            ToastOptions::default().duration(Duration::from_millis(8000)),
        )
    }

    /// Show a loading toast and return a handle for updating it as the
    /// awaited operation progresses.
    pub fn progress(&mut self, message: &str) -> Option<ProgressHandle> {
        self.loading(message, ToastOptions::default())
            .map(|id| ProgressHandle { id })
    }

    fn visible_ids(&self) -> Vec<NotificationId> {
        let mut ids: Vec<_> = self
            .toasts
            .values()
            .filter(|t| !t.is_leaving())
            .map(|t| t.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn oldest_visible(&self) -> Option<NotificationId> {
        self.toasts
            .values()
            .filter(|t| !t.is_leaving())
            .map(|t| t.id)
            .min()
    }

    fn begin_hide(&mut self, id: NotificationId, reason: HideReason) {
        let exit = self.config.exit_animation;
        let Some(toast) = self.toasts.get_mut(&id.id()) else {
            return;
        };
        if toast.is_leaving() {
            return;
        }
        toast.state = ToastState::Leaving { remaining: exit };
        match reason {
            HideReason::Evicted => self.stats.evicted += 1,
            HideReason::Expired => self.stats.expired += 1,
            HideReason::Dismissed => self.stats.dismissed += 1,
        }
    }
}

/// Handle to a loading toast representing an in-flight operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressHandle {
    id: NotificationId,
}

impl ProgressHandle {
    /// The underlying toast id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Replace the displayed message. Returns `false` if the toast is gone.
    pub fn update(&self, center: &mut NotificationCenter, message: &str) -> bool {
        match center.toasts.get_mut(&self.id.id()) {
            Some(toast) if !toast.is_leaving() => {
                toast.message = text::escape_text(message.trim());
                true
            }
            _ => false,
        }
    }

    /// Dismiss the loading toast and show a success toast.
    pub fn complete(
        self,
        center: &mut NotificationCenter,
        message: Option<&str>,
    ) -> Option<NotificationId> {
        center.hide(self.id);
        center.success(message.unwrap_or("Complete!"), ToastOptions::default())
    }

    /// Dismiss the loading toast and show an error toast.
    pub fn fail(
        self,
        center: &mut NotificationCenter,
        message: Option<&str>,
    ) -> Option<NotificationId> {
        center.hide(self.id);
        center.error(message.unwrap_or("An error occurred"), ToastOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    const TICK: Duration = Duration::from_millis(100);

    fn drain(center: &mut NotificationCenter) {
        // Enough time to run out every auto-hide and exit animation.
        center.tick(Duration::from_secs(60));
        center.tick(Duration::from_secs(60));
    }

    #[test]
    fn show_returns_id_and_tracks() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.success("Saved", ToastOptions::default()).unwrap();
        assert!(center.exists(id));
        assert_eq!(center.active_count(), 1);
        assert_eq!(center.stats().shown, 1);
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut center = NotificationCenter::with_defaults();
        assert!(center.show("", NotificationKind::Info, ToastOptions::default()).is_none());
        assert!(center.show("   ", NotificationKind::Info, ToastOptions::default()).is_none());
        assert_eq!(center.active_count(), 0);
        assert_eq!(center.stats().rejected, 2);
    }

    #[test]
    fn message_is_sanitized() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .info("<script>alert('x')</script>", ToastOptions::default())
            .unwrap();
        let toast = center.get(id).unwrap();
        assert!(!toast.message().contains('<'));
        assert!(toast.message().starts_with("&lt;script&gt;"));
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let config = NotifyConfig::new().max_visible(3);
        let mut center = NotificationCenter::new(config);

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(
                center
                    .show(
                        "Saved",
                        NotificationKind::Success,
                        ToastOptions::default().persistent(true),
                    )
                    .unwrap(),
            );
        }

        assert_eq!(center.active_count(), 3);
        let visible: Vec<_> = center.visible().iter().map(|t| t.id()).collect();
        assert_eq!(visible, vec![ids[2], ids[3], ids[4]]);
        assert_eq!(center.stats().evicted, 2);
    }

    #[test]
    fn hide_unknown_is_noop() {
        let mut center = NotificationCenter::with_defaults();
        center.hide(NotificationId::new(42));
        assert_eq!(center.stats().dismissed, 0);
    }

    #[test]
    fn double_hide_counts_once() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.info("hi", ToastOptions::default()).unwrap();
        center.hide(id);
        center.hide(id);
        assert_eq!(center.stats().dismissed, 1);
        assert!(center.get(id).unwrap().is_leaving());
    }

    #[test]
    fn hide_after_removal_is_noop() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.info("hi", ToastOptions::default()).unwrap();
        center.hide(id);
        drain(&mut center);
        assert!(!center.exists(id));
        center.hide(id);
        assert_eq!(center.stats().dismissed, 1);
    }

    #[test]
    fn success_expires_after_five_seconds() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.success("Saved", ToastOptions::default()).unwrap();

        center.tick(Duration::from_millis(4900));
        assert_eq!(center.active_count(), 1);

        center.tick(TICK);
        assert!(center.get(id).unwrap().is_leaving());
        assert_eq!(center.stats().expired, 1);

        let removed = center.tick(EXIT_ANIMATION);
        assert_eq!(removed, vec![id]);
        assert!(!center.exists(id));
    }

    #[test]
    fn error_lives_eight_seconds() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.error("Nope", ToastOptions::default()).unwrap();
        center.tick(Duration::from_millis(7900));
        assert!(!center.get(id).unwrap().is_leaving());
        center.tick(TICK);
        assert!(center.get(id).unwrap().is_leaving());
    }

    #[test]
    fn duration_override_wins() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .info("quick", ToastOptions::default().duration(Duration::from_millis(500)))
            .unwrap();
        center.tick(Duration::from_millis(500));
        assert!(center.get(id).unwrap().is_leaving());
    }

    #[test]
    fn zero_duration_never_auto_hides() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .info("sticky", ToastOptions::default().duration(Duration::ZERO))
            .unwrap();
        center.tick(Duration::from_secs(600));
        assert!(!center.get(id).unwrap().is_leaving());
    }

    #[test]
    fn persistent_never_auto_hides() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .warning("stay", ToastOptions::default().persistent(true))
            .unwrap();
        center.tick(Duration::from_secs(600));
        assert_eq!(center.active_count(), 1);
        assert!(center.exists(id));
    }

    #[test]
    fn loading_is_persistent_and_not_closable() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.loading("Working…", ToastOptions::default()).unwrap();
        let toast = center.get(id).unwrap();
        assert!(toast.is_persistent());
        assert!(!toast.is_closable());
        center.tick(Duration::from_secs(600));
        assert!(center.exists(id));
        // Programmatic dismissal still works.
        center.hide(id);
        drain(&mut center);
        assert!(!center.exists(id));
    }

    #[test]
    fn manual_hide_then_deadline_does_not_double_remove() {
        let mut center = NotificationCenter::with_defaults();
        let id = center.success("Saved", ToastOptions::default()).unwrap();
        center.hide(id);
        // The old auto-hide deadline passing has no further effect.
        let removed = center.tick(Duration::from_millis(5000));
        assert_eq!(removed, vec![id]);
        let removed = center.tick(Duration::from_millis(5000));
        assert!(removed.is_empty());
        assert_eq!(center.stats().expired, 0);
        assert_eq!(center.stats().dismissed, 1);
    }

    #[test]
    fn on_close_runs_once_on_removal() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .info(
                "bye",
                ToastOptions::default().on_close(move |_| {
                    seen.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }),
            )
            .unwrap();
        center.hide(id);
        drain(&mut center);
        drain(&mut center);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_on_close_does_not_block_removal() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .info(
                "bye",
                ToastOptions::default().on_close(|_| Err("handler broke".into())),
            )
            .unwrap();
        center.hide(id);
        drain(&mut center);
        assert!(!center.exists(id));
    }

    #[test]
    fn clear_all_hides_everything() {
        let mut center = NotificationCenter::with_defaults();
        center.info("a", ToastOptions::default());
        center.error("b", ToastOptions::default());
        center.clear_all();
        assert_eq!(center.active_count(), 0);
        drain(&mut center);
        assert_eq!(center.tracked_count(), 0);
    }

    #[test]
    fn clear_loading_spares_other_kinds() {
        let mut center = NotificationCenter::with_defaults();
        let keep = center.info("keep", ToastOptions::default()).unwrap();
        let spin = center.loading("spin", ToastOptions::default()).unwrap();
        center.clear_loading();
        assert!(!center.get(keep).unwrap().is_leaving());
        assert!(center.get(spin).unwrap().is_leaving());
    }

    #[test]
    fn api_result_success_path() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .show_api_result(&ApiResult::ok(), ApiMessages::default())
            .unwrap();
        let toast = center.get(id).unwrap();
        assert_eq!(toast.kind(), NotificationKind::Success);
        assert_eq!(toast.message(), "Operation completed successfully");
    }

    #[test]
    fn api_result_error_uses_result_message() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .show_api_result(&ApiResult::fail("Login failed"), ApiMessages::default())
            .unwrap();
        let toast = center.get(id).unwrap();
        assert_eq!(toast.kind(), NotificationKind::Error);
        assert_eq!(toast.message(), "Login failed");
    }

    #[test]
    fn api_result_custom_messages_win() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .show_api_result(
                &ApiResult::fail("raw"),
                ApiMessages::default().error("Could not add friend"),
            )
            .unwrap();
        assert_eq!(center.get(id).unwrap().message(), "Could not add friend");
    }

    #[test]
    fn api_result_error_fallback() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .show_api_result(&ApiResult::default(), ApiMessages::default())
            .unwrap();
        assert_eq!(center.get(id).unwrap().message(), "An error occurred");
    }

    #[test]
    fn validation_errors_render_as_bulleted_error() {
        let mut center = NotificationCenter::with_defaults();
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("password", "Passwords do not match");

        let id = center.show_validation_errors(&errors, None).unwrap();
        let toast = center.get(id).unwrap();
        assert_eq!(toast.kind(), NotificationKind::Error);
        assert!(toast.message().contains("Please correct the following errors:"));
        assert!(toast.message().contains("• Email is required"));
        assert!(toast.message().contains("• Passwords do not match"));
    }

    #[test]
    fn empty_validation_errors_show_nothing() {
        let mut center = NotificationCenter::with_defaults();
        let errors = ValidationErrors::new();
        assert!(center.show_validation_errors(&errors, None).is_none());
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn progress_update_complete() {
        let mut center = NotificationCenter::with_defaults();
        let handle = center.progress("Uploading…").unwrap();
        assert!(handle.update(&mut center, "Uploading 2 of 3"));
        assert_eq!(
            center.get(handle.id()).unwrap().message(),
            "Uploading 2 of 3"
        );

        let done = handle.complete(&mut center, None).unwrap();
        assert_eq!(center.get(done).unwrap().message(), "Complete!");
        assert!(center.get(handle.id()).unwrap().is_leaving());
    }

    #[test]
    fn progress_fail_shows_error() {
        let mut center = NotificationCenter::with_defaults();
        let handle = center.progress("Saving…").unwrap();
        let id = handle.fail(&mut center, Some("Save failed")).unwrap();
        let toast = center.get(id).unwrap();
        assert_eq!(toast.kind(), NotificationKind::Error);
        assert_eq!(toast.message(), "Save failed");
    }

    #[test]
    fn progress_update_after_hide_fails() {
        let mut center = NotificationCenter::with_defaults();
        let handle = center.progress("Saving…").unwrap();
        center.hide(handle.id());
        assert!(!handle.update(&mut center, "too late"));
    }

    #[test]
    fn visible_is_creation_ordered() {
        let mut center = NotificationCenter::with_defaults();
        let a = center.info("a", ToastOptions::default()).unwrap();
        let b = center.info("b", ToastOptions::default()).unwrap();
        let ids: Vec<_> = center.visible().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn label_truncates_long_messages() {
        let mut center = NotificationCenter::with_defaults();
        let id = center
            .info("a rather long status message", ToastOptions::default())
            .unwrap();
        let toast = center.get(id).unwrap();
        assert_eq!(toast.label(8), "a rathe…");
        assert!(toast.display_width() > 8);
    }
}
