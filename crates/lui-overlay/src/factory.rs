#![forbid(unsafe_code)]

//! Canned dialog presets built on the registry.
//!
//! Each preset registers a uniquely named modal, opens it, and returns a
//! handle through which the deferred outcome is observed. The core is
//! synchronous and tick-driven, so handles are shared slots rather than
//! futures: `result()` stays `None` until the dialog's close transition has
//! completed, after which the modal has already unregistered itself
//! (`destroy_on_close`).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use lui_core::surface::Surface;
use lui_core::text;

use crate::config::{ModalConfig, ModalSize};
use crate::events::ModalEventKind;
use crate::modal::{Modal, ModalOutcome};
use crate::registry::ModalRegistry;

/// Severity of an alert dialog; selects an icon/color hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertSeverity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertSeverity {
    /// Icon name hint for renderers.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }
}

/// Options for [`ModalFactory::confirm`].
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_owned(),
            message: "Are you sure?".to_owned(),
            confirm_text: "Confirm".to_owned(),
            cancel_text: "Cancel".to_owned(),
        }
    }
}

impl ConfirmOptions {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the confirm-button label.
    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    /// Set the cancel-button label.
    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }
}

/// Options for [`ModalFactory::alert`].
#[derive(Debug, Clone)]
pub struct AlertOptions {
    pub title: String,
    pub message: String,
    pub button_text: String,
    pub severity: AlertSeverity,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            title: "Alert".to_owned(),
            message: String::new(),
            button_text: "OK".to_owned(),
            severity: AlertSeverity::Info,
        }
    }
}

impl AlertOptions {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the dismiss-button label.
    #[must_use]
    pub fn button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = text.into();
        self
    }

    /// Set the severity hint.
    #[must_use]
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Options for [`ModalFactory::loading`].
#[derive(Debug, Clone)]
pub struct LoadingOptions {
    pub title: String,
    pub message: String,
    pub show_progress: bool,
}

impl Default for LoadingOptions {
    fn default() -> Self {
        Self {
            title: "Loading...".to_owned(),
            message: "Please wait...".to_owned(),
            show_progress: false,
        }
    }
}

impl LoadingOptions {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Render a progress bar instead of a spinner.
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Deferred result of a confirm dialog.
#[derive(Debug, Clone)]
pub struct ConfirmHandle {
    id: String,
    options: ConfirmOptions,
    decided: Arc<Mutex<Option<bool>>>,
}

impl ConfirmHandle {
    /// Id of the underlying modal.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display options (sanitized), for the renderer.
    #[must_use]
    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }

    /// `Some(true)` once the user confirmed, `Some(false)` once the dialog
    /// was dismissed any other way, `None` while still open.
    #[must_use]
    pub fn result(&self) -> Option<bool> {
        *self.decided.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Resolve positively, as the confirm button would.
    pub fn confirm<S: Surface>(&self, registry: &mut ModalRegistry<S>) -> bool {
        registry.close(&self.id, Some(ModalOutcome::Confirmed))
    }

    /// Resolve negatively, as the cancel button would.
    pub fn cancel<S: Surface>(&self, registry: &mut ModalRegistry<S>) -> bool {
        registry.close(&self.id, Some(ModalOutcome::Dismissed))
    }
}

/// Deferred completion of an alert dialog.
#[derive(Debug, Clone)]
pub struct AlertHandle {
    id: String,
    options: AlertOptions,
    done: Arc<AtomicBool>,
}

impl AlertHandle {
    /// Id of the underlying modal.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display options (sanitized), for the renderer.
    #[must_use]
    pub fn options(&self) -> &AlertOptions {
        &self.options
    }

    /// Whether the alert has been dismissed.
    #[must_use]
    pub fn dismissed(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Dismiss programmatically, as the OK button would.
    pub fn dismiss<S: Surface>(&self, registry: &mut ModalRegistry<S>) -> bool {
        registry.close(&self.id, Some(ModalOutcome::Dismissed))
    }
}

/// Live display state of a loading dialog, readable by renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingView {
    /// Current message line.
    pub message: String,
    /// Progress percentage, when progress display was requested.
    pub progress: Option<f32>,
}

/// Handle to a loading dialog.
///
/// Loading dialogs cannot be dismissed by the user (Escape and backdrop are
/// disabled); the owning controller closes them when the awaited operation
/// settles.
#[derive(Debug, Clone)]
pub struct LoadingHandle {
    id: String,
    title: String,
    view: Arc<Mutex<LoadingView>>,
}

impl LoadingHandle {
    /// Id of the underlying modal.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Dialog title (sanitized), for the renderer.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the message and, when enabled, the progress percentage
    /// (clamped to 0–100).
    pub fn update(&self, message: &str, progress: Option<f32>) {
        let mut view = self.view.lock().unwrap_or_else(|e| e.into_inner());
        view.message = text::escape_text(message);
        if view.progress.is_some()
            && let Some(value) = progress
        {
            view.progress = Some(value.clamp(0.0, 100.0));
        }
    }

    /// Snapshot of the current display state.
    #[must_use]
    pub fn view(&self) -> LoadingView {
        self.view.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Dismiss and destroy the dialog.
    pub fn close<S: Surface>(&self, registry: &mut ModalRegistry<S>) -> bool {
        registry.close(&self.id, None)
    }
}

/// Builder of canned dialogs. One factory lives per UI context; its
/// sequence numbers keep concurrently open dialogs of the same kind apart.
#[derive(Debug, Default)]
pub struct ModalFactory {
    seq: u64,
}

impl ModalFactory {
    /// Create a factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a confirmation dialog.
    ///
    /// The returned handle resolves `true` if the confirm button was
    /// activated, `false` for any other dismissal (Escape, backdrop click,
    /// cancel button). The modal destroys itself after resolution.
    pub fn confirm<S: Surface>(
        &mut self,
        registry: &mut ModalRegistry<S>,
        opts: ConfirmOptions,
    ) -> ConfirmHandle {
        let id = format!("confirm-modal-{}", self.next_seq());
        let decided = Arc::new(Mutex::new(None));
        let options = ConfirmOptions {
            title: text::escape_text(&opts.title),
            message: text::escape_text(&opts.message),
            confirm_text: text::escape_text(&opts.confirm_text),
            cancel_text: text::escape_text(&opts.cancel_text),
        };

        let mut modal = Modal::new(&id)
            .config(ModalConfig::default().size(ModalSize::Small))
            .destroy_on_close(true);
        let slot = Arc::clone(&decided);
        modal.on(ModalEventKind::Closed, move |ctx| {
            let confirmed = ctx.outcome == Some(&ModalOutcome::Confirmed);
            *slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(confirmed);
            Ok(())
        });

        registry.register(modal);
        registry.open(&id);
        ConfirmHandle {
            id,
            options,
            decided,
        }
    }

    /// Open an alert dialog. The handle reports dismissal; severity only
    /// changes the icon/color hint.
    pub fn alert<S: Surface>(
        &mut self,
        registry: &mut ModalRegistry<S>,
        opts: AlertOptions,
    ) -> AlertHandle {
        let id = format!("alert-modal-{}", self.next_seq());
        let done = Arc::new(AtomicBool::new(false));
        let options = AlertOptions {
            title: text::escape_text(&opts.title),
            message: text::escape_text(&opts.message),
            button_text: text::escape_text(&opts.button_text),
            severity: opts.severity,
        };

        let mut modal = Modal::new(&id)
            .config(ModalConfig::default().size(ModalSize::Small))
            .destroy_on_close(true);
        let flag = Arc::clone(&done);
        modal.on(ModalEventKind::Closed, move |_| {
            flag.store(true, Ordering::Release);
            Ok(())
        });

        registry.register(modal);
        registry.open(&id);
        AlertHandle { id, options, done }
    }

    /// Open a loading dialog the user cannot dismiss.
    pub fn loading<S: Surface>(
        &mut self,
        registry: &mut ModalRegistry<S>,
        opts: LoadingOptions,
    ) -> LoadingHandle {
        let id = format!("loading-modal-{}", self.next_seq());
        let title = text::escape_text(&opts.title);
        let view = Arc::new(Mutex::new(LoadingView {
            message: text::escape_text(&opts.message),
            progress: opts.show_progress.then_some(0.0),
        }));

        let modal = Modal::new(&id)
            .config(
                ModalConfig::default()
                    .size(ModalSize::Small)
                    .close_on_escape(false)
                    .close_on_backdrop(false),
            )
            .destroy_on_close(true);

        registry.register(modal);
        registry.open(&id);
        LoadingHandle { id, title, view }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}
