#![forbid(unsafe_code)]

//! Toast data model: ids, kinds, options, and per-toast display state.

use std::fmt;
use std::time::Duration;

use lui_core::CallbackResult;
use lui_core::text;

/// Exit-animation length applied when a toast is hidden; removal from the
/// tracked set happens once this has elapsed.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Unique identifier for a tracked notification.
///
/// Ids are monotonically increasing per center, so they double as creation
/// order for eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Notification kind; selects icon and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Progress feedback; persistent and not user-closable by default.
    Loading,
}

impl NotificationKind {
    /// Default display duration for the kind. Zero means "never auto-hide".
    #[must_use]
    pub const fn default_duration(self) -> Duration {
        match self {
            Self::Success => Duration::from_millis(5000),
            Self::Error => Duration::from_millis(8000),
            Self::Warning => Duration::from_millis(6000),
            Self::Info => Duration::from_millis(4000),
            Self::Loading => Duration::ZERO,
        }
    }

    /// Icon name hint for renderers.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
            Self::Loading => "spinner",
        }
    }

    /// Stable lowercase name, used as a CSS class suffix by web renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Loading => "loading",
        }
    }
}

/// Per-toast options supplied at `show` time.
pub struct ToastOptions {
    /// Override the kind's default duration. Zero disables auto-hide.
    pub duration: Option<Duration>,
    /// Whether the toast renders a dismiss affordance.
    pub closable: bool,
    /// Persistent toasts never auto-hide regardless of duration.
    pub persistent: bool,
    /// Invoked once when the toast has been fully removed.
    pub on_close: Option<Box<dyn FnMut(NotificationId) -> CallbackResult>>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: None,
            closable: true,
            persistent: false,
            on_close: None,
        }
    }
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("duration", &self.duration)
            .field("closable", &self.closable)
            .field("persistent", &self.persistent)
            .field("on_close", &self.on_close.as_ref().map(|_| ".."))
            .finish()
    }
}

impl ToastOptions {
    /// Override the display duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set whether the toast is user-closable.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Mark the toast persistent (no auto-hide).
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Register a close callback.
    #[must_use]
    pub fn on_close(
        mut self,
        callback: impl FnMut(NotificationId) -> CallbackResult + 'static,
    ) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

/// Display lifecycle of a tracked toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastState {
    /// On screen; `remaining` is the time until auto-hide, if any.
    Visible { remaining: Option<Duration> },
    /// Fading out; removed once `remaining` reaches zero.
    Leaving { remaining: Duration },
}

/// A tracked notification.
pub struct Notification {
    pub(crate) id: NotificationId,
    pub(crate) message: String,
    pub(crate) kind: NotificationKind,
    pub(crate) closable: bool,
    pub(crate) persistent: bool,
    pub(crate) state: ToastState,
    pub(crate) on_close: Option<Box<dyn FnMut(NotificationId) -> CallbackResult>>,
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("state", &self.state)
            .finish()
    }
}

impl Notification {
    /// The toast id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// The sanitized message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The toast kind.
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Whether the toast renders a dismiss affordance.
    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    /// Whether the toast is exempt from auto-hide.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Whether the toast is playing its exit animation.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.state, ToastState::Leaving { .. })
    }

    /// Message width in display cells, for stack sizing.
    #[must_use]
    pub fn display_width(&self) -> usize {
        text::display_width(&self.message)
    }

    /// Message truncated to `max_width` display cells for narrow containers.
    #[must_use]
    pub fn label(&self, max_width: usize) -> String {
        text::truncate_with_ellipsis(&self.message, max_width)
    }
}
