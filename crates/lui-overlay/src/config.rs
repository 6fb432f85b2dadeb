#![forbid(unsafe_code)]

//! Modal configuration.

use std::time::Duration;

/// First z-index handed out; overlays always sit above page chrome.
pub const Z_INDEX_BASE: u32 = 2000;

/// Gap between consecutive z-index assignments, leaving room for layers a
/// renderer may want to slot in between (backdrop vs. content).
pub const Z_INDEX_STEP: u32 = 10;

/// Default open/close transition length.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Modal size class; a styling hint for renderers with no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    Fullscreen,
}

impl ModalSize {
    /// Stable lowercase name, used as a CSS class suffix by web renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Fullscreen => "fullscreen",
        }
    }
}

/// Per-modal behavior configuration.
#[derive(Debug, Clone)]
pub struct ModalConfig {
    /// Whether Escape closes the modal while it is top of stack.
    pub close_on_escape: bool,
    /// Whether clicking the backdrop (the modal root, not a descendant)
    /// closes the modal.
    pub close_on_backdrop: bool,
    /// Whether Tab cycling is confined to the modal's focusables.
    pub trap_focus: bool,
    /// Whether open/close play a transition; when false, lifecycle events
    /// fire synchronously inside `open`/`close`.
    pub animate: bool,
    /// Transition length when `animate` is set.
    pub transition: Duration,
    /// Size class hint.
    pub size: ModalSize,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            close_on_backdrop: true,
            trap_focus: true,
            animate: true,
            transition: DEFAULT_TRANSITION,
            size: ModalSize::Medium,
        }
    }
}

impl ModalConfig {
    /// Set close-on-escape behavior.
    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set close-on-backdrop behavior.
    #[must_use]
    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    /// Set focus trapping.
    #[must_use]
    pub fn trap_focus(mut self, trap: bool) -> Self {
        self.trap_focus = trap;
        self
    }

    /// Enable or disable the open/close transition.
    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set the transition length.
    #[must_use]
    pub fn transition(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    /// Set the size class.
    #[must_use]
    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ModalConfig::default();
        assert!(config.close_on_escape);
        assert!(config.close_on_backdrop);
        assert!(config.trap_focus);
        assert!(config.animate);
        assert_eq!(config.transition, DEFAULT_TRANSITION);
        assert_eq!(config.size, ModalSize::Medium);
    }

    #[test]
    fn builder_chain() {
        let config = ModalConfig::default()
            .close_on_escape(false)
            .close_on_backdrop(false)
            .trap_focus(false)
            .animate(false)
            .transition(Duration::from_millis(120))
            .size(ModalSize::Small);
        assert!(!config.close_on_escape);
        assert!(!config.close_on_backdrop);
        assert!(!config.trap_focus);
        assert!(!config.animate);
        assert_eq!(config.transition, Duration::from_millis(120));
        assert_eq!(config.size, ModalSize::Small);
    }

    #[test]
    fn size_names() {
        assert_eq!(ModalSize::Fullscreen.as_str(), "fullscreen");
        assert_eq!(ModalSize::default(), ModalSize::Medium);
    }

    #[test]
    fn z_constants() {
        assert_eq!(Z_INDEX_BASE, 2000);
        assert_eq!(Z_INDEX_STEP, 10);
    }
}
