#![forbid(unsafe_code)]

//! Renderable-surface abstraction.
//!
//! The coordination layer (modal stack, z-order, focus trapping, scroll
//! locking) never touches a rendering technology directly. It manipulates a
//! [`Surface`]: a capability object the host implements on top of whatever
//! it renders with. This keeps the registry and notification logic fully
//! testable headless: [`HeadlessSurface`] records every call and is the
//! backend used by the test suites and the examples.
//!
//! # Invariants
//!
//! - A view id is an opaque string chosen by the caller; unknown views are
//!   tolerated everywhere (empty focusable lists, state writes ignored).
//! - `lock_scroll` / `restore_scroll` are edge-triggered by the caller; the
//!   surface itself keeps no lock count.

use std::collections::HashMap;

/// Identifier for a focusable element inside a surface.
pub type FocusId = u64;

/// Visual lifecycle state of a view, as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Not rendered at all.
    #[default]
    Hidden,
    /// Playing the entrance transition.
    Entering,
    /// Fully shown.
    Visible,
    /// Playing the exit transition.
    Leaving,
}

impl VisualState {
    /// Whether the renderer should draw the view in this state.
    #[inline]
    #[must_use]
    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Capability interface the coordination layer drives a renderer through.
pub trait Surface {
    /// Ordered focusable elements inside the given view.
    ///
    /// The order determines Tab cycling. Unknown views yield an empty list.
    fn focusable_elements(&self, view: &str) -> Vec<FocusId>;

    /// The element that currently holds focus, if any.
    fn focused(&self) -> Option<FocusId>;

    /// Move focus to `target`. Returns `false` if the target is unknown.
    fn set_focus(&mut self, target: FocusId) -> bool;

    /// Whether `target` is still part of a visible piece of the surface.
    fn is_focus_visible(&self, target: FocusId) -> bool;

    /// Set the visual lifecycle state of a view.
    fn set_visual_state(&mut self, view: &str, state: VisualState);

    /// Assign a stacking layer (z-index) to a view.
    fn set_layer(&mut self, view: &str, z_index: u32);

    /// Lock page scrolling and return the scroll offset to restore later.
    fn lock_scroll(&mut self) -> u32;

    /// Unlock page scrolling, restoring the previously saved offset.
    fn restore_scroll(&mut self, offset: u32);
}

#[derive(Debug, Clone, Default)]
struct ViewRecord {
    state: VisualState,
    layer: u32,
    focusables: Vec<FocusId>,
}

/// Recording in-memory surface for tests, demos, and headless hosts.
///
/// Views and page-level focus targets are declared up front; every call the
/// coordination layer makes is reflected in queryable state.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    views: HashMap<String, ViewRecord>,
    page_targets: Vec<FocusId>,
    focus: Option<FocusId>,
    scroll_offset: u32,
    scroll_locked: bool,
    lock_count: u32,
    unlock_count: u32,
}

impl HeadlessSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a view and its ordered focusable elements.
    pub fn insert_view(&mut self, view: impl Into<String>, focusables: Vec<FocusId>) {
        self.views.insert(
            view.into(),
            ViewRecord {
                focusables,
                ..ViewRecord::default()
            },
        );
    }

    /// Declare a focusable element that lives outside any view (page chrome,
    /// e.g. the button that opened a dialog).
    pub fn insert_page_target(&mut self, target: FocusId) {
        if !self.page_targets.contains(&target) {
            self.page_targets.push(target);
        }
    }

    /// Simulated page scroll offset reported by `lock_scroll`.
    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    /// Current visual state of a view (`Hidden` if never touched).
    #[must_use]
    pub fn visual_state(&self, view: &str) -> VisualState {
        self.views.get(view).map(|v| v.state).unwrap_or_default()
    }

    /// Current layer of a view (0 if never assigned).
    #[must_use]
    pub fn layer(&self, view: &str) -> u32 {
        self.views.get(view).map(|v| v.layer).unwrap_or_default()
    }

    /// Whether page scrolling is currently locked.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// How many times scrolling was locked over the surface's lifetime.
    #[must_use]
    pub fn lock_count(&self) -> u32 {
        self.lock_count
    }

    /// How many times scrolling was unlocked over the surface's lifetime.
    #[must_use]
    pub fn unlock_count(&self) -> u32 {
        self.unlock_count
    }

    /// The scroll offset as last restored.
    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    fn knows_target(&self, target: FocusId) -> bool {
        self.page_targets.contains(&target)
            || self
                .views
                .values()
                .any(|v| v.focusables.contains(&target))
    }
}

impl Surface for HeadlessSurface {
    fn focusable_elements(&self, view: &str) -> Vec<FocusId> {
        self.views
            .get(view)
            .map(|v| v.focusables.clone())
            .unwrap_or_default()
    }

    fn focused(&self) -> Option<FocusId> {
        self.focus
    }

    fn set_focus(&mut self, target: FocusId) -> bool {
        if self.knows_target(target) {
            self.focus = Some(target);
            true
        } else {
            false
        }
    }

    fn is_focus_visible(&self, target: FocusId) -> bool {
        if self.page_targets.contains(&target) {
            return true;
        }
        self.views
            .values()
            .any(|v| v.state.is_shown() && v.focusables.contains(&target))
    }

    fn set_visual_state(&mut self, view: &str, state: VisualState) {
        self.views.entry(view.to_owned()).or_default().state = state;
    }

    fn set_layer(&mut self, view: &str, z_index: u32) {
        self.views.entry(view.to_owned()).or_default().layer = z_index;
    }

    fn lock_scroll(&mut self) -> u32 {
        self.scroll_locked = true;
        self.lock_count += 1;
        self.scroll_offset
    }

    fn restore_scroll(&mut self, offset: u32) {
        self.scroll_locked = false;
        self.unlock_count += 1;
        self.scroll_offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_hidden() {
        let surface = HeadlessSurface::new();
        assert_eq!(surface.visual_state("login"), VisualState::Hidden);
        assert_eq!(surface.layer("login"), 0);
    }

    #[test]
    fn visual_state_round_trips() {
        let mut surface = HeadlessSurface::new();
        surface.set_visual_state("login", VisualState::Entering);
        assert_eq!(surface.visual_state("login"), VisualState::Entering);
        assert!(surface.visual_state("login").is_shown());
    }

    #[test]
    fn focusables_for_unknown_view_are_empty() {
        let surface = HeadlessSurface::new();
        assert!(surface.focusable_elements("nope").is_empty());
    }

    #[test]
    fn focus_only_moves_to_known_targets() {
        let mut surface = HeadlessSurface::new();
        surface.insert_view("login", vec![1, 2]);
        assert!(surface.set_focus(1));
        assert_eq!(surface.focused(), Some(1));
        assert!(!surface.set_focus(99));
        assert_eq!(surface.focused(), Some(1));
    }

    #[test]
    fn page_targets_are_always_visible() {
        let mut surface = HeadlessSurface::new();
        surface.insert_page_target(100);
        assert!(surface.is_focus_visible(100));
    }

    #[test]
    fn view_targets_visible_only_while_shown() {
        let mut surface = HeadlessSurface::new();
        surface.insert_view("login", vec![1]);
        assert!(!surface.is_focus_visible(1));
        surface.set_visual_state("login", VisualState::Visible);
        assert!(surface.is_focus_visible(1));
        surface.set_visual_state("login", VisualState::Hidden);
        assert!(!surface.is_focus_visible(1));
    }

    #[test]
    fn scroll_lock_round_trip() {
        let mut surface = HeadlessSurface::new();
        surface.set_scroll_offset(420);
        let saved = surface.lock_scroll();
        assert_eq!(saved, 420);
        assert!(surface.is_scroll_locked());
        surface.restore_scroll(saved);
        assert!(!surface.is_scroll_locked());
        assert_eq!(surface.scroll_offset(), 420);
        assert_eq!(surface.lock_count(), 1);
        assert_eq!(surface.unlock_count(), 1);
    }

    #[test]
    fn page_target_insert_is_idempotent() {
        let mut surface = HeadlessSurface::new();
        surface.insert_page_target(7);
        surface.insert_page_target(7);
        assert!(surface.is_focus_visible(7));
        assert!(surface.set_focus(7));
    }
}
