#![forbid(unsafe_code)]

//! Modal lifecycle state machine.
//!
//! State machine: `Closed → Opening → Open → Closing → Closed`.
//!
//! Rapid toggling reverses an in-flight transition instead of stacking a
//! second one: a `close` during `Opening` flips the phase and inverts the
//! progress, so the pending "opened" completion simply never happens. There
//! are no detached timers, so a stale completion can never fire after the
//! modal has been closed.
//!
//! # Invariants
//!
//! - Progress is always in `[0.0, 1.0]`.
//! - A completion (`PhaseChange`) is reported exactly once per finished
//!   transition.
//! - Zero-length transitions complete on the first tick.

use std::time::Duration;

/// Current phase of a modal's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    /// Fully closed and invisible.
    #[default]
    Closed,
    /// Playing the entrance transition.
    Opening,
    /// Fully open.
    Open,
    /// Playing the exit transition.
    Closing,
}

impl ModalPhase {
    /// Whether the modal should be rendered.
    #[inline]
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether a transition is in progress.
    #[inline]
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// A completed transition, reported by [`Transition::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// The entrance transition finished; the modal is now `Open`.
    Opened,
    /// The exit transition finished; the modal is now `Closed`.
    Closed,
}

/// Transition state for one modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    phase: ModalPhase,
    progress: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

impl Transition {
    /// A fully closed transition.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            progress: 0.0,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Raw progress through the current transition (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Start opening.
    ///
    /// No-op when already opening or open. When closing, reverses direction
    /// and preserves momentum: 30% through closing resumes at 70% open.
    pub fn start_opening(&mut self) {
        match self.phase {
            ModalPhase::Closed => {
                self.phase = ModalPhase::Opening;
                self.progress = 0.0;
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Opening;
                self.progress = 1.0 - self.progress;
            }
            ModalPhase::Opening | ModalPhase::Open => {}
        }
    }

    /// Start closing.
    ///
    /// No-op when already closing or closed. When opening, reverses
    /// direction and preserves momentum.
    pub fn start_closing(&mut self) {
        match self.phase {
            ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.progress = 0.0;
            }
            ModalPhase::Opening => {
                self.phase = ModalPhase::Closing;
                self.progress = 1.0 - self.progress;
            }
            ModalPhase::Closing | ModalPhase::Closed => {}
        }
    }

    /// Jump straight to `Open` without a transition.
    pub fn force_open(&mut self) {
        self.phase = ModalPhase::Open;
        self.progress = 1.0;
    }

    /// Jump straight to `Closed` without a transition.
    pub fn force_close(&mut self) {
        self.phase = ModalPhase::Closed;
        self.progress = 0.0;
    }

    /// Advance the transition by `delta`, with `duration` as the full
    /// transition length. Returns the completion if the phase settled.
    pub fn tick(&mut self, delta: Duration, duration: Duration) -> Option<PhaseChange> {
        if !self.phase.is_animating() {
            return None;
        }

        if duration.is_zero() {
            self.progress = 1.0;
        } else {
            self.progress += delta.as_secs_f64() / duration.as_secs_f64();
        }
        self.progress = self.progress.min(1.0);

        if self.progress < 1.0 {
            return None;
        }

        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                self.progress = 1.0;
                Some(PhaseChange::Opened)
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Closed;
                self.progress = 0.0;
                Some(PhaseChange::Closed)
            }
            ModalPhase::Open | ModalPhase::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: Duration = Duration::from_millis(300);
    const HALF: Duration = Duration::from_millis(150);

    #[test]
    fn phase_visibility() {
        assert!(!ModalPhase::Closed.is_visible());
        assert!(ModalPhase::Opening.is_visible());
        assert!(ModalPhase::Open.is_visible());
        assert!(ModalPhase::Closing.is_visible());
    }

    #[test]
    fn phase_animating() {
        assert!(ModalPhase::Opening.is_animating());
        assert!(ModalPhase::Closing.is_animating());
        assert!(!ModalPhase::Open.is_animating());
        assert!(!ModalPhase::Closed.is_animating());
    }

    #[test]
    fn open_completes_after_duration() {
        let mut t = Transition::new();
        t.start_opening();
        assert_eq!(t.tick(HALF, FULL), None);
        assert_eq!(t.phase(), ModalPhase::Opening);
        assert_eq!(t.tick(HALF, FULL), Some(PhaseChange::Opened));
        assert_eq!(t.phase(), ModalPhase::Open);
    }

    #[test]
    fn close_completes_after_duration() {
        let mut t = Transition::new();
        t.force_open();
        t.start_closing();
        assert_eq!(t.tick(FULL, FULL), Some(PhaseChange::Closed));
        assert_eq!(t.phase(), ModalPhase::Closed);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut t = Transition::new();
        t.start_opening();
        assert_eq!(t.tick(Duration::ZERO, Duration::ZERO), Some(PhaseChange::Opened));
    }

    #[test]
    fn close_during_open_reverses_with_momentum() {
        let mut t = Transition::new();
        t.start_opening();
        t.tick(HALF, FULL); // 50% open
        t.start_closing();
        assert_eq!(t.phase(), ModalPhase::Closing);
        assert!((t.progress() - 0.5).abs() < 1e-9);

        // Finishing the close never reports Opened.
        assert_eq!(t.tick(HALF, FULL), Some(PhaseChange::Closed));
    }

    #[test]
    fn reopen_during_close_reverses_with_momentum() {
        let mut t = Transition::new();
        t.force_open();
        t.start_closing();
        t.tick(Duration::from_millis(100), FULL);
        t.start_opening();
        assert_eq!(t.phase(), ModalPhase::Opening);
        assert!((t.progress() - (1.0 - 100.0 / 300.0)).abs() < 1e-9);
    }

    #[test]
    fn start_opening_when_open_is_noop() {
        let mut t = Transition::new();
        t.force_open();
        t.start_opening();
        assert_eq!(t.phase(), ModalPhase::Open);
        assert_eq!(t.tick(FULL, FULL), None);
    }

    #[test]
    fn start_closing_when_closed_is_noop() {
        let mut t = Transition::new();
        t.start_closing();
        assert_eq!(t.phase(), ModalPhase::Closed);
    }

    #[test]
    fn completion_reported_once() {
        let mut t = Transition::new();
        t.start_opening();
        assert_eq!(t.tick(FULL, FULL), Some(PhaseChange::Opened));
        assert_eq!(t.tick(FULL, FULL), None);
    }

    #[test]
    fn progress_is_clamped() {
        let mut t = Transition::new();
        t.start_opening();
        t.tick(Duration::from_secs(10), FULL);
        assert!(t.progress() <= 1.0);
    }
}
