#![forbid(unsafe_code)]

//! The dependency-injection container handed to page controllers.

use std::time::Duration;

use lui_core::event::Event;
use lui_core::surface::Surface;
use lui_notify::{NotificationCenter, NotificationId, NotifyConfig};
use lui_overlay::{
    AlertHandle, AlertOptions, ConfirmHandle, ConfirmOptions, Hit, LoadingHandle, LoadingOptions,
    ModalFactory, ModalRegistry,
};

/// Owns the modal registry, the dialog factory, and the notification
/// center for one page.
///
/// There are no process-wide singletons: tests build an isolated context
/// per case, production builds one per page at startup. The owner's event
/// loop forwards input through [`handle_event`](Self::handle_event) and
/// advances timers through [`tick`](Self::tick); nothing blocks.
pub struct UiContext<S: Surface> {
    modals: ModalRegistry<S>,
    factory: ModalFactory,
    notifications: NotificationCenter,
}

impl<S: Surface> UiContext<S> {
    /// Create a context driving the given surface, with default
    /// notification settings.
    pub fn new(surface: S) -> Self {
        Self::with_notify_config(surface, NotifyConfig::default())
    }

    /// Create a context with custom notification settings.
    pub fn with_notify_config(surface: S, config: NotifyConfig) -> Self {
        Self {
            modals: ModalRegistry::new(surface),
            factory: ModalFactory::new(),
            notifications: NotificationCenter::new(config),
        }
    }

    /// The modal registry.
    pub fn modals(&self) -> &ModalRegistry<S> {
        &self.modals
    }

    /// Mutable access to the modal registry.
    pub fn modals_mut(&mut self) -> &mut ModalRegistry<S> {
        &mut self.modals
    }

    /// The notification center.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Mutable access to the notification center.
    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Open a confirmation dialog.
    pub fn confirm(&mut self, opts: ConfirmOptions) -> ConfirmHandle {
        self.factory.confirm(&mut self.modals, opts)
    }

    /// Open an alert dialog.
    pub fn alert(&mut self, opts: AlertOptions) -> AlertHandle {
        self.factory.alert(&mut self.modals, opts)
    }

    /// Open a loading dialog.
    pub fn loading(&mut self, opts: LoadingOptions) -> LoadingHandle {
        self.factory.loading(&mut self.modals, opts)
    }

    /// Route an input event to the overlay layer. Returns `true` if it was
    /// consumed.
    pub fn handle_event(&mut self, event: &Event, hit: Option<&Hit>) -> bool {
        self.modals.handle_event(event, hit)
    }

    /// Advance all timers by `delta`. Returns the notifications removed
    /// this tick.
    pub fn tick(&mut self, delta: Duration) -> Vec<NotificationId> {
        self.modals.tick(delta);
        self.notifications.tick(delta)
    }
}
