//! Shared snackbar handle
//!
//! `Snackbar` is the single owner of the notification record. The app root
//! creates one and hands clones to whatever needs to raise or observe
//! notifications. All clones point at the same record.
//!
//! Only [`Snackbar::notify`] (and its shorthands) and [`Snackbar::dismiss`]
//! mutate the record. Consumers learn about changes either by registering
//! a subscriber or by polling [`Snackbar::revision`].

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::notification_state::{DEFAULT_TIMEOUT_MS, NotificationState, Severity};

type Callback = dyn Fn(&NotificationState);

/// Severity and timeout applied when a caller leaves them out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyDefaults {
    pub severity: Severity,
    pub timeout_ms: u64,
}

impl Default for NotifyDefaults {
    fn default() -> Self {
        Self {
            severity: Severity::Success,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

struct Inner {
    state: RefCell<NotificationState>,
    subscribers: RefCell<Vec<(u64, Rc<Callback>)>>,
    next_subscriber: Cell<u64>,
    revision: Cell<u64>,
    defaults: NotifyDefaults,
}

/// Cloneable handle to the shared notification record
#[derive(Clone)]
pub struct Snackbar {
    inner: Rc<Inner>,
}

impl Default for Snackbar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("state", &*self.inner.state.borrow())
            .field("revision", &self.inner.revision.get())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl Snackbar {
    pub fn new() -> Self {
        Self::with_defaults(NotifyDefaults::default())
    }

    pub fn with_defaults(defaults: NotifyDefaults) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(NotificationState::default()),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
                revision: Cell::new(0),
                defaults,
            }),
        }
    }

    pub fn defaults(&self) -> &NotifyDefaults {
        &self.inner.defaults
    }

    /// Borrow the live record.
    ///
    /// The borrow must be released before calling `notify` or `dismiss`.
    pub fn state(&self) -> Ref<'_, NotificationState> {
        self.inner.state.borrow()
    }

    /// Owned copy of the current record
    pub fn snapshot(&self) -> NotificationState {
        self.inner.state.borrow().clone()
    }

    /// Number of changes applied so far. Bumps once per notify and once per
    /// dismiss that actually hid the banner.
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Whether both handles share one record
    pub fn ptr_eq(a: &Snackbar, b: &Snackbar) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Show `message` with the default severity and timeout
    pub fn notify(&self, message: impl Into<String>) {
        let severity = self.inner.defaults.severity.clone();
        self.notify_with(message, severity, self.inner.defaults.timeout_ms);
    }

    /// Show `message` with an explicit severity and timeout.
    ///
    /// Any severity is accepted. A previous notification is replaced, not
    /// queued.
    pub fn notify_with(
        &self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        timeout_ms: u64,
    ) {
        let message = message.into();
        let severity = severity.into();

        #[cfg(debug_assertions)]
        log::debug!(
            "snackbar notify: severity={} timeout_ms={} message={:?}",
            severity,
            timeout_ms,
            message
        );

        self.inner
            .state
            .borrow_mut()
            .show(message, severity, timeout_ms);
        self.publish();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify_with(message, Severity::Success, self.inner.defaults.timeout_ms);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify_with(message, Severity::Error, self.inner.defaults.timeout_ms);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify_with(message, Severity::Warning, self.inner.defaults.timeout_ms);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify_with(message, Severity::Info, self.inner.defaults.timeout_ms);
    }

    /// Hide the banner. Other fields are left as they were.
    pub fn dismiss(&self) {
        let was_visible = self.inner.state.borrow_mut().hide();
        if was_visible {
            #[cfg(debug_assertions)]
            log::debug!("snackbar dismissed");
            self.publish();
        }
    }

    /// Register an observer called after every change.
    ///
    /// Dropping the returned `Subscription` unregisters it.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe(&self, callback: impl Fn(&NotificationState) + 'static) -> Subscription {
        let id = self.inner.next_subscriber.get();
        self.inner.next_subscriber.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));

        Subscription {
            id,
            owner: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .subscribers
            .borrow()
            .iter()
            .any(|(subscribed, _)| *subscribed == id)
    }

    fn publish(&self) {
        let revision = self.inner.revision.get() + 1;
        self.inner.revision.set(revision);

        let snapshot = self.snapshot();
        let callbacks: Vec<(u64, Rc<Callback>)> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in callbacks {
            // A subscriber changed the record again; the nested publish has
            // already delivered the newer state to everyone.
            if self.inner.revision.get() != revision {
                break;
            }
            // Unsubscribed by an earlier callback in this round
            if !self.is_subscribed(id) {
                continue;
            }
            callback(&snapshot);
        }
    }
}

/// Keeps a subscriber registered while alive
pub struct Subscription {
    id: u64,
    owner: Weak<Inner>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.owner.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "snackbar_tests.rs"]
mod snackbar_tests;
