//! Named-event notifier with ordered, synchronous delivery.

use arc_swap::ArcSwap;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Callback invoked with the positional arguments of a publish.
pub type Listener = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Default number of listeners per event before a leak warning is logged.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Identifier returned by [`Notifier::subscribe`].
///
/// Only needed to remove the listener again with [`Notifier::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

#[derive(Clone)]
struct Registration {
    id: ListenerId,
    once: bool,
    listener: Listener,
}

type Registry = HashMap<String, Vec<Registration>>;

/// Internal notifier state shared between clones.
struct NotifierInner {
    events: ArcSwap<Registry>,
    next_id: AtomicU64,
    max_listeners: AtomicUsize,
}

/// Synchronous publish/subscribe registry keyed by event name.
///
/// Listeners run on the publishing thread, in the order they were subscribed.
/// Publishing an event nobody listens to does nothing.
///
/// The registry lives behind an `ArcSwap`: publishes read a snapshot without
/// locking and mutations replace the map copy-on-write. Listeners added or
/// removed while a publish is running only affect later publishes.
///
/// # Examples
///
/// ```rust
/// use pathcast::notify::Notifier;
/// use serde_json::json;
///
/// let notifier = Notifier::new();
///
/// notifier.subscribe("order-soap", |args| {
///     println!("ordered {} of total: {}", args[0], args[1]);
/// });
///
/// assert!(notifier.publish("order-soap", &[json!("mysoorsandle"), json!(10)]));
/// assert!(!notifier.publish("order-pizza", &[]));
/// ```
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

impl Notifier {
    /// Create an empty notifier with the default leak warning threshold.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(NotifierInner {
                events: ArcSwap::from_pointee(HashMap::new()),
                next_id: AtomicU64::new(0),
                max_listeners: AtomicUsize::new(DEFAULT_MAX_LISTENERS),
            }),
        }
    }

    /// Set the per-event listener count above which a warning is logged.
    ///
    /// `0` disables the check.
    pub fn with_max_listeners(self, max: usize) -> Self {
        self.set_max_listeners(max);
        self
    }

    /// Change the leak warning threshold on a live notifier.
    pub fn set_max_listeners(&self, max: usize) {
        self.inner.max_listeners.store(max, Ordering::Relaxed);
    }

    /// Current leak warning threshold.
    pub fn max_listeners(&self) -> usize {
        self.inner.max_listeners.load(Ordering::Relaxed)
    }

    /// Register `listener` for `event`.
    ///
    /// The listener is invoked on every later publish of `event`, after all
    /// listeners registered before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pathcast::notify::Notifier;
    /// let notifier = Notifier::new();
    ///
    /// notifier.subscribe("order-pizza", |_| println!("Order received!"));
    /// notifier.publish("order-pizza", &[]);
    /// ```
    pub fn subscribe<F>(&self, event: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        self.register(event.into(), Arc::new(listener), false)
    }

    /// Register `listener` for a single publish of `event`.
    ///
    /// The listener is removed before it runs, so it fires exactly once even
    /// if it publishes `event` again from inside the callback or clones of the
    /// notifier publish `event` from several threads at the same time.
    pub fn subscribe_once<F>(&self, event: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        self.register(event.into(), Arc::new(listener), true)
    }

    fn register(&self, event: String, listener: Listener, once: bool) -> ListenerId {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let registration = Registration { id, once, listener };

        let previous = self.inner.events.rcu(|current| {
            let mut next = Registry::clone(current);
            next.entry(event.clone())
                .or_default()
                .push(registration.clone());
            next
        });

        let count = previous.get(&event).map_or(0, Vec::len) + 1;
        let max = self.max_listeners();
        if max > 0 && count == max + 1 {
            tracing::warn!(
                event = %event,
                count,
                max,
                "possible listener leak: more listeners than the configured maximum"
            );
        }
        tracing::trace!(event = %event, %id, once, count, "listener subscribed");

        id
    }

    /// Remove the listener with `id` from `event`.
    ///
    /// Returns `true` if the listener was registered. An event left without
    /// listeners disappears from [`event_names`](Self::event_names).
    pub fn unsubscribe(&self, event: &str, id: ListenerId) -> bool {
        let removed = !self
            .remove_where(event, |registration| registration.id == id)
            .is_empty();
        if removed {
            tracing::trace!(event, %id, "listener unsubscribed");
        }
        removed
    }

    /// Remove every listener registered for `event`.
    pub fn clear(&self, event: &str) {
        self.inner.events.rcu(|current| {
            let mut next = Registry::clone(current);
            next.remove(event);
            next
        });
    }

    /// Remove every listener for every event.
    pub fn clear_all(&self) {
        self.inner.events.store(Arc::new(HashMap::new()));
    }

    /// Invoke every listener registered for `event` with `args`.
    ///
    /// Listeners run synchronously, in registration order. Returns `false`
    /// (and does nothing else) when no listener is registered.
    ///
    /// A panicking listener is not caught; later listeners of the same publish
    /// do not run.
    pub fn publish(&self, event: &str, args: &[Value]) -> bool {
        let mut registrations = match self.inner.events.load().get(event) {
            Some(registrations) if !registrations.is_empty() => registrations.clone(),
            _ => {
                tracing::trace!(event, "publish without listeners");
                return false;
            }
        };

        if registrations.iter().any(|r| r.once) {
            let once: Vec<ListenerId> = registrations
                .iter()
                .filter(|r| r.once)
                .map(|r| r.id)
                .collect();
            // Only the publish whose update removed a once-listener may run it.
            let claimed =
                self.remove_where(event, |registration| once.contains(&registration.id));
            registrations.retain(|r| !r.once || claimed.contains(&r.id));
            if registrations.is_empty() {
                return false;
            }
        }

        tracing::debug!(
            event,
            listeners = registrations.len(),
            args = args.len(),
            "publishing event"
        );

        for registration in &registrations {
            (registration.listener)(args);
        }

        true
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner.events.load().get(event).map_or(0, Vec::len)
    }

    /// Names of all events that currently have listeners, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.events.load().keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove matching listeners of `event` and return the ids this call removed.
    ///
    /// `rcu` hands back the map its successful swap replaced, so under
    /// concurrent removals each id is reported by exactly one caller.
    fn remove_where<P>(&self, event: &str, predicate: P) -> Vec<ListenerId>
    where
        P: Fn(&Registration) -> bool,
    {
        let previous = self.inner.events.rcu(|current| {
            let mut next = Registry::clone(current);
            if let Some(registrations) = next.get_mut(event) {
                registrations.retain(|r| !predicate(r));
                if registrations.is_empty() {
                    next.remove(event);
                }
            }
            next
        });

        previous.get(event).map_or_else(Vec::new, |registrations| {
            registrations
                .iter()
                .filter(|&r| predicate(r))
                .map(|r| r.id)
                .collect()
        })
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Notifier {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = self.inner.events.load();
        let mut counts: Vec<(&str, usize)> = events
            .iter()
            .map(|(name, registrations)| (name.as_str(), registrations.len()))
            .collect();
        counts.sort();
        f.debug_struct("Notifier")
            .field("events", &counts)
            .field("max_listeners", &self.max_listeners())
            .finish()
    }
}
