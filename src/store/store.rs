//! The store: root state owner, dispatcher, and subscriber registry.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::store::action::Action;
use crate::store::error::StoreError;
use crate::store::slice::{Slice, SliceState};

/// The root state: slice name → sub-state. The key set is fixed at store
/// construction.
pub type RootState = Arc<BTreeMap<String, SliceState>>;

type Listener = Arc<dyn Fn() + Send + Sync>;

struct SubscriberEntry {
    id: u64,
    listener: Listener,
}

struct StoreInner {
    /// Registration order doubles as reduction order.
    slices: Vec<Slice>,
    state: RwLock<RootState>,
    subscribers: Mutex<Vec<SubscriberEntry>>,
    next_subscriber_id: AtomicU64,
    /// Set for the validate/reduce/commit phase of a dispatch.
    dispatching: AtomicBool,
    /// Set for the duration of a notification pass.
    notifying: AtomicBool,
}

/// Owner of the root state.
///
/// Cloning a `Store` yields a handle to the same container: both handles
/// see the same state and share subscribers.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Build a store from slices. The root state starts as each slice's
    /// initial sub-state, keyed by slice name.
    ///
    /// Fails with [`StoreError::DuplicateSliceName`] if two slices share
    /// a name.
    pub fn new(slices: impl IntoIterator<Item = Slice>) -> Result<Self, StoreError> {
        let slices: Vec<Slice> = slices.into_iter().collect();
        let mut root = BTreeMap::new();
        for slice in &slices {
            let prior = root.insert(slice.name().to_string(), slice.initial_state());
            if prior.is_some() {
                return Err(StoreError::DuplicateSliceName {
                    name: slice.name().to_string(),
                });
            }
        }
        Ok(Self {
            inner: Arc::new(StoreInner {
                slices,
                state: RwLock::new(Arc::new(root)),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber_id: AtomicU64::new(0),
                dispatching: AtomicBool::new(false),
                notifying: AtomicBool::new(false),
            }),
        })
    }

    /// Snapshot of the current root state.
    pub fn state(&self) -> RootState {
        Arc::clone(&self.inner.state.read())
    }

    /// Sub-state of a registered slice.
    ///
    /// Fails with [`StoreError::UnknownSlice`] for unregistered names.
    pub fn slice_state(&self, name: &str) -> Result<SliceState, StoreError> {
        self.state()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::UnknownSlice {
                name: name.to_string(),
            })
    }

    /// Dispatch an action through the composed root reducer and notify
    /// subscribers. Returns the action on success.
    ///
    /// Fails with [`StoreError::InvalidAction`] for an empty action type
    /// and [`StoreError::ReentrantDispatch`] when a dispatch or a
    /// notification pass is already in progress. Reducers must not call
    /// back into `dispatch`.
    pub fn dispatch(&self, action: Action) -> Result<Action, StoreError> {
        if action.kind().is_empty() {
            return Err(StoreError::InvalidAction {
                reason: "action type must be a non-empty string".to_string(),
            });
        }
        if self.inner.notifying.load(Ordering::Acquire) {
            return Err(StoreError::ReentrantDispatch);
        }
        if self
            .inner
            .dispatching
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return Err(StoreError::ReentrantDispatch);
        }

        let changed = {
            // Cleared before any listener runs, and on reducer panic.
            let _clear = scopeguard::guard(&self.inner.dispatching, |flag| {
                flag.store(false, Ordering::Release);
            });
            let prior = self.state();
            let next = self.reduce_root(&prior, &action);
            let changed = !Arc::ptr_eq(&next, &prior);
            *self.inner.state.write() = next;
            changed
        };

        debug!(kind = action.kind(), changed, "dispatch committed");
        self.notify();
        Ok(action)
    }

    /// Register a listener invoked once per committed dispatch, in
    /// registration order.
    #[must_use = "dropping the handle makes the listener impossible to remove"]
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push(SubscriberEntry {
            id,
            listener: Arc::new(listener),
        });
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn reduce_root(&self, prior: &RootState, action: &Action) -> RootState {
        let mut changed = false;
        let mut next = Vec::with_capacity(self.inner.slices.len());
        for slice in &self.inner.slices {
            let before = prior
                .get(slice.name())
                .expect("root key set fixed at construction");
            let after = slice.reduce(before, action);
            if !Arc::ptr_eq(&after, before) {
                changed = true;
            }
            next.push((slice.name().to_string(), after));
        }
        if changed {
            Arc::new(next.into_iter().collect())
        } else {
            Arc::clone(prior)
        }
    }

    fn notify(&self) {
        // Snapshot first: unsubscribes during the pass do not affect the
        // current traversal.
        let snapshot: Vec<Listener> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|entry| Arc::clone(&entry.listener))
            .collect();
        if snapshot.is_empty() {
            return;
        }

        self.inner.notifying.store(true, Ordering::Release);
        let _clear = scopeguard::guard(&self.inner.notifying, |flag| {
            flag.store(false, Ordering::Release);
        });
        trace!(listeners = snapshot.len(), "notifying subscribers");
        for listener in &snapshot {
            listener();
        }
    }

    fn unsubscribe(inner: &StoreInner, id: u64) {
        inner.subscribers.lock().retain(|entry| entry.id != id);
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("slices", &self.inner.slices.len())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle removing a registered listener.
///
/// `unsubscribe` is idempotent. The handle is `Clone` so a listener can
/// capture a handle to itself or to another listener.
#[derive(Clone)]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
    active: Arc<AtomicBool>,
}

impl Subscription {
    /// Remove the listener. Takes effect on subsequent dispatches; a
    /// notification pass already under way still runs the listener.
    pub fn unsubscribe(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            if let Some(inner) = self.store.upgrade() {
                Store::unsubscribe(&inner, self.id);
            }
        }
    }

    /// Whether the listener is still registered through this handle.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
