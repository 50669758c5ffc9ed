//! Selector bindings with change detection.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::{RootState, SliceState, Store, StoreError, Subscription};

/// Watches a projection of the root state and invokes a callback only when
/// successive projections differ.
///
/// The projection is recomputed after every committed dispatch; the
/// callback fires only when the new projection is not equal to the cached
/// one. The binding owns its store subscription.
pub struct Binding<P> {
    subscription: Subscription,
    current: Arc<Mutex<P>>,
}

impl<P: Clone + Send + 'static> Binding<P> {
    /// Bind `selector` over `store`, calling `on_change` with each new
    /// distinct projection.
    pub fn new(
        store: &Store,
        selector: impl Fn(&RootState) -> P + Send + Sync + 'static,
        on_change: impl Fn(&P) + Send + Sync + 'static,
    ) -> Self
    where
        P: PartialEq,
    {
        Self::with_compare(store, selector, |a, b| a == b, on_change)
    }

    /// Like [`Binding::new`], but with an explicit equivalence check used
    /// to decide whether the projection changed.
    pub fn with_compare(
        store: &Store,
        selector: impl Fn(&RootState) -> P + Send + Sync + 'static,
        same: impl Fn(&P, &P) -> bool + Send + Sync + 'static,
        on_change: impl Fn(&P) + Send + Sync + 'static,
    ) -> Self {
        let current = Arc::new(Mutex::new(selector(&store.state())));
        let watched = store.clone();
        let cache = Arc::clone(&current);
        let subscription = store.subscribe(move || {
            let next = selector(&watched.state());
            // The cache lock is released before the callback runs, so
            // `on_change` may read `current()`; it sees `next` already
            // in place.
            {
                let mut cached = cache.lock();
                if same(&cached, &next) {
                    return;
                }
                *cached = next.clone();
            }
            on_change(&next);
        });
        Self {
            subscription,
            current,
        }
    }

    /// The most recent projection.
    pub fn current(&self) -> P {
        self.current.lock().clone()
    }

    /// Detach from the store. Idempotent.
    pub fn unsubscribe(&self) {
        self.subscription.unsubscribe();
    }
}

/// A [`Binding`] over a single slice's sub-state, with an `Arc` pointer
/// fast path before deep equality.
pub struct SliceBinding {
    inner: Binding<SliceState>,
}

impl SliceBinding {
    /// Bind to a registered slice by name.
    ///
    /// Fails with [`StoreError::UnknownSlice`] for unregistered names.
    pub fn new(
        store: &Store,
        slice: &str,
        on_change: impl Fn(&SliceState) + Send + Sync + 'static,
    ) -> Result<Self, StoreError> {
        store.slice_state(slice)?;
        let name = slice.to_string();
        let inner = Binding::with_compare(
            store,
            move |root: &RootState| {
                root.get(&name)
                    .cloned()
                    .expect("root key set fixed at construction")
            },
            |a, b| Arc::ptr_eq(a, b) || a == b,
            on_change,
        );
        Ok(Self { inner })
    }

    /// The most recent sub-state.
    pub fn current(&self) -> SliceState {
        self.inner.current()
    }

    /// Detach from the store. Idempotent.
    pub fn unsubscribe(&self) {
        self.inner.unsubscribe();
    }
}
