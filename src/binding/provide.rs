//! Ambient store scoping.
//!
//! A store is made ambient with [`provide`], which pushes it onto a
//! thread-local stack for the duration of a closure. Nested scopes shadow
//! outer ones; the innermost store wins. This is the same scoped-default
//! model `tracing::subscriber::with_default` uses, rather than a hidden
//! global.

use std::cell::RefCell;

use crate::store::{Action, Store, StoreError};

thread_local! {
    static AMBIENT: RefCell<Vec<Store>> = const { RefCell::new(Vec::new()) };
}

/// Run `f` with `store` ambient on the current thread.
///
/// The scope is popped when `f` returns, including on unwind.
pub fn provide<R>(store: &Store, f: impl FnOnce() -> R) -> R {
    AMBIENT.with(|stack| stack.borrow_mut().push(store.clone()));
    let _pop = scopeguard::guard((), |()| {
        AMBIENT.with(|stack| {
            stack.borrow_mut().pop();
        });
    });
    f()
}

/// The innermost ambient store.
///
/// Fails with [`StoreError::NoStoreInScope`] outside any [`provide`] scope.
pub fn ambient_store() -> Result<Store, StoreError> {
    AMBIENT
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(StoreError::NoStoreInScope)
}

/// Dispatch through the ambient store.
pub fn ambient_dispatch(action: Action) -> Result<Action, StoreError> {
    ambient_store()?.dispatch(action)
}
