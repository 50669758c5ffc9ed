//! Shared test fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use reflux::{Slice, Store};

/// Ordered log of subscriber invocations, shared with listener closures.
pub type NotifyLog = Arc<Mutex<Vec<String>>>;

pub fn notify_log() -> NotifyLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A `counter` slice matching the demo shape: `{ "counter": <n> }`.
pub fn counter_slice(initial: i64) -> Slice {
    Slice::builder("counter")
        .initial_state(json!({ "counter": initial }))
        .mutator("increase", |draft, _| {
            draft.add("counter", 1);
            None
        })
        .mutator("decrease", |draft, _| {
            draft.add("counter", -1);
            None
        })
        .build()
        .expect("mutator names are unique")
}

/// An `auth` slice matching the demo shape: `{ "isAuthenticated": <bool> }`.
pub fn auth_slice() -> Slice {
    Slice::builder("auth")
        .initial_state(json!({ "isAuthenticated": false }))
        .mutator("login", |draft, _| {
            draft.set("isAuthenticated", true);
            None
        })
        .mutator("logout", |draft, _| {
            draft.set("isAuthenticated", false);
            None
        })
        .build()
        .expect("mutator names are unique")
}

/// Store with the demo's two slices and a zeroed counter.
pub fn demo_store() -> Store {
    Store::new([counter_slice(0), auth_slice()]).expect("slice names are unique")
}
