mod common;

use std::sync::Arc;

use common::{auth_slice, counter_slice, demo_store, notify_log};
use parking_lot::Mutex;
use reflux::{Action, Store, StoreError};
use serde_json::json;

#[test]
fn dispatch_echoes_the_action() {
    let store = demo_store();
    let action = Action::new("counter/increase");
    let echoed = store.dispatch(action.clone()).expect("valid action");
    assert_eq!(echoed, action);
}

#[test]
fn empty_action_kind_is_invalid() {
    let store = demo_store();
    assert!(matches!(
        store.dispatch(Action::new("")),
        Err(StoreError::InvalidAction { .. })
    ));
}

#[test]
fn state_equals_left_fold_of_slice_reducers() {
    let counter = counter_slice(0);
    let auth = auth_slice();
    let store = Store::new([counter.clone(), auth.clone()]).expect("unique slice names");

    let sequence = [
        Action::new("counter/increase"),
        Action::new("auth/login"),
        Action::new("counter/increase"),
        Action::new("noop"),
        Action::new("counter/decrease"),
    ];

    let mut folded_counter = counter.initial_state();
    let mut folded_auth = auth.initial_state();
    for action in &sequence {
        folded_counter = counter.reduce(&folded_counter, action);
        folded_auth = auth.reduce(&folded_auth, action);
        store.dispatch(action.clone()).expect("valid action");
    }

    let root = store.state();
    assert_eq!(root["counter"], folded_counter);
    assert_eq!(root["auth"], folded_auth);
}

#[test]
fn unknown_action_preserves_root_identity_but_notifies() {
    let store = demo_store();
    let log = notify_log();
    let log_in = Arc::clone(&log);
    let _sub = store.subscribe(move || log_in.lock().push("notified".to_string()));

    let before = store.state();
    store.dispatch(Action::new("noop")).expect("valid action");
    let after = store.state();

    assert!(Arc::ptr_eq(&before, &after));
    // The transition committed, so subscribers hear about it.
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn untouched_slice_keeps_its_state_reference() {
    let store = demo_store();
    let auth_before = store.slice_state("auth").expect("registered");

    store
        .dispatch(Action::new("counter/increase"))
        .expect("valid action");

    let auth_after = store.slice_state("auth").expect("registered");
    assert!(Arc::ptr_eq(&auth_before, &auth_after));

    let counter = store.slice_state("counter").expect("registered");
    assert_eq!(*counter, json!({ "counter": 1 }));
}

#[test]
fn dispatch_from_reducer_is_rejected() {
    let seen = Arc::new(Mutex::new(None));
    let seen_in = Arc::clone(&seen);
    let store_cell: Arc<Mutex<Option<Store>>> = Arc::new(Mutex::new(None));
    let store_in = Arc::clone(&store_cell);

    let slice = reflux::Slice::builder("evil")
        .initial_state(json!({ "n": 0 }))
        .mutator("reenter", move |_, _| {
            let store = store_in.lock().clone().expect("store registered");
            *seen_in.lock() = Some(store.dispatch(Action::new("evil/reenter")));
            None
        })
        .build()
        .expect("unique mutator names");

    let store = Store::new([slice]).expect("unique slice names");
    *store_cell.lock() = Some(store.clone());

    let before = store.state();
    store
        .dispatch(Action::new("evil/reenter"))
        .expect("outer dispatch commits");

    assert!(matches!(
        seen.lock().take(),
        Some(Err(StoreError::ReentrantDispatch))
    ));
    // The inner rejection left the outer transition alone: the mutator
    // wrote nothing, so the root is unchanged by identity.
    assert!(Arc::ptr_eq(&before, &store.state()));
}

#[test]
fn dispatch_from_subscriber_is_rejected() {
    let store = demo_store();
    let seen = Arc::new(Mutex::new(None));
    let seen_in = Arc::clone(&seen);
    let store_in = store.clone();
    let _sub = store.subscribe(move || {
        *seen_in.lock() = Some(store_in.dispatch(Action::new("counter/increase")));
    });

    store
        .dispatch(Action::new("counter/increase"))
        .expect("valid action");

    assert!(matches!(
        seen.lock().take(),
        Some(Err(StoreError::ReentrantDispatch))
    ));
    // Only the outer transition happened.
    assert_eq!(*store.slice_state("counter").unwrap(), json!({ "counter": 1 }));
}

#[test]
fn store_recovers_after_rejected_dispatches() {
    let store = demo_store();
    store.dispatch(Action::new("")).unwrap_err();
    store
        .dispatch(Action::new("counter/increase"))
        .expect("store still usable");
    assert_eq!(*store.slice_state("counter").unwrap(), json!({ "counter": 1 }));
}
