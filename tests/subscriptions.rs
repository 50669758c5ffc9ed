mod common;

use std::sync::Arc;

use common::{demo_store, notify_log};
use parking_lot::Mutex;
use reflux::{Action, Subscription};

#[test]
fn subscribers_run_once_per_dispatch_in_registration_order() {
    let store = demo_store();
    let log = notify_log();

    let log_a = Arc::clone(&log);
    let _a = store.subscribe(move || log_a.lock().push("a".to_string()));
    let log_b = Arc::clone(&log);
    let _b = store.subscribe(move || log_b.lock().push("b".to_string()));
    let log_c = Arc::clone(&log);
    let _c = store.subscribe(move || log_c.lock().push("c".to_string()));

    store.dispatch(Action::new("counter/increase")).unwrap();
    store.dispatch(Action::new("auth/login")).unwrap();

    assert_eq!(*log.lock(), vec!["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn unsubscribed_listener_stops_running() {
    let store = demo_store();
    let log = notify_log();

    let log_in = Arc::clone(&log);
    let sub = store.subscribe(move || log_in.lock().push("x".to_string()));

    store.dispatch(Action::new("counter/increase")).unwrap();
    sub.unsubscribe();
    store.dispatch(Action::new("counter/increase")).unwrap();

    assert_eq!(log.lock().len(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn unsubscribe_is_idempotent() {
    let store = demo_store();
    let log = notify_log();
    let log_in = Arc::clone(&log);
    let sub = store.subscribe(move || log_in.lock().push("x".to_string()));

    sub.unsubscribe();
    sub.unsubscribe();
    assert!(!sub.is_active());

    store.dispatch(Action::new("counter/increase")).unwrap();
    assert!(log.lock().is_empty());
}

#[test]
fn unsubscribe_during_notify_uses_snapshot_semantics() {
    let store = demo_store();
    let log = notify_log();

    let log_a = Arc::clone(&log);
    let _a = store.subscribe(move || log_a.lock().push("a".to_string()));

    // B unsubscribes C from inside its own callback. C was snapshotted for
    // the current pass, so it still runs once.
    let c_handle: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let c_handle_in = Arc::clone(&c_handle);
    let log_b = Arc::clone(&log);
    let _b = store.subscribe(move || {
        log_b.lock().push("b".to_string());
        if let Some(c) = c_handle_in.lock().as_ref() {
            c.unsubscribe();
        }
    });

    let log_c = Arc::clone(&log);
    let c = store.subscribe(move || log_c.lock().push("c".to_string()));
    *c_handle.lock() = Some(c.clone());

    store.dispatch(Action::new("counter/increase")).unwrap();
    assert_eq!(*log.lock(), vec!["a", "b", "c"]);

    store.dispatch(Action::new("counter/increase")).unwrap();
    assert_eq!(*log.lock(), vec!["a", "b", "c", "a", "b"]);
}

#[test]
fn listener_can_unsubscribe_itself() {
    let store = demo_store();
    let log = notify_log();

    let own_handle: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let own_handle_in = Arc::clone(&own_handle);
    let log_in = Arc::clone(&log);
    let sub = store.subscribe(move || {
        log_in.lock().push("once".to_string());
        if let Some(own) = own_handle_in.lock().as_ref() {
            own.unsubscribe();
        }
    });
    *own_handle.lock() = Some(sub.clone());

    store.dispatch(Action::new("counter/increase")).unwrap();
    store.dispatch(Action::new("counter/increase")).unwrap();

    assert_eq!(log.lock().len(), 1);
}
