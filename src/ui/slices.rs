//! Store wiring for the demo: the `auth` and `counter` slices.

use serde_json::json;

use crate::store::{ActionCreator, Slice, Store, StoreError};

pub const AUTH_SLICE: &str = "auth";
pub const COUNTER_SLICE: &str = "counter";

/// Action creators for every transition the demo views dispatch.
#[derive(Debug, Clone)]
pub struct DemoActions {
    pub login: ActionCreator,
    pub logout: ActionCreator,
    pub increase: ActionCreator,
    pub decrease: ActionCreator,
}

/// Build the demo store and its action creators.
///
/// The root state starts as
/// `{ auth: { isAuthenticated: false }, counter: { counter: <initial> } }`.
pub fn demo_setup(initial_counter: i64) -> Result<(Store, DemoActions), StoreError> {
    let auth = Slice::builder(AUTH_SLICE)
        .initial_state(json!({ "isAuthenticated": false }))
        .mutator("login", |draft, _| {
            draft.set("isAuthenticated", true);
            None
        })
        .mutator("logout", |draft, _| {
            draft.set("isAuthenticated", false);
            None
        })
        .build()?;

    let counter = Slice::builder(COUNTER_SLICE)
        .initial_state(json!({ "counter": initial_counter }))
        .mutator("increase", |draft, _| {
            draft.add("counter", 1);
            None
        })
        .mutator("decrease", |draft, _| {
            draft.add("counter", -1);
            None
        })
        .build()?;

    let actions = DemoActions {
        login: auth.action("login").expect("mutator declared above"),
        logout: auth.action("logout").expect("mutator declared above"),
        increase: counter.action("increase").expect("mutator declared above"),
        decrease: counter.action("decrease").expect("mutator declared above"),
    };

    let store = Store::new([auth, counter])?;
    Ok((store, actions))
}
