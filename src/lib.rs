//! `reflux`: a unidirectional state container driving a trivial UI.
//!
//! The core is the store pattern: actions are dispatched through a root
//! reducer composed from slice reducers, and subscribers are notified after
//! every committed transition. The `ui` module is a small demo TUI (an
//! authentication gate and a counter) wired to the store through the view
//! binding layer.

pub mod binding;
pub mod config;
pub mod store;
pub mod ui;

pub use binding::{ambient_dispatch, ambient_store, provide, Binding, SliceBinding};
pub use store::{
    Action, ActionCreator, Draft, RootState, Slice, SliceBuilder, SliceState, Store, StoreError,
    Subscription,
};
