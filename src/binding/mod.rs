//! View bindings: the boundary between the store and external UI code.
//!
//! Views get three capabilities:
//!
//! - **Select**: [`Binding`] / [`SliceBinding`] watch a projection of the
//!   root state and call back only when it actually changes.
//! - **Dispatch**: forwarded to the store, same contract as
//!   [`Store::dispatch`](crate::store::Store::dispatch).
//! - **Provide**: [`provide`] makes a store ambient for a scope;
//!   [`ambient_store`] and [`ambient_dispatch`] reach it from any view
//!   depth.

mod provide;
mod select;

pub use provide::{ambient_dispatch, ambient_store, provide};
pub use select::{Binding, SliceBinding};
