//! Unidirectional state container.
//!
//! This module provides the core state-container primitives:
//!
//! ```text
//! Action ──→ Root Reducer ──→ Root State ──→ Subscribers
//!    ↑                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! - **Action**: Immutable description of an intended transition
//! - **Slice**: Named bundle of sub-state, mutators, and action creators
//! - **Store**: Owner of the root state; dispatches actions and notifies
//!   subscribers after every committed transition

mod action;
mod draft;
mod error;
mod slice;
mod store;

pub use action::{Action, ActionCreator};
pub use draft::Draft;
pub use error::StoreError;
pub use slice::{Slice, SliceBuilder, SliceState};
pub use store::{RootState, Store, Subscription};
