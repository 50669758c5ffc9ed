//! Demo TUI: an authentication gate and a counter driven by the store.
//!
//! The views never own state. They read projections through slice
//! bindings, dispatch actions through the ambient store, and re-render
//! when a binding reports a changed projection.

pub mod app;
pub mod events;
pub mod input;
pub mod render;
pub mod runtime;
pub mod slices;
pub mod terminal_guard;
pub mod theme;
