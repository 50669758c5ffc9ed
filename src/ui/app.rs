//! Top-level view state for the demo TUI.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::binding::SliceBinding;
use crate::store::{Store, StoreError};
use crate::ui::slices::{DemoActions, AUTH_SLICE, COUNTER_SLICE};

/// The demo application shell.
///
/// Holds one slice binding per view. The bindings flip a shared dirty
/// flag when their projection changes; the runtime redraws only then.
pub struct App {
    actions: DemoActions,
    auth: SliceBinding,
    counter: SliceBinding,
    dirty: Arc<AtomicBool>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(store: &Store, actions: DemoActions) -> Result<Self, StoreError> {
        let dirty = Arc::new(AtomicBool::new(true));
        let auth_dirty = Arc::clone(&dirty);
        let auth = SliceBinding::new(store, AUTH_SLICE, move |_| {
            auth_dirty.store(true, Ordering::Release);
        })?;
        let counter_dirty = Arc::clone(&dirty);
        let counter = SliceBinding::new(store, COUNTER_SLICE, move |_| {
            counter_dirty.store(true, Ordering::Release);
        })?;
        Ok(Self {
            actions,
            auth,
            counter,
            dirty,
            status: None,
            should_quit: false,
        })
    }

    pub fn actions(&self) -> &DemoActions {
        &self.actions
    }

    /// Projection of the auth gate: are we past the login view?
    pub fn is_authenticated(&self) -> bool {
        self.auth
            .current()
            .get("isAuthenticated")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Projection of the counter value.
    pub fn counter(&self) -> i64 {
        self.counter
            .current()
            .get("counter")
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    /// Consume the dirty flag. True means a redraw is due.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Transient status line shown in the footer.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.mark_dirty();
    }

    pub fn clear_status(&mut self) {
        if self.status.take().is_some() {
            self.mark_dirty();
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
