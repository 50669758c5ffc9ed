//! Actions and action creators.

use serde_json::Value;

/// An immutable description of an intended state transition.
///
/// The `kind` string identifies the transition globally and follows the
/// `"<slice>/<mutator>"` convention for actions produced by a slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    kind: String,
    payload: Option<Value>,
}

impl Action {
    /// Create an action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Create an action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// The action's type string.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

/// A factory for actions bound to a `(slice, mutator)` pair.
///
/// The produced type string is a deterministic function of the pair:
/// `"<slice>/<mutator>"`.
#[derive(Debug, Clone)]
pub struct ActionCreator {
    kind: String,
}

impl ActionCreator {
    pub(crate) fn new(slice: &str, mutator: &str) -> Self {
        Self {
            kind: format!("{slice}/{mutator}"),
        }
    }

    /// The type string this creator stamps onto its actions.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Produce an action with no payload.
    pub fn create(&self) -> Action {
        Action::new(self.kind.clone())
    }

    /// Produce an action carrying a payload.
    pub fn create_with(&self, payload: Value) -> Action {
        Action::with_payload(self.kind.clone(), payload)
    }
}
