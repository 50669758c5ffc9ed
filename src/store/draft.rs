//! Copy-on-write draft over a sub-state value.

use std::sync::Arc;

use serde_json::Value;

/// A recording wrapper that lets mutators write "in place" without ever
/// touching the prior state.
///
/// Reads go against the prior value until the first write, which clones the
/// underlying [`Value`] into a private copy. Every write marks the draft
/// dirty, including writes that store a value equal to the current one:
/// a touched draft always materializes a fresh next state.
pub struct Draft {
    base: Arc<Value>,
    copy: Option<Value>,
    dirty: bool,
}

impl Draft {
    pub(crate) fn new(base: Arc<Value>) -> Self {
        Self {
            base,
            copy: None,
            dirty: false,
        }
    }

    /// The current value of the draft (the private copy once written).
    pub fn value(&self) -> &Value {
        self.copy.as_ref().unwrap_or(&self.base)
    }

    /// Read an object field. Returns `None` for missing fields and for
    /// non-object drafts.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value().get(key)
    }

    /// Write an object field.
    ///
    /// A non-object draft is promoted to an empty object first, mirroring
    /// how mutators treat their sub-state as a plain mapping.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let target = self.value_mut();
        if !target.is_object() {
            *target = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = target {
            map.insert(key.to_string(), value.into());
        }
    }

    /// Remove an object field, returning the removed value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let target = self.value_mut();
        match target {
            Value::Object(map) => map.remove(key),
            _ => None,
        }
    }

    /// Add `delta` to a numeric object field. Missing or non-numeric fields
    /// are treated as zero; the sum saturates at the `i64` bounds.
    pub fn add(&mut self, key: &str, delta: i64) {
        let current = self.get(key).and_then(Value::as_i64).unwrap_or(0);
        self.set(key, current.saturating_add(delta));
    }

    /// Mutable access to the whole draft value. Marks the draft dirty.
    pub fn value_mut(&mut self) -> &mut Value {
        self.dirty = true;
        self.copy.get_or_insert_with(|| Value::clone(&self.base))
    }

    /// Whether any write occurred.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the draft, yielding the next state iff any write occurred.
    pub(crate) fn finish(self) -> Option<Value> {
        if self.dirty {
            self.copy
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft_of(value: Value) -> Draft {
        Draft::new(Arc::new(value))
    }

    #[test]
    fn reads_do_not_dirty() {
        let draft = draft_of(json!({ "counter": 3 }));
        assert_eq!(draft.get("counter"), Some(&json!(3)));
        assert!(!draft.is_dirty());
        assert!(draft.finish().is_none());
    }

    #[test]
    fn write_clones_and_preserves_base() {
        let base = Arc::new(json!({ "counter": 0 }));
        let mut draft = Draft::new(Arc::clone(&base));
        draft.set("counter", 1);
        assert_eq!(draft.finish(), Some(json!({ "counter": 1 })));
        assert_eq!(*base, json!({ "counter": 0 }));
    }

    #[test]
    fn equal_value_write_still_dirties() {
        let mut draft = draft_of(json!({ "flag": true }));
        draft.set("flag", true);
        assert!(draft.is_dirty());
        assert_eq!(draft.finish(), Some(json!({ "flag": true })));
    }

    #[test]
    fn add_treats_missing_field_as_zero() {
        let mut draft = draft_of(json!({}));
        draft.add("counter", -1);
        assert_eq!(draft.finish(), Some(json!({ "counter": -1 })));
    }

    #[test]
    fn add_saturates_at_i64_bounds() {
        let mut draft = draft_of(json!({ "counter": i64::MAX }));
        draft.add("counter", 1);
        assert_eq!(draft.get("counter"), Some(&json!(i64::MAX)));

        let mut draft = draft_of(json!({ "counter": i64::MIN }));
        draft.add("counter", -1);
        assert_eq!(draft.get("counter"), Some(&json!(i64::MIN)));
    }

    #[test]
    fn set_promotes_non_object_draft() {
        let mut draft = draft_of(Value::Null);
        draft.set("ready", false);
        assert_eq!(draft.finish(), Some(json!({ "ready": false })));
    }

    #[test]
    fn remove_returns_prior_field() {
        let mut draft = draft_of(json!({ "token": "abc" }));
        assert_eq!(draft.remove("token"), Some(json!("abc")));
        assert_eq!(draft.finish(), Some(json!({})));
    }
}
