//! Slices: named bundles of sub-state, mutators, and action creators.

use std::sync::Arc;

use serde_json::Value;

use crate::store::action::{Action, ActionCreator};
use crate::store::draft::Draft;
use crate::store::error::StoreError;

/// A slice's sub-state. Reference identity (`Arc::ptr_eq`) marks "unchanged".
pub type SliceState = Arc<Value>;

/// A mutator authored in either style: write through the [`Draft`] and
/// return `None`, or return `Some(next)` explicitly. A returned value wins
/// over the draft.
type MutatorFn = dyn Fn(&mut Draft, &Action) -> Option<Value> + Send + Sync;

struct MutatorEntry {
    name: String,
    /// Precomposed `"<slice>/<mutator>"` action type.
    kind: String,
    run: Box<MutatorFn>,
}

struct SliceInner {
    name: String,
    initial_state: SliceState,
    mutators: Vec<MutatorEntry>,
}

/// A named bundle owning a sub-state and its labeled mutators.
///
/// Cloning a `Slice` is cheap and yields a handle to the same definition,
/// so a slice can both hand out action creators and be moved into a store.
#[derive(Clone)]
pub struct Slice {
    inner: Arc<SliceInner>,
}

impl Slice {
    /// Start defining a slice with the given name.
    pub fn builder(name: impl Into<String>) -> SliceBuilder {
        SliceBuilder {
            name: name.into(),
            initial_state: Value::Null,
            mutators: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The sub-state used on the store's first sight of this slice.
    pub fn initial_state(&self) -> SliceState {
        Arc::clone(&self.inner.initial_state)
    }

    /// Action creator for a declared mutator, by name.
    pub fn action(&self, mutator: &str) -> Option<ActionCreator> {
        self.inner
            .mutators
            .iter()
            .find(|m| m.name == mutator)
            .map(|m| ActionCreator::new(&self.inner.name, &m.name))
    }

    /// Declared mutator names, in declaration order.
    pub fn mutator_names(&self) -> impl Iterator<Item = &str> {
        self.inner.mutators.iter().map(|m| m.name.as_str())
    }

    /// Apply this slice's reducer to a prior sub-state.
    ///
    /// Actions whose type matches no declared mutator return `prior` by
    /// reference identity, as does a matching mutator that neither writes
    /// its draft nor returns a value.
    pub fn reduce(&self, prior: &SliceState, action: &Action) -> SliceState {
        let Some(entry) = self
            .inner
            .mutators
            .iter()
            .find(|m| m.kind == action.kind())
        else {
            return Arc::clone(prior);
        };

        let mut draft = Draft::new(Arc::clone(prior));
        match (entry.run)(&mut draft, action) {
            Some(next) => Arc::new(next),
            None => match draft.finish() {
                Some(next) => Arc::new(next),
                None => Arc::clone(prior),
            },
        }
    }
}

impl std::fmt::Debug for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slice")
            .field("name", &self.inner.name)
            .field("mutators", &self.inner.mutators.len())
            .finish()
    }
}

/// Builder for [`Slice`].
pub struct SliceBuilder {
    name: String,
    initial_state: Value,
    mutators: Vec<MutatorEntry>,
}

impl SliceBuilder {
    /// Declare the slice's initial sub-state.
    pub fn initial_state(mut self, value: Value) -> Self {
        self.initial_state = value;
        self
    }

    /// Declare a labeled mutator. The corresponding action type becomes
    /// `"<slice>/<name>"`.
    pub fn mutator(
        mut self,
        name: impl Into<String>,
        run: impl Fn(&mut Draft, &Action) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        let kind = format!("{}/{}", self.name, name);
        self.mutators.push(MutatorEntry {
            name,
            kind,
            run: Box::new(run),
        });
        self
    }

    /// Finish the definition. Fails with [`StoreError::DuplicateMutator`]
    /// if two mutators share a name.
    pub fn build(self) -> Result<Slice, StoreError> {
        for (i, entry) in self.mutators.iter().enumerate() {
            if self.mutators[..i].iter().any(|m| m.name == entry.name) {
                return Err(StoreError::DuplicateMutator {
                    slice: self.name,
                    mutator: entry.name.clone(),
                });
            }
        }
        Ok(Slice {
            inner: Arc::new(SliceInner {
                name: self.name,
                initial_state: Arc::new(self.initial_state),
                mutators: self.mutators,
            }),
        })
    }
}
