//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{validate, Record};
use crate::store::{Reducer, Store};

const DEFAULT_NAME: &str = "store";

/// Builder for constructing stores with a fluent API.
pub struct StoreBuilder<S: Record, A: Record> {
    reducer: Option<Reducer<S, A>>,
    initial: Option<S>,
    name: String,
}

impl<S: Record, A: Record> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial: None,
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Set the reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Label the store in log output. Defaults to `"store"`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Build the store.
    /// Returns an error if a required field is missing or the initial
    /// state is not a record. Nothing is allocated on failure.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        validate::ensure_record(&initial, |found| BuildError::InitialStateNotRecord {
            found,
        })?;

        tracing::debug!(store = %self.name, "store created");
        Ok(Store::from_parts(self.name, reducer, initial))
    }
}

impl<S: Record, A: Record> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
