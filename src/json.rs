//! Stores over dynamic JSON records.
//!
//! `serde_json::Value` is a record only when it is an object. Everything
//! else (`null`, booleans, numbers, strings, arrays) is rejected at
//! construction and at dispatch, which is how an absent or malformed
//! argument shows up with dynamic values.

use crate::core::Record;
use crate::store::{Store, StoreError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A store whose state and actions are both JSON values.
pub type JsonStore = Store<Value, Value>;

impl Record for Value {
    fn is_record(&self) -> bool {
        self.is_object()
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Record for Map<String, Value> {}

/// Shallow merge of two objects into a new object.
///
/// Keys of `patch` override keys of `base`. A non-object on either side
/// contributes no keys, so the result is always an object.
///
/// # Example
///
/// ```rust
/// use reduxo::json::merge;
/// use serde_json::json;
///
/// let merged = merge(&json!({"foo": "bar", "n": 1}), &json!({"foo": "baz"}));
/// assert_eq!(merged, json!({"foo": "baz", "n": 1}));
///
/// assert_eq!(merge(&json!({"a": 1}), &json!(null)), json!({"a": 1}));
/// ```
pub fn merge(base: &Value, patch: &Value) -> Value {
    let mut merged = base.as_object().cloned().unwrap_or_default();
    if let Some(patch) = patch.as_object() {
        merged.extend(patch.iter().map(|(key, value)| (key.clone(), value.clone())));
    }
    Value::Object(merged)
}

impl<A: Record> Store<Value, A> {
    /// Decode the current state into a typed view.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reduxo::create_store;
    /// use serde::Deserialize;
    /// use serde_json::{json, Value};
    ///
    /// #[derive(Deserialize)]
    /// struct Settings {
    ///     theme: String,
    /// }
    ///
    /// let store = create_store(
    ///     |state: &Value, _action: &Value| state.clone(),
    ///     json!({"theme": "dark"}),
    /// )
    /// .unwrap();
    ///
    /// let settings: Settings = store.state_as().unwrap();
    /// assert_eq!(settings.theme, "dark");
    /// ```
    pub fn state_as<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        Ok(serde_json::from_value(self.get_state())?)
    }
}
