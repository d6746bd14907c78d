//! The `Record` trait: shape contract for state and actions.
//!
//! State and actions must both be structured records (key-value
//! mappings), never absent. For plain Rust structs and enums that holds by
//! construction; dynamic values such as `serde_json::Value` carry their
//! shape at runtime and report it through [`Record::is_record`].

use std::fmt::Debug;

/// Trait for values a store can hold as state or receive as actions.
///
/// Stores check the shape of the initial state, of every action and of
/// every reducer result. A reducer must return a record; a non-record
/// result is rejected and the previous state is kept.
///
/// # Required Traits
///
/// - `Clone`: `get_state` hands out copies of the current state
/// - `Debug`: values show up in diagnostics
/// - `Send` + `Sync` + `'static`: stores can be shared across threads
///
/// # Example
///
/// ```rust
/// use reduxo::core::Record;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     value: i64,
/// }
///
/// impl Record for Counter {}
///
/// let counter = Counter { value: 1 };
/// assert!(counter.is_record());
/// assert_eq!(counter.kind(), "record");
/// ```
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Check whether this value is a structured record.
    ///
    /// Default implementation returns `true`.
    fn is_record(&self) -> bool {
        true
    }

    /// Short name of the value's shape, used in error messages.
    ///
    /// Default implementation returns `"record"`.
    fn kind(&self) -> &'static str {
        "record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Settings {
        theme: String,
        font_size: u8,
    }

    impl Record for Settings {}

    #[derive(Clone, Debug, PartialEq)]
    enum Maybe {
        Present(u32),
        Absent,
    }

    impl Record for Maybe {
        fn is_record(&self) -> bool {
            matches!(self, Self::Present(_))
        }

        fn kind(&self) -> &'static str {
            match self {
                Self::Present(_) => "present",
                Self::Absent => "absent",
            }
        }
    }

    #[test]
    fn structs_are_records_by_default() {
        let settings = Settings {
            theme: "dark".to_string(),
            font_size: 12,
        };
        assert!(settings.is_record());
        assert_eq!(settings.kind(), "record");
    }

    #[test]
    fn shape_can_depend_on_value() {
        assert!(Maybe::Present(3).is_record());
        assert!(!Maybe::Absent.is_record());
        assert_eq!(Maybe::Absent.kind(), "absent");
    }
}
