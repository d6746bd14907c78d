//! Macros for declaring record types.

/// Declare a struct or enum and implement `Record` for it.
///
/// The generated type derives `Clone`, `Debug` and `PartialEq`; extra
/// attributes (such as serde derives) are passed through. Enum variants
/// may be unit, tuple or struct-like.
///
/// # Example
///
/// ```
/// use reduxo::{create_store, record};
///
/// record! {
///     pub struct Todos {
///         pub items: Vec<String>,
///     }
/// }
///
/// record! {
///     pub enum TodoAction {
///         Add(String),
///         Clear,
///     }
/// }
///
/// let store = create_store(
///     |state: &Todos, action: &TodoAction| match action {
///         TodoAction::Add(item) => {
///             let mut items = state.items.clone();
///             items.push(item.clone());
///             Todos { items }
///         }
///         TodoAction::Clear => Todos { items: Vec::new() },
///     },
///     Todos { items: Vec::new() },
/// )
/// .unwrap();
///
/// store.dispatch(TodoAction::Add("write docs".to_string())).unwrap();
/// assert_eq!(store.get_state().items, vec!["write docs".to_string()]);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty
            ),*
        }

        impl $crate::core::Record for $name {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $(( $($payload:ty),* $(,)? ))?
                $({ $($(#[$named_meta:meta])* $named:ident : $named_ty:ty),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $(( $($payload),* ))?
                $({ $($(#[$named_meta])* $named: $named_ty),* })?
            ),*
        }

        impl $crate::core::Record for $name {}
    };
}
