//! Core record types and shape validation.
//!
//! This module contains the pure part of the container:
//! - The `Record` trait every state and action implements
//! - Shape predicates shared by construction and dispatch
//!
//! Nothing in this module has side effects.

mod record;
pub mod validate;

pub use record::Record;
pub use validate::{ensure_record, is_record};
