//! The store and its subscription registry.
//!
//! # Key Concepts
//!
//! - **Store**: holds one state value and the reducer that replaces it
//! - **Dispatch**: runs the reducer, stores the result, notifies listeners
//! - **Subscription**: capability that removes exactly one registration
//!
//! Every operation runs to completion before returning. There is no
//! background work and no asynchronous boundary anywhere in this module.

pub mod error;
mod container;
mod subscription;

pub use container::{Reducer, Store};
pub use error::StoreError;
pub use subscription::{ListenerId, Subscription};
