//! Command console domain logic.
//!
//! Catalog loading, script runtime types, and subprocess executors. This
//! crate has no HTTP dependencies so it can be tested in isolation.

pub mod catalog;
pub mod error;
pub mod script_types;
pub mod scripting;
