//! Request handlers.
//!
//! Each submodule provides the async handler functions for one area of the
//! HTTP surface.

pub mod dashboard;
