//! Command console HTTP server library.
//!
//! Exposes the building blocks (config, state, page rendering, routes, the
//! script orchestrator) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod handlers;
pub mod page;
pub mod router;
pub mod routes;
pub mod scripting;
pub mod state;
