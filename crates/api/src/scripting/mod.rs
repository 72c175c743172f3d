//! Script orchestration service.
//!
//! The [`ScriptOrchestrator`](orchestrator::ScriptOrchestrator) ties the core
//! executors to the request handlers and produces the message shown after a
//! run.

pub mod orchestrator;
