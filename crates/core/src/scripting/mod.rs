//! Script execution domain logic.
//!
//! Provides one executor per runtime (Python, PowerShell) on top of a shared
//! subprocess helper. Nothing here knows about HTTP; the API crate decides
//! how results are presented.

pub mod executor;
pub mod powershell;
pub mod python;
pub mod subprocess;
