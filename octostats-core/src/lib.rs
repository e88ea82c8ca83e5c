//! Octostats Core - Shared data structures and error taxonomy
//!
//! Defines the profile/repository data model, the search lifecycle state,
//! and the user-facing failure taxonomy consumed by the client and CLI crates.

pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
