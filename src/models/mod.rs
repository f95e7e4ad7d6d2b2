// src/models/mod.rs

//! Domain models for the launcher.
//!
//! Configuration, child command lines and dispatch outcomes.

mod config;
mod invocation;

// Re-export all public types
pub use config::{Config, ForwardConfig, ForwardMode, Messages, RuntimeConfig};
pub use invocation::{Invocation, join_args};

/// Exit status used when the runtime is not available.
pub const NOT_AVAILABLE_EXIT_CODE: i32 = 2;

/// Terminal state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target module ran and exited with this code
    Forwarded(i32),
    /// The probe failed; the diagnostic was printed
    NotAvailable,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Forwarded(code) => code,
            Outcome::NotAvailable => NOT_AVAILABLE_EXIT_CODE,
        }
    }
}
