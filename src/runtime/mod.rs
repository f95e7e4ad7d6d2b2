// src/runtime/mod.rs

//! Runtime capability used by the dispatcher.
//!
//! The dispatcher never touches `$PATH` or spawns processes itself; it asks a
//! [`Runtime`] whether the interpreter stack is usable and to run the target
//! module. [`ProcessRuntime`] is the real implementation, tests supply their own.

pub mod process;

use crate::error::Result;
use crate::models::Invocation;

// Re-export for convenience
pub use process::ProcessRuntime;

/// Trait for things that can check for and start the target runtime.
pub trait Runtime {
    /// Run the availability check. Only success or failure is reported;
    /// whatever the check prints is discarded.
    fn probe(&self, invocation: &Invocation) -> bool;

    /// Run the invocation to completion and return its exit code.
    fn forward(&self, invocation: &Invocation) -> Result<i32>;
}
