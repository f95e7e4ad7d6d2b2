// src/dispatch.rs

//! Compatibility dispatcher.
//!
//! Probes the runtime once, then either forwards the received arguments to
//! the target module or prints the not-found diagnostic:
//!
//! ```text
//! PROBE ──ok──▶ FORWARD  (exit = child's exit code)
//!   └───fail──▶ FAIL     (exit = 2)
//! ```

use std::ffi::OsString;
use std::io::Write;

use crate::error::Result;
use crate::models::{Config, Invocation, Outcome};
use crate::runtime::Runtime;

/// Decides between forwarding and failing for one invocation of the launcher.
pub struct Dispatcher<'a, R: Runtime> {
    config: &'a Config,
    runtime: R,
}

impl<'a, R: Runtime> Dispatcher<'a, R> {
    pub fn new(config: &'a Config, runtime: R) -> Self {
        Self { config, runtime }
    }

    /// Run the dispatch. The diagnostic, if any, is written to `out`.
    pub fn run(&self, args: &[OsString], out: &mut impl Write) -> Result<Outcome> {
        let probe = Invocation::probe(&self.config.runtime);
        if !self.runtime.probe(&probe) {
            log::debug!("Runtime probe failed, printing diagnostic");
            // Exit status stays 2 even when stdout is unwritable.
            let written = out
                .write_all(self.config.messages.render().as_bytes())
                .and_then(|()| out.flush());
            if let Err(e) = written {
                log::warn!("Could not print diagnostic: {}", e);
            }
            return Ok(Outcome::NotAvailable);
        }

        let call = Invocation::forward(&self.config.runtime, self.config.forward.mode, args);
        let code = self.runtime.forward(&call)?;
        log::debug!("Target module exited with {}", code);
        Ok(Outcome::Forwarded(code))
    }
}
