// src/models/invocation.rs

//! Child command lines built from the runtime configuration.

use std::ffi::OsString;

use super::config::{ForwardMode, RuntimeConfig};

/// A program plus the arguments it will be started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Version query used as the availability check, e.g. `python3 -m django --version`.
    pub fn probe(runtime: &RuntimeConfig) -> Self {
        Self {
            program: runtime.interpreter.clone(),
            args: vec![
                runtime.module_flag.clone().into(),
                runtime.probe_module.clone().into(),
                runtime.version_flag.clone().into(),
            ],
        }
    }

    /// Call of the target module carrying the received arguments.
    pub fn forward(runtime: &RuntimeConfig, mode: ForwardMode, received: &[OsString]) -> Self {
        let mut args: Vec<OsString> = vec![
            runtime.module_flag.clone().into(),
            runtime.target_module.clone().into(),
        ];
        match mode {
            ForwardMode::Joined => args.push(join_args(received)),
            ForwardMode::Split => args.extend(received.iter().cloned()),
        }
        Self {
            program: runtime.interpreter.clone(),
            args,
        }
    }
}

/// Join arguments with single spaces. Zero arguments yield an empty string.
pub fn join_args(args: &[OsString]) -> OsString {
    let mut joined = OsString::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            joined.push(" ");
        }
        joined.push(arg);
    }
    joined
}
