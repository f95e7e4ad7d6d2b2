// src/lib.rs

//! Deprecated `archive` launcher for ArchiveBox.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod runtime;
