//! # ActionCLI UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! User-facing output. Actions write through the `Console` trait rather than
//! calling `println!` directly, so tests can capture what an action reports.
//! Diagnostic logging stays on `tracing` and goes to stderr.
//!

/// The `Console` trait and its stdout implementation.
pub mod console;
