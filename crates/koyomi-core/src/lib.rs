//! # koyomi-core
//!
//! Core types and error definitions for koyomi.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – primitive type aliases, the error enum and
//! the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Gregorian year number (proleptic, 1 = 1 CE).
pub type Year = i32;

/// Day of the month (1–31).
pub type Day = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
