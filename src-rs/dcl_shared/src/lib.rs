//! Shared utilities for the dcl configuration-language crates
//!
//! This crate holds the pieces every stage of the front end agrees on: source
//! spans attached to syntax nodes, and the diagnostic trait that turns
//! stage-specific errors into user-facing messages.

pub mod error;
pub mod span;
