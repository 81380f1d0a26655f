//! Test utilities for the resolver.

use crate::{ResolutionResult, error::ErrorReason};

pub mod construct;

/// Returns the reasons of all errors of a pass, in the order they were found
pub fn error_reasons<'s>(result: &ResolutionResult<'s>) -> Vec<ErrorReason<'s>> {
    result
        .errors()
        .iter()
        .map(|error| error.reason().clone())
        .collect()
}
