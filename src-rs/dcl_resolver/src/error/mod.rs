//! Errors reported while resolving a script
//!
//! Resolution never stops at the first problem. Every error is recorded as a
//! [`ResolutionError`] and the pass moves on to the next statement.

mod reason;

use std::fmt;

use dcl_ast::NodeId;
use dcl_shared::{
    error::{AsDclError, Context, ErrorLocation},
    span::Span,
};

pub use reason::ErrorReason;

/// A problem found in a script, attached to the node that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionError<'s> {
    element: NodeId,
    span: Span,
    reason: ErrorReason<'s>,
}

impl<'s> ResolutionError<'s> {
    /// Creates an error on the node `element` spanning `span`
    #[must_use]
    pub const fn new(element: NodeId, span: Span, reason: ErrorReason<'s>) -> Self {
        Self {
            element,
            span,
            reason,
        }
    }

    /// Returns the id of the offending node
    #[must_use]
    pub const fn element(&self) -> NodeId {
        self.element
    }

    /// Returns the source span of the offending node
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns what went wrong
    #[must_use]
    pub const fn reason(&self) -> &ErrorReason<'s> {
        &self.reason
    }
}

impl fmt::Display for ResolutionError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl AsDclError for ResolutionError<'_> {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match &self.reason {
            ErrorReason::AmbiguousFunctions { candidates } => candidates
                .iter()
                .map(|candidate| Context::Note(format!("candidate: {}", candidate.function.format())))
                .collect(),
            ErrorReason::AmbiguousImport { .. } => {
                vec![Context::Help("the first import of this name is used".to_string())]
            }
            ErrorReason::ReadOnlyPropertyAssignment { property } => vec![Context::Note(format!(
                "`{}` can only be configured, not replaced",
                property.name()
            ))],
            ErrorReason::UnusedConfigureLambda => vec![Context::Help(
                "remove the block or call a function that configures an object".to_string(),
            )],
            ErrorReason::DanglingPureExpression => vec![Context::Help(
                "assign the value to a property or a `val`".to_string(),
            )],
            ErrorReason::UnresolvedReference { .. }
            | ErrorReason::ValReassignment { .. }
            | ErrorReason::ExternalReassignment { .. }
            | ErrorReason::AssignmentTypeMismatch { .. }
            | ErrorReason::MissingConfigureLambda { .. }
            | ErrorReason::MultipleConfigureLambdas
            | ErrorReason::DuplicateLocalValue { .. }
            | ErrorReason::UnresolvedAssignmentLhs
            | ErrorReason::UnresolvedAssignmentRhs
            | ErrorReason::UnitAssignment
            | ErrorReason::ConfigureNestingTooDeep { .. } => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let location = ErrorLocation::from_source_and_span(source, &self.span);
        Some(location)
    }
}
