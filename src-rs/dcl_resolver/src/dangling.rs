//! Which bare call statements are meaningless
//!
//! A configuration script has no use for a value that is computed and then
//! dropped. The rule deciding this is a heuristic, so it sits behind
//! [`DanglingExpressionPolicy`] and can be replaced.

use dcl_schema::FunctionSemantics;

use crate::origin::ObjectOrigin;

/// Decides whether the result of a bare call statement is dangling
pub trait DanglingExpressionPolicy {
    /// Returns whether `invocation`, the result of a call written as a
    /// statement, is dangling
    fn is_dangling(&self, invocation: &ObjectOrigin<'_>) -> bool;
}

/// The standard rule
///
/// A call is dangling if its function is pure, or if it is a builder call
/// whose receiver chain cannot lead back to anything that persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultDanglingPolicy;

impl DanglingExpressionPolicy for DefaultDanglingPolicy {
    fn is_dangling(&self, invocation: &ObjectOrigin<'_>) -> bool {
        let Some(call) = invocation.invocation() else {
            return false;
        };

        if matches!(call.function.semantics(), FunctionSemantics::Pure { .. }) {
            return true;
        }

        match invocation {
            ObjectOrigin::BuilderReturnedReceiver(call) => !call
                .receiver
                .as_deref()
                .is_some_and(is_potentially_persistent),
            ObjectOrigin::TopLevelReceiver { .. }
            | ObjectOrigin::Constant { .. }
            | ObjectOrigin::Null { .. }
            | ObjectOrigin::FromLocalValue { .. }
            | ObjectOrigin::PropertyReference { .. }
            | ObjectOrigin::PropertyDefaultValue { .. }
            | ObjectOrigin::External { .. }
            | ObjectOrigin::NewObjectFromFunctionInvocation(_)
            | ObjectOrigin::ConfigureReceiver { .. } => false,
        }
    }
}

// TODO: treat a local that is never read as not persistent
fn is_potentially_persistent(origin: &ObjectOrigin<'_>) -> bool {
    match origin {
        ObjectOrigin::ConfigureReceiver { .. }
        | ObjectOrigin::External { .. }
        | ObjectOrigin::FromLocalValue { .. }
        | ObjectOrigin::PropertyReference { .. }
        | ObjectOrigin::PropertyDefaultValue { .. }
        | ObjectOrigin::TopLevelReceiver { .. } => true,
        ObjectOrigin::Constant { .. } | ObjectOrigin::Null { .. } => false,
        ObjectOrigin::BuilderReturnedReceiver(call) => call
            .receiver
            .as_deref()
            .is_some_and(is_potentially_persistent),
        ObjectOrigin::NewObjectFromFunctionInvocation(call) => match call.function.semantics() {
            FunctionSemantics::AccessAndConfigure { .. }
            | FunctionSemantics::AddAndConfigure { .. } => true,
            FunctionSemantics::Pure { .. } => false,
            FunctionSemantics::Builder => {
                unreachable!("builder calls resolve to their receiver, not to a new object")
            }
        },
    }
}
