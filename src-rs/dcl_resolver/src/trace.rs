//! Per-node record of what a pass resolved
//!
//! Editors and other tooling want to ask "what does this node refer to?" after
//! a pass. A [`ResolutionTracer`] is told about every resolved expression,
//! every assignment target and every error, keyed by [`NodeId`]. Tracers only
//! observe: they cannot change what the resolver decides.

use std::rc::Rc;

use dcl_ast::NodeId;

use crate::{
    error::ResolutionError,
    origin::{ObjectOrigin, PropertyReferenceResolution},
};

/// Observer of a resolution pass
///
/// All methods default to doing nothing.
pub trait ResolutionTracer<'s> {
    /// Called after an expression node was resolved, or failed to resolve
    fn expression_resolved(&mut self, node: NodeId, origin: Option<&Rc<ObjectOrigin<'s>>>) {
        let _ = (node, origin);
    }

    /// Called after an assignment target was resolved, or failed to resolve
    fn assignable_resolved(&mut self, node: NodeId, target: Option<&PropertyReferenceResolution<'s>>) {
        let _ = (node, target);
    }

    /// Called for every reported error
    fn error_reported(&mut self, error: &ResolutionError<'s>) {
        let _ = error;
    }
}

/// A tracer that records nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTrace;

impl ResolutionTracer<'_> for NoTrace {}

#[cfg(feature = "trace")]
pub use recording::{NodeResolution, ResolutionTrace};

#[cfg(feature = "trace")]
mod recording {
    use std::rc::Rc;

    use dcl_ast::NodeId;
    use indexmap::IndexMap;

    use super::ResolutionTracer;
    use crate::{
        error::ResolutionError,
        origin::{ObjectOrigin, PropertyReferenceResolution},
    };

    /// How an expression node resolved
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NodeResolution<'s> {
        /// The expression resolved to this origin
        Resolved(Rc<ObjectOrigin<'s>>),
        /// The expression could not be resolved
        Unresolved,
    }

    /// A tracer that keeps everything it is told
    ///
    /// If a node is resolved more than once, the last resolution is kept.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct ResolutionTrace<'s> {
        expressions: IndexMap<NodeId, NodeResolution<'s>>,
        assignables: IndexMap<NodeId, Option<PropertyReferenceResolution<'s>>>,
        errors: IndexMap<NodeId, Vec<ResolutionError<'s>>>,
    }

    impl<'s> ResolutionTrace<'s> {
        /// Creates an empty trace
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns how an expression node resolved, or `None` if the pass
        /// never looked at it
        #[must_use]
        pub fn resolution_of(&self, node: NodeId) -> Option<&NodeResolution<'s>> {
            self.expressions.get(&node)
        }

        /// Returns the property slot an assignment target resolved to
        #[must_use]
        pub fn assignable_of(&self, node: NodeId) -> Option<&PropertyReferenceResolution<'s>> {
            self.assignables.get(&node).and_then(Option::as_ref)
        }

        /// Returns the errors reported on a node
        #[must_use]
        pub fn errors_of(&self, node: NodeId) -> &[ResolutionError<'s>] {
            self.errors.get(&node).map(Vec::as_slice).unwrap_or_default()
        }
    }

    impl<'s> ResolutionTracer<'s> for ResolutionTrace<'s> {
        fn expression_resolved(&mut self, node: NodeId, origin: Option<&Rc<ObjectOrigin<'s>>>) {
            let resolution = origin.map_or(NodeResolution::Unresolved, |origin| {
                NodeResolution::Resolved(Rc::clone(origin))
            });
            self.expressions.insert(node, resolution);
        }

        fn assignable_resolved(
            &mut self,
            node: NodeId,
            target: Option<&PropertyReferenceResolution<'s>>,
        ) {
            self.assignables.insert(node, target.cloned());
        }

        fn error_reported(&mut self, error: &ResolutionError<'s>) {
            self.errors
                .entry(error.element())
                .or_default()
                .push(error.clone());
        }
    }
}
