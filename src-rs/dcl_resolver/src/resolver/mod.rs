//! The resolution passes
//!
//! Each submodule resolves one kind of syntax. They all work on a shared
//! [`Analyzer`], which owns the pass state and routes every result and error
//! past the tracer.

mod bind_arguments;
mod resolve_expr;
mod resolve_function_call;
mod resolve_import;
mod resolve_property;
mod resolve_statement;

use std::rc::Rc;

use dcl_ast::{NodeId, NodeMeta};
use dcl_schema::AnalysisSchema;

use crate::{
    context::AnalysisContext,
    dangling::DanglingExpressionPolicy,
    error::{ErrorReason, ResolutionError},
    origin::{ObjectOrigin, PropertyReferenceResolution},
    result::ResolutionResult,
    settings::ResolverSettings,
    trace::ResolutionTracer,
};

pub use resolve_expr::resolve_expr;
pub use resolve_import::collect_imports;
pub use resolve_statement::analyze_statements;

/// State of one pass plus the pluggable parts that observe or steer it
pub struct Analyzer<'s, 'a> {
    context: AnalysisContext<'s>,
    settings: ResolverSettings,
    policy: &'a dyn DanglingExpressionPolicy,
    tracer: &'a mut dyn ResolutionTracer<'s>,
}

impl<'s, 'a> Analyzer<'s, 'a> {
    #[must_use]
    pub fn new(
        schema: &'s AnalysisSchema,
        settings: ResolverSettings,
        policy: &'a dyn DanglingExpressionPolicy,
        tracer: &'a mut dyn ResolutionTracer<'s>,
    ) -> Self {
        Self {
            context: AnalysisContext::new(schema),
            settings,
            policy,
            tracer,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'s AnalysisSchema {
        self.context.schema()
    }

    #[must_use]
    pub const fn context(&self) -> &AnalysisContext<'s> {
        &self.context
    }

    pub const fn context_mut(&mut self) -> &mut AnalysisContext<'s> {
        &mut self.context
    }

    #[must_use]
    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    #[must_use]
    pub fn policy(&self) -> &'a dyn DanglingExpressionPolicy {
        self.policy
    }

    /// Records an error on the node described by `at`
    pub fn report(&mut self, at: NodeMeta, reason: ErrorReason<'s>) {
        let error = ResolutionError::new(at.id, at.span, reason);
        self.tracer.error_reported(&error);
        self.context.report(error);
    }

    pub fn trace_expression(&mut self, node: NodeId, origin: Option<&Rc<ObjectOrigin<'s>>>) {
        self.tracer.expression_resolved(node, origin);
    }

    pub fn trace_assignable(
        &mut self,
        node: NodeId,
        target: Option<&PropertyReferenceResolution<'s>>,
    ) {
        self.tracer.assignable_resolved(node, target);
    }

    #[must_use]
    pub fn into_result(self, top_level_receiver: Rc<ObjectOrigin<'s>>) -> ResolutionResult<'s> {
        self.context.into_result(top_level_receiver)
    }
}
