//! Mutable state of one resolution pass

mod scope;

use std::rc::Rc;

use dcl_ast::NodeMeta;
use dcl_schema::{AnalysisSchema, FqName};
use indexmap::IndexMap;

use crate::{
    error::ResolutionError,
    origin::{DataAddition, NestedObjectAccess, ObjectOrigin, PropertyReferenceResolution},
    result::{AssignmentMap, ResolutionResult},
};

pub use scope::{AnalysisScope, LocalBinding, ScopeArena, ScopeId};

/// Everything a pass accumulates
///
/// A context is created at the start of a pass and consumed at its end by
/// [`AnalysisContext::into_result`].
#[derive(Debug)]
pub struct AnalysisContext<'s> {
    schema: &'s AnalysisSchema,
    imports: IndexMap<String, FqName>,
    scopes: ScopeArena<'s>,
    assignments: AssignmentMap<'s>,
    additions: Vec<DataAddition<'s>>,
    nested_object_accesses: Vec<NestedObjectAccess<'s>>,
    errors: Vec<ResolutionError<'s>>,
    last_invocation_id: u64,
}

impl<'s> AnalysisContext<'s> {
    /// Creates an empty context for one pass over a script
    #[must_use]
    pub fn new(schema: &'s AnalysisSchema) -> Self {
        Self {
            schema,
            imports: IndexMap::new(),
            scopes: ScopeArena::new(),
            assignments: IndexMap::new(),
            additions: Vec::new(),
            nested_object_accesses: Vec::new(),
            errors: Vec::new(),
            last_invocation_id: 0,
        }
    }

    /// Installs the simple-name to fully-qualified-name import table
    pub fn set_imports(&mut self, imports: IndexMap<String, FqName>) {
        self.imports = imports;
    }

    /// Returns the schema the script is resolved against
    #[must_use]
    pub const fn schema(&self) -> &'s AnalysisSchema {
        self.schema
    }

    /// Returns the fully-qualified name a simple name is imported as
    #[must_use]
    pub fn imported(&self, simple_name: &str) -> Option<&FqName> {
        self.imports.get(simple_name)
    }

    /// Returns every scope opened so far
    #[must_use]
    pub const fn scopes(&self) -> &ScopeArena<'s> {
        &self.scopes
    }

    /// Opens the scope of `block` with `receiver` as its receiver
    pub fn enter_scope(&mut self, receiver: Rc<ObjectOrigin<'s>>, block: NodeMeta) -> ScopeId {
        let id = self.scopes.enter(receiver, block.id);
        tracing::trace!(scope = ?id, block = %block.id, depth = self.scopes.depth(), "entered scope");
        id
    }

    /// # Panics
    ///
    /// Panics if `id` is not the innermost active scope.
    pub fn leave_scope(&mut self, id: ScopeId) {
        self.scopes.leave(id);
        tracing::trace!(scope = ?id, "left scope");
    }

    /// Declares a local in the innermost scope
    ///
    /// Returns the binding it replaced when the innermost scope already
    /// declared the same name. The caller reports that as a duplicate.
    pub fn declare_local(&mut self, local: LocalBinding<'s>) -> Option<LocalBinding<'s>> {
        self.scopes.declare_local(local)
    }

    /// Issues the next invocation id, starting at 1
    pub const fn next_invocation_id(&mut self) -> u64 {
        self.last_invocation_id += 1;
        self.last_invocation_id
    }

    /// Records that `target` is assigned `value`, replacing any earlier assignment
    pub fn record_assignment(
        &mut self,
        target: PropertyReferenceResolution<'s>,
        value: Rc<ObjectOrigin<'s>>,
    ) {
        if self.assignments.insert(target, value).is_some() {
            tracing::trace!("assignment replaced an earlier assignment to the same property");
        }
    }

    /// Records that `data_object` was added to `container`
    pub fn record_addition(&mut self, container: Rc<ObjectOrigin<'s>>, data_object: Rc<ObjectOrigin<'s>>) {
        self.additions.push(DataAddition {
            container,
            data_object,
        });
    }

    /// Records that `data_object` was reached and configured through `container`
    pub fn record_nested_object_access(
        &mut self,
        container: Rc<ObjectOrigin<'s>>,
        data_object: Rc<ObjectOrigin<'s>>,
    ) {
        self.nested_object_accesses.push(NestedObjectAccess {
            container,
            data_object,
        });
    }

    /// Records an error
    pub fn report(&mut self, error: ResolutionError<'s>) {
        tracing::trace!(element = %error.element(), reason = %error.reason(), "resolution error");
        self.errors.push(error);
    }

    /// Returns the errors recorded so far
    #[must_use]
    pub fn errors(&self) -> &[ResolutionError<'s>] {
        &self.errors
    }

    /// Ends the pass and hands over everything it recorded
    #[must_use]
    pub fn into_result(self, top_level_receiver: Rc<ObjectOrigin<'s>>) -> ResolutionResult<'s> {
        ResolutionResult::new(
            top_level_receiver,
            self.assignments,
            self.additions,
            self.nested_object_accesses,
            self.errors,
        )
    }
}
