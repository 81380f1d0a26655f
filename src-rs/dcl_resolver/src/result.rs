//! The outcome of a resolution pass

use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    error::ResolutionError,
    origin::{DataAddition, NestedObjectAccess, ObjectOrigin, PropertyReferenceResolution},
};

/// Assignments keyed by property slot
///
/// A later assignment to the same slot replaces the earlier one.
pub type AssignmentMap<'s> = IndexMap<PropertyReferenceResolution<'s>, Rc<ObjectOrigin<'s>>>;

/// Everything a pass found out about a script
///
/// A result is produced even when the script has errors. It then holds
/// whatever could be resolved alongside the complete list of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult<'s> {
    top_level_receiver: Rc<ObjectOrigin<'s>>,
    assignments: AssignmentMap<'s>,
    additions: Vec<DataAddition<'s>>,
    nested_object_accesses: Vec<NestedObjectAccess<'s>>,
    errors: Vec<ResolutionError<'s>>,
}

impl<'s> ResolutionResult<'s> {
    /// Assembles a result from the records of a finished pass
    #[must_use]
    pub const fn new(
        top_level_receiver: Rc<ObjectOrigin<'s>>,
        assignments: AssignmentMap<'s>,
        additions: Vec<DataAddition<'s>>,
        nested_object_accesses: Vec<NestedObjectAccess<'s>>,
        errors: Vec<ResolutionError<'s>>,
    ) -> Self {
        Self {
            top_level_receiver,
            assignments,
            additions,
            nested_object_accesses,
            errors,
        }
    }

    /// Returns the object the script configures
    #[must_use]
    pub const fn top_level_receiver(&self) -> &Rc<ObjectOrigin<'s>> {
        &self.top_level_receiver
    }

    /// Returns the assignments in the order their slots were first written
    #[must_use]
    pub const fn assignments(&self) -> &AssignmentMap<'s> {
        &self.assignments
    }

    /// Returns the additions in the order they were made
    #[must_use]
    pub fn additions(&self) -> &[DataAddition<'s>] {
        &self.additions
    }

    /// Returns the configured sub-objects in the order they were reached
    #[must_use]
    pub fn nested_object_accesses(&self) -> &[NestedObjectAccess<'s>] {
        &self.nested_object_accesses
    }

    /// Returns every error, in the order it was found
    #[must_use]
    pub fn errors(&self) -> &[ResolutionError<'s>] {
        &self.errors
    }

    /// Returns whether the script resolved without errors
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
