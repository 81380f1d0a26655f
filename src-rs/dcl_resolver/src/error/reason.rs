use std::fmt;

use dcl_schema::{DataProperty, DataType, FqName, SchemaFunction};

use crate::origin::FunctionResolutionAndBinding;

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReason<'s> {
    /// A second import binds an already imported simple name to another
    /// fully-qualified name
    AmbiguousImport {
        /// The import that lost
        name: FqName,
    },
    /// A name or call does not match anything in scope
    UnresolvedReference {
        /// The reference as written in the script
        reference: String,
    },
    /// More than one overload accepts the arguments of a call
    AmbiguousFunctions {
        /// Every overload that matched
        candidates: Vec<FunctionResolutionAndBinding<'s>>,
    },
    /// An assignment targets a `val`
    ValReassignment {
        /// The name of the local value
        name: String,
    },
    /// An assignment targets an external object
    ExternalReassignment {
        /// The name of the external object
        name: FqName,
    },
    /// An assigned value does not fit the type of the property
    AssignmentTypeMismatch {
        /// The declared type of the property
        expected: DataType<'s>,
        /// The type of the assigned value
        actual: DataType<'s>,
    },
    /// A block follows a call that cannot take one
    UnusedConfigureLambda,
    /// A call that needs a configure block has none
    MissingConfigureLambda {
        /// The function that was called
        function: &'s SchemaFunction,
    },
    /// A call has more than one trailing block
    MultipleConfigureLambdas,
    /// A `val` is declared twice in the same block
    DuplicateLocalValue {
        /// The redeclared name
        name: String,
    },
    /// The target of an assignment could not be resolved
    UnresolvedAssignmentLhs,
    /// The value of an assignment or a `val` could not be resolved
    UnresolvedAssignmentRhs,
    /// A `Unit` value is assigned to a property or a `val`
    UnitAssignment,
    /// An assignment targets a read-only property
    ReadOnlyPropertyAssignment {
        /// The read-only property
        property: &'s DataProperty,
    },
    /// A statement whose value is never stored anywhere
    DanglingPureExpression,
    /// Configure blocks are nested deeper than the resolver allows
    ConfigureNestingTooDeep {
        /// The configured nesting limit
        limit: usize,
    },
}

impl fmt::Display for ErrorReason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousImport { name } => write!(
                f,
                "import of `{name}` conflicts with an earlier import of `{}`",
                name.simple_name()
            ),
            Self::UnresolvedReference { reference } => {
                write!(f, "unresolved reference `{reference}`")
            }
            Self::AmbiguousFunctions { candidates } => write!(
                f,
                "call is ambiguous between {} functions",
                candidates.len()
            ),
            Self::ValReassignment { name } => write!(f, "`val` cannot be reassigned: `{name}`"),
            Self::ExternalReassignment { name } => {
                write!(f, "external object `{name}` cannot be reassigned")
            }
            Self::AssignmentTypeMismatch { expected, actual } => write!(
                f,
                "type mismatch: expected a value of type `{expected}`, found `{actual}`"
            ),
            Self::UnusedConfigureLambda => {
                write!(f, "the called function does not take a configure block")
            }
            Self::MissingConfigureLambda { function } => write!(
                f,
                "`{}` requires a configure block",
                function.simple_name()
            ),
            Self::MultipleConfigureLambdas => {
                write!(f, "a call can take at most one configure block")
            }
            Self::DuplicateLocalValue { name } => {
                write!(f, "`val {name}` is already declared in this block")
            }
            Self::UnresolvedAssignmentLhs => write!(f, "cannot resolve the assignment target"),
            Self::UnresolvedAssignmentRhs => write!(f, "cannot resolve the assigned value"),
            Self::UnitAssignment => write!(f, "a `Unit` value cannot be assigned"),
            Self::ReadOnlyPropertyAssignment { property } => {
                write!(f, "property `{}` is read-only", property.name())
            }
            Self::DanglingPureExpression => {
                write!(f, "the value of this expression is never used")
            }
            Self::ConfigureNestingTooDeep { limit } => write!(
                f,
                "configure blocks are nested more than {limit} levels deep"
            ),
        }
    }
}
