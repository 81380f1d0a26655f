//! Schema model for the dcl configuration language
//!
//! A schema is the closed universe a script may talk about: data classes and
//! their properties, member functions and constructors, top-level functions,
//! and external objects. The schema is built once, outside the resolver, and
//! is read-only afterwards.

pub mod class;
pub mod function;
pub mod name;
pub mod schema;
pub mod types;

pub use class::{DataClass, DataProperty};
pub use function::{
    ConfigureAccessor, ConfigureBlockRequirement, ConfigureReturnType, DataParameter,
    FunctionKind, FunctionSemantics, ParameterSemantics, SchemaFunction,
};
pub use name::FqName;
pub use schema::{AnalysisSchema, ExternalObjectProviderKey};
pub use types::{ConstantType, DataType, DataTypeRef, TypeRefContext, check_is_assignable};
