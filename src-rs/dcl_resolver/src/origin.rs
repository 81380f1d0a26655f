//! Provenance of resolved values
//!
//! Every value a script mentions resolves to an [`ObjectOrigin`]: a node of a
//! graph that records how the value came to exist. Origins are immutable and
//! shared through [`Rc`], so later statements only ever add new nodes.

use std::rc::Rc;

use dcl_ast::{self as ast, NodeId};
use dcl_schema::{
    AnalysisSchema, ConfigureAccessor, ConstantType, DataParameter, DataProperty, DataType,
    ExternalObjectProviderKey, FqName, SchemaFunction, TypeRefContext,
};

/// A node of the provenance graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectOrigin<'s> {
    /// The object the script configures, one per resolution pass
    TopLevelReceiver {
        /// The top-level block
        node: NodeId,
    },
    /// A literal value
    Constant {
        /// The literal as written
        value: ast::Literal,
        /// The literal expression
        node: NodeId,
    },
    /// The `null` literal
    Null {
        /// The `null` expression
        node: NodeId,
    },
    /// A reference to a local value declared with `val`
    FromLocalValue {
        /// The name of the local value
        name: String,
        /// The value the local was declared with
        assigned: Rc<ObjectOrigin<'s>>,
        /// The `val` statement
        declaration: NodeId,
    },
    /// A property of another object
    PropertyReference {
        /// The object owning the property
        receiver: Rc<ObjectOrigin<'s>>,
        /// The referenced property
        property: &'s DataProperty,
        /// The access expression
        node: NodeId,
    },
    /// The default value of a property that the script never assigned
    PropertyDefaultValue {
        /// The object owning the property
        receiver: Rc<ObjectOrigin<'s>>,
        /// The property with a default value
        property: &'s DataProperty,
        /// The node the default was requested for
        node: NodeId,
    },
    /// An object provided by the host under a fully-qualified name
    External {
        /// The fully-qualified name of the object
        name: FqName,
        /// The schema entry providing the object
        key: &'s ExternalObjectProviderKey,
        /// The expression naming the object
        node: NodeId,
    },
    /// The receiver of a builder call, returned after the builder stored its
    /// argument
    BuilderReturnedReceiver(FunctionInvocation<'s>),
    /// The result of a function, constructor, or add-and-configure call
    NewObjectFromFunctionInvocation(FunctionInvocation<'s>),
    /// The object an access-and-configure call reaches through its accessor
    ConfigureReceiver {
        /// The access-and-configure call
        invocation: FunctionInvocation<'s>,
        /// How the call reaches the configured object
        accessor: &'s ConfigureAccessor,
    },
}

impl<'s> ObjectOrigin<'s> {
    /// Returns the syntax node this origin was created for
    #[must_use]
    pub const fn node(&self) -> NodeId {
        match self {
            Self::TopLevelReceiver { node }
            | Self::Constant { node, .. }
            | Self::Null { node }
            | Self::PropertyReference { node, .. }
            | Self::PropertyDefaultValue { node, .. }
            | Self::External { node, .. } => *node,
            Self::FromLocalValue { declaration, .. } => *declaration,
            Self::BuilderReturnedReceiver(invocation)
            | Self::NewObjectFromFunctionInvocation(invocation)
            | Self::ConfigureReceiver { invocation, .. } => invocation.node,
        }
    }

    /// Returns the invocation behind a function-call origin
    #[must_use]
    pub const fn invocation(&self) -> Option<&FunctionInvocation<'s>> {
        match self {
            Self::BuilderReturnedReceiver(invocation)
            | Self::NewObjectFromFunctionInvocation(invocation)
            | Self::ConfigureReceiver { invocation, .. } => Some(invocation),
            Self::TopLevelReceiver { .. }
            | Self::Constant { .. }
            | Self::Null { .. }
            | Self::FromLocalValue { .. }
            | Self::PropertyReference { .. }
            | Self::PropertyDefaultValue { .. }
            | Self::External { .. } => None,
        }
    }

    /// Returns the type of the value this origin produces
    ///
    /// # Panics
    ///
    /// Panics if a type reference along the way names a class the schema
    /// does not contain.
    #[must_use]
    pub fn data_type(&self, schema: &'s AnalysisSchema) -> DataType<'s> {
        match self {
            Self::TopLevelReceiver { .. } => DataType::Class(schema.top_level_receiver_class()),
            Self::Constant { value, .. } => DataType::Constant(constant_type(value)),
            Self::Null { .. } => DataType::Null,
            Self::FromLocalValue { assigned, .. } => assigned.data_type(schema),
            Self::PropertyReference { property, .. }
            | Self::PropertyDefaultValue { property, .. } => schema.resolve_ref(property.type_ref()),
            Self::External { key, .. } => schema.resolve_ref(key.type_ref()),
            Self::BuilderReturnedReceiver(invocation) => match &invocation.receiver {
                Some(receiver) => receiver.data_type(schema),
                None => schema.resolve_ref(&invocation.function.return_value_type()),
            },
            Self::NewObjectFromFunctionInvocation(invocation) => {
                schema.resolve_ref(&invocation.function.return_value_type())
            }
            Self::ConfigureReceiver { accessor, .. } => schema.resolve_ref(accessor.object_type()),
        }
    }
}

/// Maps a literal to its constant type
#[must_use]
pub const fn constant_type(literal: &ast::Literal) -> ConstantType {
    match literal {
        ast::Literal::Int(_) => ConstantType::Int,
        ast::Literal::Long(_) => ConstantType::Long,
        ast::Literal::String(_) => ConstantType::String,
        ast::Literal::Boolean(_) => ConstantType::Boolean,
    }
}

/// A single call of a schema function
///
/// The invocation id is unique within one resolution pass. Ids start at 1 and
/// increase in the order calls are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionInvocation<'s> {
    /// The called function
    pub function: &'s SchemaFunction,
    /// The object the function was called on, if any
    pub receiver: Option<Rc<ObjectOrigin<'s>>>,
    /// The arguments bound to the parameters of the function
    pub binding: ParameterValueBinding<'s>,
    /// The id of this invocation, unique within a pass
    pub invocation_id: u64,
    /// The call node
    pub node: NodeId,
}

/// The resolved argument of each bound parameter, in argument order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParameterValueBinding<'s> {
    bindings: Vec<(&'s DataParameter, Rc<ObjectOrigin<'s>>)>,
}

impl<'s> ParameterValueBinding<'s> {
    /// Creates a binding from parameter and argument pairs
    #[must_use]
    pub const fn new(bindings: Vec<(&'s DataParameter, Rc<ObjectOrigin<'s>>)>) -> Self {
        Self { bindings }
    }

    /// Returns the parameter and argument pairs in argument order
    #[must_use]
    pub fn bindings(&self) -> &[(&'s DataParameter, Rc<ObjectOrigin<'s>>)] {
        &self.bindings
    }

    /// Returns the argument bound to the parameter called `name`
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Rc<ObjectOrigin<'s>>> {
        self.bindings
            .iter()
            .find(|(parameter, _)| parameter.name() == name)
            .map(|(_, origin)| origin)
    }
}

/// An assignable property slot of a particular object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyReferenceResolution<'s> {
    /// The object that owns the property
    pub receiver: Rc<ObjectOrigin<'s>>,
    /// The property
    pub property: &'s DataProperty,
}

/// An object added into a container by an add-and-configure call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAddition<'s> {
    /// The object that received the new object
    pub container: Rc<ObjectOrigin<'s>>,
    /// The added object
    pub data_object: Rc<ObjectOrigin<'s>>,
}

/// A sub-object reached by an access-and-configure call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedObjectAccess<'s> {
    /// The object the configured object was reached from
    pub container: Rc<ObjectOrigin<'s>>,
    /// The configured object
    pub data_object: Rc<ObjectOrigin<'s>>,
}

/// A candidate function together with its receiver and argument binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResolutionAndBinding<'s> {
    /// The object the function is called on, if it is a member function
    pub receiver: Option<Rc<ObjectOrigin<'s>>>,
    /// The chosen overload
    pub function: &'s SchemaFunction,
    /// How the arguments bind to its parameters
    pub binding: ParameterValueBinding<'s>,
}
