//! Functions, parameters and function semantics

use std::fmt;

use crate::{class::DataProperty, name::FqName, types::DataTypeRef};

/// Where a function lives and how it is looked up
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// A member function that stores its single argument into a property of
    /// the receiver and returns the receiver
    Builder {
        /// The class the builder belongs to
        receiver: FqName,
    },
    /// A member function of `receiver`
    Member {
        /// The class the function belongs to
        receiver: FqName,
    },
    /// A function that lives in `package`
    TopLevel {
        /// The package of the function
        package: String,
    },
    /// A constructor of `class`
    Constructor {
        /// The constructed class
        class: FqName,
    },
}

/// What invoking a function means for the configured object graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionSemantics {
    /// A plain factory: the result has to be stored somewhere to matter
    Pure {
        /// The type of the result
        return_type: DataTypeRef,
    },
    /// Returns the configured receiver
    Builder,
    /// Reaches a sub-object through an accessor and configures it
    AccessAndConfigure {
        /// How the sub-object is reached
        accessor: ConfigureAccessor,
        /// What the call evaluates to
        return_type: ConfigureReturnType,
        /// Whether a configure block may or must follow
        requirement: ConfigureBlockRequirement,
    },
    /// Creates a new object, adds it to the receiver and configures it
    AddAndConfigure {
        /// The type of the added object
        object_type: DataTypeRef,
        /// Whether a configure block may or must follow
        requirement: ConfigureBlockRequirement,
    },
}

impl FunctionSemantics {
    /// Returns the configure block requirement, if the semantics configure
    /// anything at all
    #[must_use]
    pub const fn configure_requirement(&self) -> Option<ConfigureBlockRequirement> {
        match self {
            Self::AccessAndConfigure { requirement, .. }
            | Self::AddAndConfigure { requirement, .. } => Some(*requirement),
            Self::Pure { .. } | Self::Builder => None,
        }
    }
}

/// How a configure function reaches the object it configures
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigureAccessor {
    /// The configured object is the value of a property of the receiver
    Property(DataProperty),
}

impl ConfigureAccessor {
    /// Returns the type of the configured object
    #[must_use]
    pub const fn object_type(&self) -> &DataTypeRef {
        match self {
            Self::Property(property) => property.type_ref(),
        }
    }
}

impl fmt::Display for ConfigureAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(property) => write!(f, "property `{}`", property.name()),
        }
    }
}

/// What an access-and-configure function evaluates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigureReturnType {
    /// The call evaluates to `Unit`
    Unit,
    /// The call evaluates to the configured object
    ConfiguredObject,
}

/// Whether a configure function takes a trailing block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigureBlockRequirement {
    /// A block after the call is an error
    NotAllowed,
    /// A block after the call is accepted but not needed
    Optional,
    /// The call needs a block
    Required,
}

impl ConfigureBlockRequirement {
    /// Returns whether a block may follow the call
    #[must_use]
    pub const fn allows_block(self) -> bool {
        matches!(self, Self::Optional | Self::Required)
    }

    /// Returns whether a block must follow the call
    #[must_use]
    pub const fn requires_block(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// What happens to the value passed for a parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterSemantics {
    /// The value is stored into a property of the call's result
    StoreValueInProperty(DataProperty),
    /// Nothing is known about the value
    Unknown,
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataParameter {
    name: String,
    type_ref: DataTypeRef,
    is_default: bool,
    semantics: ParameterSemantics,
}

impl DataParameter {
    /// Creates a parameter
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_ref: impl Into<DataTypeRef>,
        is_default: bool,
        semantics: ParameterSemantics,
    ) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            is_default,
            semantics,
        }
    }

    /// Returns the name of the parameter
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type of the parameter
    #[must_use]
    pub const fn type_ref(&self) -> &DataTypeRef {
        &self.type_ref
    }

    /// Returns whether the parameter may be left unbound
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    /// Returns what happens to the value passed for the parameter
    #[must_use]
    pub const fn semantics(&self) -> &ParameterSemantics {
        &self.semantics
    }
}

/// A function callable from a script
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaFunction {
    kind: FunctionKind,
    simple_name: String,
    parameters: Vec<DataParameter>,
    semantics: FunctionSemantics,
}

impl SchemaFunction {
    /// Creates a builder for `property`, named after the property
    #[must_use]
    pub fn builder(receiver: FqName, property: DataProperty) -> Self {
        let parameter = DataParameter::new(
            "value",
            property.type_ref().clone(),
            false,
            ParameterSemantics::StoreValueInProperty(property.clone()),
        );
        Self {
            kind: FunctionKind::Builder { receiver },
            simple_name: property.name().to_string(),
            parameters: vec![parameter],
            semantics: FunctionSemantics::Builder,
        }
    }

    /// Creates a member function of `receiver`
    #[must_use]
    pub fn member(
        receiver: FqName,
        simple_name: impl Into<String>,
        parameters: Vec<DataParameter>,
        semantics: FunctionSemantics,
    ) -> Self {
        Self {
            kind: FunctionKind::Member { receiver },
            simple_name: simple_name.into(),
            parameters,
            semantics,
        }
    }

    /// Creates a top-level function of `package`
    #[must_use]
    pub fn top_level(
        package: impl Into<String>,
        simple_name: impl Into<String>,
        parameters: Vec<DataParameter>,
        semantics: FunctionSemantics,
    ) -> Self {
        Self {
            kind: FunctionKind::TopLevel {
                package: package.into(),
            },
            simple_name: simple_name.into(),
            parameters,
            semantics,
        }
    }

    /// Creates a constructor of `class`
    ///
    /// Constructors are pure and return the constructed class.
    #[must_use]
    pub fn constructor(class: FqName, parameters: Vec<DataParameter>) -> Self {
        Self {
            simple_name: class.simple_name().to_string(),
            semantics: FunctionSemantics::Pure {
                return_type: DataTypeRef::Name(class.clone()),
            },
            kind: FunctionKind::Constructor { class },
            parameters,
        }
    }

    /// Returns where the function lives
    #[must_use]
    pub const fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    /// Returns the name the function is called by
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Returns the parameters in declaration order
    #[must_use]
    pub fn parameters(&self) -> &[DataParameter] {
        &self.parameters
    }

    /// Returns what calling the function means
    #[must_use]
    pub const fn semantics(&self) -> &FunctionSemantics {
        &self.semantics
    }

    /// Returns the fully-qualified name of a top-level function
    #[must_use]
    pub fn fq_name(&self) -> Option<FqName> {
        match &self.kind {
            FunctionKind::TopLevel { package } => {
                Some(FqName::new(package.clone(), self.simple_name.clone()))
            }
            FunctionKind::Builder { .. }
            | FunctionKind::Member { .. }
            | FunctionKind::Constructor { .. } => None,
        }
    }

    /// Returns the type an invocation evaluates to
    ///
    /// # Panics
    ///
    /// Panics for builder semantics on a function that has no receiver.
    #[must_use]
    pub fn return_value_type(&self) -> DataTypeRef {
        match &self.semantics {
            FunctionSemantics::Pure { return_type } => return_type.clone(),
            FunctionSemantics::Builder => match &self.kind {
                FunctionKind::Builder { receiver } | FunctionKind::Member { receiver } => {
                    DataTypeRef::Name(receiver.clone())
                }
                FunctionKind::TopLevel { .. } | FunctionKind::Constructor { .. } => {
                    panic!("builder function `{}` has no receiver", self.simple_name)
                }
            },
            FunctionSemantics::AccessAndConfigure {
                accessor,
                return_type,
                ..
            } => match return_type {
                ConfigureReturnType::Unit => DataTypeRef::Unit,
                ConfigureReturnType::ConfiguredObject => accessor.object_type().clone(),
            },
            FunctionSemantics::AddAndConfigure { object_type, .. } => object_type.clone(),
        }
    }

    /// Renders a signature such as `Project.plugin(id: String): Plugin`
    #[must_use]
    pub fn format(&self) -> String {
        let owner = match &self.kind {
            FunctionKind::Builder { receiver } | FunctionKind::Member { receiver } => {
                format!("{}.", receiver.simple_name())
            }
            FunctionKind::TopLevel { package } if !package.is_empty() => format!("{package}."),
            FunctionKind::Constructor { class } if !class.package_name().is_empty() => {
                format!("{}.", class.package_name())
            }
            FunctionKind::TopLevel { .. } | FunctionKind::Constructor { .. } => String::new(),
        };
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| {
                let default = if parameter.is_default() { " = ..." } else { "" };
                format!("{}: {}{default}", parameter.name(), parameter.type_ref())
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{owner}{}({parameters}): {}",
            self.simple_name,
            self.return_value_type()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConstantType;

    #[test]
    fn builder_stores_into_its_property() {
        let property = DataProperty::new("version", ConstantType::String);
        let builder = SchemaFunction::builder(FqName::parse("Project"), property.clone());

        assert_eq!(builder.simple_name(), "version");
        assert_eq!(builder.parameters().len(), 1);
        assert_eq!(
            builder.parameters()[0].semantics(),
            &ParameterSemantics::StoreValueInProperty(property)
        );
        assert_eq!(builder.return_value_type(), DataTypeRef::name("Project"));
    }

    #[test]
    fn access_and_configure_return_types() {
        let accessor =
            ConfigureAccessor::Property(DataProperty::new("java", DataTypeRef::name("Java")));
        let function = |return_type| {
            SchemaFunction::member(
                FqName::parse("Project"),
                "java",
                vec![],
                FunctionSemantics::AccessAndConfigure {
                    accessor: accessor.clone(),
                    return_type,
                    requirement: ConfigureBlockRequirement::Required,
                },
            )
        };

        assert_eq!(
            function(ConfigureReturnType::Unit).return_value_type(),
            DataTypeRef::Unit
        );
        assert_eq!(
            function(ConfigureReturnType::ConfiguredObject).return_value_type(),
            DataTypeRef::name("Java")
        );
    }

    #[test]
    fn format_renders_signature() {
        let function = SchemaFunction::top_level(
            "org.example",
            "dependency",
            vec![
                DataParameter::new(
                    "coordinates",
                    ConstantType::String,
                    false,
                    ParameterSemantics::Unknown,
                ),
                DataParameter::new("optional", ConstantType::Boolean, true, ParameterSemantics::Unknown),
            ],
            FunctionSemantics::Pure {
                return_type: DataTypeRef::name("org.example.Dependency"),
            },
        );

        assert_eq!(
            function.format(),
            "org.example.dependency(coordinates: String, optional: Boolean = ...): org.example.Dependency"
        );
        assert_eq!(function.fq_name(), Some(FqName::parse("org.example.dependency")));
    }

    #[test]
    fn requirement_flags() {
        assert!(!ConfigureBlockRequirement::NotAllowed.allows_block());
        assert!(ConfigureBlockRequirement::Optional.allows_block());
        assert!(!ConfigureBlockRequirement::Optional.requires_block());
        assert!(ConfigureBlockRequirement::Required.requires_block());
    }
}
