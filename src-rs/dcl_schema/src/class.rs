//! Data classes and their properties

use indexmap::IndexSet;

use crate::{
    function::{DataParameter, FunctionKind, SchemaFunction},
    name::FqName,
    types::DataTypeRef,
};

/// A class of objects a script can configure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataClass {
    name: FqName,
    supertypes: IndexSet<FqName>,
    properties: Vec<DataProperty>,
    member_functions: Vec<SchemaFunction>,
    constructors: Vec<SchemaFunction>,
}

impl DataClass {
    /// Creates a class without supertypes, properties or functions
    #[must_use]
    pub fn new(name: FqName) -> Self {
        Self {
            name,
            supertypes: IndexSet::new(),
            properties: Vec::new(),
            member_functions: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Adds a supertype
    ///
    /// Supertypes are not followed transitively: every ancestor must be
    /// listed.
    #[must_use]
    pub fn with_supertype(mut self, supertype: FqName) -> Self {
        self.supertypes.insert(supertype);
        self
    }

    /// Adds a property
    #[must_use]
    pub fn with_property(mut self, property: DataProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Adds a member function
    ///
    /// # Panics
    ///
    /// Panics if the function is not a member or builder function of this
    /// class.
    #[must_use]
    pub fn with_member_function(mut self, function: SchemaFunction) -> Self {
        match function.kind() {
            FunctionKind::Member { receiver } | FunctionKind::Builder { receiver } => {
                assert_eq!(
                    receiver, &self.name,
                    "member function `{}` belongs to another class",
                    function.simple_name()
                );
            }
            FunctionKind::TopLevel { .. } | FunctionKind::Constructor { .. } => {
                panic!("`{}` is not a member function", function.simple_name())
            }
        }
        self.member_functions.push(function);
        self
    }

    /// Adds a constructor taking `parameters`
    #[must_use]
    pub fn with_constructor(mut self, parameters: Vec<DataParameter>) -> Self {
        let constructor = SchemaFunction::constructor(self.name.clone(), parameters);
        self.constructors.push(constructor);
        self
    }

    /// Returns the fully-qualified name of the class
    #[must_use]
    pub const fn name(&self) -> &FqName {
        &self.name
    }

    /// Returns every supertype of the class, transitively
    #[must_use]
    pub const fn supertypes(&self) -> &IndexSet<FqName> {
        &self.supertypes
    }

    /// Returns every declared property, including hidden ones
    #[must_use]
    pub fn properties(&self) -> &[DataProperty] {
        &self.properties
    }

    /// Finds a property that scripts can refer to by name
    #[must_use]
    pub fn visible_property(&self, name: &str) -> Option<&DataProperty> {
        self.properties
            .iter()
            .find(|property| !property.is_hidden_in_dsl() && property.name() == name)
    }

    /// Returns the member functions, including builders
    #[must_use]
    pub fn member_functions(&self) -> &[SchemaFunction] {
        &self.member_functions
    }

    /// Returns the constructors
    #[must_use]
    pub fn constructors(&self) -> &[SchemaFunction] {
        &self.constructors
    }
}

/// A property of a data class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataProperty {
    name: String,
    type_ref: DataTypeRef,
    is_read_only: bool,
    has_default_value: bool,
    is_hidden_in_dsl: bool,
}

impl DataProperty {
    /// Creates a writable, visible property without a default value
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<DataTypeRef>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            is_read_only: false,
            has_default_value: false,
            is_hidden_in_dsl: false,
        }
    }

    /// Marks the property read-only
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Marks the property as having a default value
    #[must_use]
    pub fn with_default_value(mut self) -> Self {
        self.has_default_value = true;
        self
    }

    /// Hides the property from name lookup
    ///
    /// Hidden properties can still be written through builder functions and
    /// parameters that store into them.
    #[must_use]
    pub fn hidden_in_dsl(mut self) -> Self {
        self.is_hidden_in_dsl = true;
        self
    }

    /// Returns the name of the property
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type of the property
    #[must_use]
    pub const fn type_ref(&self) -> &DataTypeRef {
        &self.type_ref
    }

    /// Returns whether scripts may assign the property
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    /// Returns whether the property has a default value
    #[must_use]
    pub const fn has_default_value(&self) -> bool {
        self.has_default_value
    }

    /// Returns whether the property is hidden from name lookup
    #[must_use]
    pub const fn is_hidden_in_dsl(&self) -> bool {
        self.is_hidden_in_dsl
    }
}
