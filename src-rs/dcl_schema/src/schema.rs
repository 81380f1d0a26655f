//! The complete schema handed to the resolver

use indexmap::{IndexMap, IndexSet};

use crate::{
    class::DataClass,
    function::{FunctionKind, SchemaFunction},
    name::FqName,
    types::{DataType, DataTypeRef, TypeRefContext},
};

/// Identifies an external object, a global the host provides by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalObjectProviderKey {
    type_ref: DataTypeRef,
}

impl ExternalObjectProviderKey {
    /// Creates a key for an external object of type `type_ref`
    #[must_use]
    pub const fn new(type_ref: DataTypeRef) -> Self {
        Self { type_ref }
    }

    /// Returns the type of the external object
    #[must_use]
    pub const fn type_ref(&self) -> &DataTypeRef {
        &self.type_ref
    }
}

/// Everything a script may refer to
///
/// All tables keep insertion order, so lookups that scan them are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSchema {
    top_level_receiver_type: FqName,
    data_classes_by_fq_name: IndexMap<FqName, DataClass>,
    external_functions_by_fq_name: IndexMap<FqName, Vec<SchemaFunction>>,
    external_objects_by_fq_name: IndexMap<FqName, ExternalObjectProviderKey>,
    default_imports: IndexSet<FqName>,
}

impl AnalysisSchema {
    /// Creates an empty schema whose scripts configure an object of type
    /// `top_level_receiver_type`
    ///
    /// The receiver class itself must be added with [`Self::with_class`].
    #[must_use]
    pub fn new(top_level_receiver_type: FqName) -> Self {
        Self {
            top_level_receiver_type,
            data_classes_by_fq_name: IndexMap::new(),
            external_functions_by_fq_name: IndexMap::new(),
            external_objects_by_fq_name: IndexMap::new(),
            default_imports: IndexSet::new(),
        }
    }

    /// Adds a data class
    #[must_use]
    pub fn with_class(mut self, class: DataClass) -> Self {
        self.data_classes_by_fq_name
            .insert(class.name().clone(), class);
        self
    }

    /// Adds a top-level function
    ///
    /// Functions sharing a fully-qualified name are overloads of each other.
    ///
    /// # Panics
    ///
    /// Panics if `function` is not a top-level function.
    #[must_use]
    pub fn with_top_level_function(mut self, function: SchemaFunction) -> Self {
        let FunctionKind::TopLevel { package } = function.kind() else {
            panic!("`{}` is not a top-level function", function.simple_name());
        };
        let name = FqName::new(package.clone(), function.simple_name());
        self.external_functions_by_fq_name
            .entry(name)
            .or_default()
            .push(function);
        self
    }

    /// Adds an external object that scripts can refer to as `name`
    #[must_use]
    pub fn with_external_object(mut self, name: FqName, type_ref: DataTypeRef) -> Self {
        self.external_objects_by_fq_name
            .insert(name, ExternalObjectProviderKey::new(type_ref));
        self
    }

    /// Adds a name every script imports implicitly
    #[must_use]
    pub fn with_default_import(mut self, name: FqName) -> Self {
        self.default_imports.insert(name);
        self
    }

    /// Returns the name of the class scripts configure
    #[must_use]
    pub const fn top_level_receiver_type(&self) -> &FqName {
        &self.top_level_receiver_type
    }

    /// Looks up a data class by name
    #[must_use]
    pub fn data_class(&self, name: &FqName) -> Option<&DataClass> {
        self.data_classes_by_fq_name.get(name)
    }

    /// Returns every data class
    #[must_use]
    pub const fn data_classes(&self) -> &IndexMap<FqName, DataClass> {
        &self.data_classes_by_fq_name
    }

    /// Returns the overloads of a top-level function, or an empty slice
    #[must_use]
    pub fn top_level_functions(&self, name: &FqName) -> &[SchemaFunction] {
        self.external_functions_by_fq_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up an external object by name
    #[must_use]
    pub fn external_object(&self, name: &FqName) -> Option<&ExternalObjectProviderKey> {
        self.external_objects_by_fq_name.get(name)
    }

    /// Returns the names every script imports implicitly
    #[must_use]
    pub const fn default_imports(&self) -> &IndexSet<FqName> {
        &self.default_imports
    }

    /// Returns the class of the object scripts configure
    ///
    /// # Panics
    ///
    /// Panics if the schema has no class for its own top-level receiver type.
    #[must_use]
    pub fn top_level_receiver_class(&self) -> &DataClass {
        self.data_class(&self.top_level_receiver_type)
            .unwrap_or_else(|| {
                panic!(
                    "top-level receiver type `{}` is not a class of the schema",
                    self.top_level_receiver_type
                )
            })
    }
}

impl TypeRefContext for AnalysisSchema {
    fn resolve_ref(&self, type_ref: &DataTypeRef) -> DataType<'_> {
        match type_ref {
            DataTypeRef::Constant(constant) => DataType::Constant(*constant),
            DataTypeRef::Unit => DataType::Unit,
            DataTypeRef::Null => DataType::Null,
            DataTypeRef::Name(name) => self.data_class(name).map_or_else(
                || panic!("type `{name}` is not a class of the schema"),
                DataType::Class,
            ),
        }
    }
}
