use dcl_schema::{
    AnalysisSchema, ConfigureAccessor, ConfigureBlockRequirement, ConfigureReturnType,
    ConstantType, DataClass, DataParameter, DataProperty, DataTypeRef, FqName,
    FunctionSemantics, ParameterSemantics, SchemaFunction,
};

pub fn fq(name: &str) -> FqName {
    FqName::parse(name)
}

fn parameter(name: &str, type_ref: impl Into<DataTypeRef>) -> DataParameter {
    DataParameter::new(name, type_ref, false, ParameterSemantics::Unknown)
}

fn pure(return_type: impl Into<DataTypeRef>) -> FunctionSemantics {
    FunctionSemantics::Pure {
        return_type: return_type.into(),
    }
}

/// A small build-script schema
///
/// The top-level receiver is `Project`:
///
/// - `version: Int`, `description: String` (read-only), `group: String` with
///   a builder, `isCi: Boolean`, `artifact: org.example.Artifact`
/// - `java { }`: configures the hidden `java` extension, evaluates to `Unit`
/// - `settings()`: reaches the `Settings` object and evaluates to it, takes
///   no block
/// - `repositories { }`: requires a block
/// - `plugin(id) { }`: adds a `Plugin` whose `id` is the argument
/// - `f(x: Int): Int` and `f(x: String): String`
///
/// `org.example.Dependency(coordinates)` is a constructor of a subtype of
/// `org.example.Artifact`, `org.example.dependency(coordinates, optional = ..)`
/// a top-level function returning one. `org.example.env` is an external
/// object that every script imports.
pub fn project_schema() -> AnalysisSchema {
    let project = fq("Project");
    let artifact = fq("org.example.Artifact");
    let dependency = fq("org.example.Dependency");

    let java_property = DataProperty::new("java", DataTypeRef::name("JavaExtension")).hidden_in_dsl();
    let settings_property = DataProperty::new("settings", DataTypeRef::name("Settings")).hidden_in_dsl();
    let repositories_property =
        DataProperty::new("repositories", DataTypeRef::name("Repositories")).hidden_in_dsl();
    let group_property = DataProperty::new("group", ConstantType::String);
    let plugin_id = DataProperty::new("id", ConstantType::String).read_only();
    let coordinates = DataProperty::new("coordinates", ConstantType::String).read_only();

    let project_class = DataClass::new(project.clone())
        .with_property(DataProperty::new("version", ConstantType::Int))
        .with_property(DataProperty::new("description", ConstantType::String).read_only())
        .with_property(group_property.clone())
        .with_property(DataProperty::new("isCi", ConstantType::Boolean))
        .with_property(DataProperty::new("artifact", DataTypeRef::Name(artifact.clone())))
        .with_property(java_property.clone())
        .with_property(settings_property.clone())
        .with_property(repositories_property.clone())
        .with_member_function(SchemaFunction::builder(project.clone(), group_property))
        .with_member_function(SchemaFunction::member(
            project.clone(),
            "java",
            vec![],
            FunctionSemantics::AccessAndConfigure {
                accessor: ConfigureAccessor::Property(java_property),
                return_type: ConfigureReturnType::Unit,
                requirement: ConfigureBlockRequirement::Optional,
            },
        ))
        .with_member_function(SchemaFunction::member(
            project.clone(),
            "settings",
            vec![],
            FunctionSemantics::AccessAndConfigure {
                accessor: ConfigureAccessor::Property(settings_property),
                return_type: ConfigureReturnType::ConfiguredObject,
                requirement: ConfigureBlockRequirement::NotAllowed,
            },
        ))
        .with_member_function(SchemaFunction::member(
            project.clone(),
            "repositories",
            vec![],
            FunctionSemantics::AccessAndConfigure {
                accessor: ConfigureAccessor::Property(repositories_property),
                return_type: ConfigureReturnType::Unit,
                requirement: ConfigureBlockRequirement::Required,
            },
        ))
        .with_member_function(SchemaFunction::member(
            project.clone(),
            "plugin",
            vec![DataParameter::new(
                "id",
                ConstantType::String,
                false,
                ParameterSemantics::StoreValueInProperty(plugin_id.clone()),
            )],
            FunctionSemantics::AddAndConfigure {
                object_type: DataTypeRef::name("Plugin"),
                requirement: ConfigureBlockRequirement::Optional,
            },
        ))
        .with_member_function(SchemaFunction::member(
            project.clone(),
            "f",
            vec![parameter("x", ConstantType::Int)],
            pure(ConstantType::Int),
        ))
        .with_member_function(SchemaFunction::member(
            project.clone(),
            "f",
            vec![parameter("x", ConstantType::String)],
            pure(ConstantType::String),
        ));

    let java_extension = DataClass::new(fq("JavaExtension"))
        .with_property(DataProperty::new("sourceCompatibility", ConstantType::Int));
    let settings = DataClass::new(fq("Settings"))
        .with_property(DataProperty::new("name", ConstantType::String));
    let repositories = DataClass::new(fq("Repositories"))
        .with_property(DataProperty::new("offline", ConstantType::Boolean));
    let plugin = DataClass::new(fq("Plugin"))
        .with_property(plugin_id)
        .with_property(DataProperty::new("enabled", ConstantType::Boolean));

    let artifact_class = DataClass::new(artifact.clone());
    let dependency_class = DataClass::new(dependency.clone())
        .with_supertype(artifact)
        .with_property(coordinates.clone())
        .with_constructor(vec![DataParameter::new(
            "coordinates",
            ConstantType::String,
            false,
            ParameterSemantics::StoreValueInProperty(coordinates.clone()),
        )]);
    let env = DataClass::new(fq("org.example.Env"))
        .with_property(DataProperty::new("ci", ConstantType::Boolean).read_only());

    AnalysisSchema::new(project)
        .with_class(project_class)
        .with_class(java_extension)
        .with_class(settings)
        .with_class(repositories)
        .with_class(plugin)
        .with_class(artifact_class)
        .with_class(dependency_class)
        .with_class(env)
        .with_top_level_function(SchemaFunction::top_level(
            "org.example",
            "dependency",
            vec![
                DataParameter::new(
                    "coordinates",
                    ConstantType::String,
                    false,
                    ParameterSemantics::StoreValueInProperty(coordinates),
                ),
                DataParameter::new(
                    "optional",
                    ConstantType::Boolean,
                    true,
                    ParameterSemantics::Unknown,
                ),
            ],
            pure(DataTypeRef::Name(dependency)),
        ))
        .with_external_object(fq("org.example.env"), DataTypeRef::name("org.example.Env"))
        .with_default_import(fq("org.example.env"))
}
