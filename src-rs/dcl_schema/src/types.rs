//! Data types, type references and assignability

use std::fmt;

use crate::{class::DataClass, name::FqName};

/// The built-in leaf types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantType {
    /// A 32-bit signed integer
    Int,
    /// A 64-bit signed integer
    Long,
    String,
    Boolean,
}

impl fmt::Display for ConstantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::Long => "Long",
            Self::String => "String",
            Self::Boolean => "Boolean",
        };
        write!(f, "{name}")
    }
}

/// A resolved type
///
/// Class types borrow the class from the schema. Two class types are equal
/// when they name the same class.
#[derive(Debug, Clone, Copy)]
pub enum DataType<'s> {
    /// A constant leaf type
    Constant(ConstantType),
    /// The type of calls that produce no value
    Unit,
    /// The type of `null`
    Null,
    /// An object of a data class
    Class(&'s DataClass),
}

impl DataType<'_> {
    /// Returns whether this is the `Unit` type
    #[must_use]
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }
}

impl PartialEq for DataType<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(left), Self::Constant(right)) => left == right,
            (Self::Unit, Self::Unit) | (Self::Null, Self::Null) => true,
            (Self::Class(left), Self::Class(right)) => left.name() == right.name(),
            (Self::Constant(_) | Self::Unit | Self::Null | Self::Class(_), _) => false,
        }
    }
}

impl Eq for DataType<'_> {}

impl fmt::Display for DataType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::Unit => write!(f, "Unit"),
            Self::Null => write!(f, "Null"),
            Self::Class(class) => write!(f, "{}", class.name()),
        }
    }
}

/// A reference to a type
///
/// Class types are referenced by name so that schemas can describe
/// recursive and forward-referencing type graphs. A [`TypeRefContext`] turns
/// the reference into a [`DataType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataTypeRef {
    /// A constant leaf type
    Constant(ConstantType),
    /// The `Unit` type
    Unit,
    /// The type of `null`
    Null,
    /// A data class, referred to by name
    Name(FqName),
}

impl DataTypeRef {
    /// Creates a reference to the class called `qualified_name`
    #[must_use]
    pub fn name(qualified_name: &str) -> Self {
        Self::Name(FqName::parse(qualified_name))
    }
}

impl From<ConstantType> for DataTypeRef {
    fn from(constant: ConstantType) -> Self {
        Self::Constant(constant)
    }
}

impl fmt::Display for DataTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::Unit => write!(f, "Unit"),
            Self::Null => write!(f, "Null"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Resolves type references to types
pub trait TypeRefContext {
    /// Resolves `type_ref`
    ///
    /// # Panics
    ///
    /// Implementations panic if the reference names a class they do not know.
    /// Schemas are expected to only refer to their own classes.
    fn resolve_ref(&self, type_ref: &DataTypeRef) -> DataType<'_>;
}

/// Checks whether a value of type `value` may be stored where `target` is
/// expected
///
/// Constant types must match exactly. A class accepts itself and any class
/// that declares it as a supertype. Nothing is assignable to `Null`, and only
/// `Unit` is assignable to `Unit`.
#[must_use]
pub fn check_is_assignable(value: DataType<'_>, target: DataType<'_>) -> bool {
    match target {
        DataType::Constant(_) => value == target,
        DataType::Class(target_class) => match value {
            DataType::Class(value_class) => {
                value_class.name() == target_class.name()
                    || value_class.supertypes().contains(target_class.name())
            }
            DataType::Constant(_) | DataType::Unit | DataType::Null => false,
        },
        DataType::Null => false,
        DataType::Unit => value.is_unit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> DataClass {
        DataClass::new(FqName::parse(name))
    }

    #[test]
    fn constants_need_exact_match() {
        let int = DataType::Constant(ConstantType::Int);
        let long = DataType::Constant(ConstantType::Long);

        assert!(check_is_assignable(int, int));
        assert!(!check_is_assignable(int, long));
        assert!(!check_is_assignable(long, int));
    }

    #[test]
    fn subclass_is_assignable_to_supertype() {
        let base = class("org.example.Plugin");
        let java = class("org.example.JavaPlugin").with_supertype(FqName::parse("org.example.Plugin"));

        assert!(check_is_assignable(DataType::Class(&java), DataType::Class(&base)));
        assert!(!check_is_assignable(DataType::Class(&base), DataType::Class(&java)));
        assert!(check_is_assignable(DataType::Class(&base), DataType::Class(&base)));
    }

    #[test]
    fn nothing_is_assignable_to_null() {
        assert!(!check_is_assignable(DataType::Null, DataType::Null));
        assert!(!check_is_assignable(
            DataType::Constant(ConstantType::String),
            DataType::Null
        ));
    }

    #[test]
    fn only_unit_is_assignable_to_unit() {
        assert!(check_is_assignable(DataType::Unit, DataType::Unit));
        assert!(!check_is_assignable(DataType::Null, DataType::Unit));
    }

    #[test]
    fn class_types_compare_by_name() {
        let first = class("org.example.Project");
        let second = class("org.example.Project").with_supertype(FqName::parse("Any"));

        assert_eq!(DataType::Class(&first), DataType::Class(&second));
        assert_ne!(DataType::Class(&first), DataType::Unit);
    }
}
