//! Binding call arguments to function parameters

use std::rc::Rc;

use dcl_schema::{AnalysisSchema, DataParameter, TypeRefContext, check_is_assignable};

use crate::origin::{ObjectOrigin, ParameterValueBinding};

/// A value argument of a call after its expression was resolved
#[derive(Debug, Clone)]
pub struct ResolvedArgument<'a, 's> {
    /// The name of a named argument, `None` for a positional one
    pub name: Option<&'a str>,
    /// The resolved value of the argument
    pub origin: Rc<ObjectOrigin<'s>>,
}

/// Binds arguments to parameters
///
/// Positional arguments bind by position. A named argument binds to the
/// parameter of that name; before the last positional argument it must also
/// name the parameter at its own position. Returns `None` if an argument
/// names no parameter, two arguments bind the same parameter, or a parameter
/// without a default stays unbound.
///
/// The binding lists parameter and argument indices in argument order.
pub fn bind_arguments(
    parameters: &[DataParameter],
    arguments: &[ResolvedArgument<'_, '_>],
) -> Option<Vec<(usize, usize)>> {
    let last_positional = arguments
        .iter()
        .rposition(|argument| argument.name.is_none());

    let mut bound: Vec<(usize, usize)> = Vec::with_capacity(arguments.len());
    for (argument_index, argument) in arguments.iter().enumerate() {
        let parameter_index = match argument.name {
            Some(name) => {
                let before_positional = last_positional.is_some_and(|last| argument_index < last);
                if before_positional
                    && parameters.get(argument_index).map(DataParameter::name) != Some(name)
                {
                    return None;
                }
                parameters
                    .iter()
                    .position(|parameter| parameter.name() == name)?
            }
            None if argument_index < parameters.len() => argument_index,
            None => return None,
        };

        if bound.iter().any(|(bound_index, _)| *bound_index == parameter_index) {
            return None;
        }
        bound.push((parameter_index, argument_index));
    }

    let all_bound = parameters.iter().enumerate().all(|(index, parameter)| {
        parameter.is_default() || bound.iter().any(|(bound_index, _)| *bound_index == index)
    });
    all_bound.then_some(bound)
}

/// Checks every bound argument against the type of its parameter
pub fn type_check_binding<'s>(
    schema: &'s AnalysisSchema,
    parameters: &'s [DataParameter],
    arguments: &[ResolvedArgument<'_, 's>],
    binding: &[(usize, usize)],
) -> bool {
    binding.iter().all(|(parameter_index, argument_index)| {
        let expected = schema.resolve_ref(parameters[*parameter_index].type_ref());
        let actual = arguments[*argument_index].origin.data_type(schema);
        check_is_assignable(actual, expected)
    })
}

/// Turns an index binding into a binding of parameters to argument origins
pub fn to_value_binding<'s>(
    parameters: &'s [DataParameter],
    arguments: &[ResolvedArgument<'_, 's>],
    binding: &[(usize, usize)],
) -> ParameterValueBinding<'s> {
    ParameterValueBinding::new(
        binding
            .iter()
            .map(|(parameter_index, argument_index)| {
                (
                    &parameters[*parameter_index],
                    Rc::clone(&arguments[*argument_index].origin),
                )
            })
            .collect(),
    )
}
