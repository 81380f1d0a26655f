//! Function call resolution
//!
//! Overloads are gathered in tiers: member functions of the receiver (or of
//! each enclosing scope's receiver, innermost first), then constructors, then
//! top-level functions. The first tier that yields a matching overload is the
//! only one considered. Within that tier there is no tie-breaking: two
//! matching overloads make the call ambiguous.

use std::rc::Rc;

use dcl_ast::{self as ast, FunctionArgument, NodeMeta};
use dcl_schema::{
    AnalysisSchema, ConfigureReturnType, DataType, FqName, FunctionSemantics, ParameterSemantics,
    SchemaFunction,
};

use crate::{
    error::ErrorReason,
    origin::{FunctionInvocation, FunctionResolutionAndBinding, ObjectOrigin, PropertyReferenceResolution},
    resolver::{
        Analyzer,
        bind_arguments::{ResolvedArgument, bind_arguments, to_value_binding, type_check_binding},
        resolve_expr,
        resolve_property::resolve_call_receiver,
        resolve_statement::analyze_nested_block,
    },
};

/// Resolves a call to the origin of its result
///
/// A resolved call has its effects recorded: assignments for parameters that
/// store into properties, additions, nested object accesses, and the
/// analysis of its configure block.
///
/// # Panics
///
/// Panics if the schema is inconsistent: a builder that does not take exactly
/// one parameter stored into a property, or a configure function called
/// without a receiver.
pub fn resolve_function_call<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    call: &ast::FunctionCall,
    at: NodeMeta,
) -> Option<Rc<ObjectOrigin<'s>>> {
    let arguments = resolve_arguments(analyzer, call)?;

    let mut lambdas = call.lambdas();
    let lambda = lambdas.next();
    if lambdas.next().is_some() {
        analyzer.report(at, ErrorReason::MultipleConfigureLambdas);
        return None;
    }

    let mut overloads = find_overloads(analyzer, call, &arguments);
    tracing::trace!(function = call.name(), overloads = overloads.len(), "matched overloads");

    match overloads.len() {
        0 => {
            analyzer.report(
                at,
                ErrorReason::UnresolvedReference {
                    reference: call.to_string(),
                },
            );
            None
        }
        1 => {
            let resolution = overloads.remove(0);
            Some(produce_function_result(analyzer, resolution, at, lambda))
        }
        _ => {
            analyzer.report(
                at,
                ErrorReason::AmbiguousFunctions {
                    candidates: overloads,
                },
            );
            None
        }
    }
}

/// Resolves every value argument, even after one fails, so that all of
/// their errors are reported
fn resolve_arguments<'a, 's>(
    analyzer: &mut Analyzer<'s, '_>,
    call: &'a ast::FunctionCall,
) -> Option<Vec<ResolvedArgument<'a, 's>>> {
    let mut arguments = Vec::new();
    let mut all_resolved = true;

    for argument in call.value_args() {
        let (name, expr) = match &**argument {
            FunctionArgument::Positional(expr) => (None, expr),
            FunctionArgument::Named { name, expr } => (Some(name.as_str()), expr),
            FunctionArgument::Lambda(_) => unreachable!("value arguments exclude lambdas"),
        };
        match resolve_expr(analyzer, expr) {
            Some(origin) => arguments.push(ResolvedArgument { name, origin }),
            None => all_resolved = false,
        }
    }

    all_resolved.then_some(arguments)
}

fn find_overloads<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    call: &ast::FunctionCall,
    arguments: &[ResolvedArgument<'_, 's>],
) -> Vec<FunctionResolutionAndBinding<'s>> {
    let schema = analyzer.schema();

    let members = match call.receiver() {
        Some(receiver) => resolve_call_receiver(analyzer, receiver)
            .map(|receiver| find_member_functions(schema, &receiver, call.name(), arguments))
            .unwrap_or_default(),
        None => {
            let scope_receivers: Vec<_> = analyzer
                .context()
                .scopes()
                .active_innermost_first()
                .map(|scope| Rc::clone(scope.receiver()))
                .collect();
            scope_receivers
                .iter()
                .map(|receiver| find_member_functions(schema, receiver, call.name(), arguments))
                .find(|overloads| !overloads.is_empty())
                .unwrap_or_default()
        }
    };
    if !members.is_empty() {
        return members;
    }

    let constructors = find_constructors(analyzer, call, arguments);
    if !constructors.is_empty() {
        return constructors;
    }

    find_top_level_functions(analyzer, call, arguments)
}

fn find_member_functions<'s>(
    schema: &'s AnalysisSchema,
    receiver: &Rc<ObjectOrigin<'s>>,
    name: &str,
    arguments: &[ResolvedArgument<'_, 's>],
) -> Vec<FunctionResolutionAndBinding<'s>> {
    let DataType::Class(class) = receiver.data_type(schema) else {
        return Vec::new();
    };
    let candidates = class.member_functions().iter().filter(|function| {
        function.simple_name() == name && accepts_argument_count(function, arguments)
    });
    choose_matching_overloads(schema, Some(receiver), candidates, arguments)
}

fn find_constructors<'s>(
    analyzer: &Analyzer<'s, '_>,
    call: &ast::FunctionCall,
    arguments: &[ResolvedArgument<'_, 's>],
) -> Vec<FunctionResolutionAndBinding<'s>> {
    let schema = analyzer.schema();
    let class_name = match call.receiver() {
        Some(receiver) => receiver
            .as_access_chain()
            .map(|chain| FqName::new(chain.to_string(), call.name())),
        None => analyzer.context().imported(call.name()).cloned(),
    };
    let Some(class) = class_name.and_then(|name| schema.data_class(&name)) else {
        return Vec::new();
    };

    let candidates = class
        .constructors()
        .iter()
        .filter(|constructor| constructor.parameters().len() == arguments.len());
    choose_matching_overloads(schema, None, candidates, arguments)
}

fn find_top_level_functions<'s>(
    analyzer: &Analyzer<'s, '_>,
    call: &ast::FunctionCall,
    arguments: &[ResolvedArgument<'_, 's>],
) -> Vec<FunctionResolutionAndBinding<'s>> {
    let schema = analyzer.schema();
    let package = match call.receiver() {
        None => String::new(),
        Some(receiver) => match receiver.as_access_chain() {
            Some(chain) => chain.to_string(),
            None => return Vec::new(),
        },
    };

    let direct_name = FqName::new(package, call.name());
    let mut functions: Vec<&'s SchemaFunction> =
        schema.top_level_functions(&direct_name).iter().collect();
    if call.receiver().is_none() {
        if let Some(imported) = analyzer.context().imported(call.name()) {
            if imported != &direct_name {
                functions.extend(schema.top_level_functions(imported));
            }
        }
    }

    let candidates = functions
        .into_iter()
        .filter(|function| accepts_argument_count(function, arguments));
    choose_matching_overloads(schema, None, candidates, arguments)
}

fn accepts_argument_count(function: &SchemaFunction, arguments: &[ResolvedArgument<'_, '_>]) -> bool {
    function.parameters().len() >= arguments.len()
}

fn choose_matching_overloads<'s>(
    schema: &'s AnalysisSchema,
    receiver: Option<&Rc<ObjectOrigin<'s>>>,
    candidates: impl Iterator<Item = &'s SchemaFunction>,
    arguments: &[ResolvedArgument<'_, 's>],
) -> Vec<FunctionResolutionAndBinding<'s>> {
    candidates
        .filter_map(|function| {
            let parameters = function.parameters();
            let binding = bind_arguments(parameters, arguments)?;
            if !type_check_binding(schema, parameters, arguments, &binding) {
                return None;
            }
            Some(FunctionResolutionAndBinding {
                receiver: receiver.map(Rc::clone),
                function,
                binding: to_value_binding(parameters, arguments, &binding),
            })
        })
        .collect()
}

fn produce_function_result<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    resolution: FunctionResolutionAndBinding<'s>,
    at: NodeMeta,
    lambda: Option<&ast::BlockNode>,
) -> Rc<ObjectOrigin<'s>> {
    let FunctionResolutionAndBinding {
        receiver,
        function,
        binding,
    } = resolution;

    let invocation = FunctionInvocation {
        function,
        receiver: receiver.clone(),
        binding: binding.clone(),
        invocation_id: analyzer.context_mut().next_invocation_id(),
        node: at.id,
    };

    let mut configure_target = None;
    let result = match function.semantics() {
        FunctionSemantics::Builder => {
            check_builder(function, receiver.as_ref());
            Rc::new(ObjectOrigin::BuilderReturnedReceiver(invocation))
        }
        FunctionSemantics::AccessAndConfigure {
            accessor,
            return_type,
            ..
        } => {
            let container = require_receiver(function, receiver);
            let configured = Rc::new(ObjectOrigin::ConfigureReceiver {
                invocation: invocation.clone(),
                accessor,
            });
            analyzer
                .context_mut()
                .record_nested_object_access(container, Rc::clone(&configured));
            configure_target = Some(Rc::clone(&configured));
            match return_type {
                ConfigureReturnType::Unit => {
                    Rc::new(ObjectOrigin::NewObjectFromFunctionInvocation(invocation))
                }
                ConfigureReturnType::ConfiguredObject => configured,
            }
        }
        FunctionSemantics::AddAndConfigure { .. } => {
            let container = require_receiver(function, receiver);
            let added = Rc::new(ObjectOrigin::NewObjectFromFunctionInvocation(invocation));
            analyzer
                .context_mut()
                .record_addition(container, Rc::clone(&added));
            configure_target = Some(Rc::clone(&added));
            added
        }
        FunctionSemantics::Pure { .. } => {
            Rc::new(ObjectOrigin::NewObjectFromFunctionInvocation(invocation))
        }
    };

    for (parameter, argument) in binding.bindings() {
        let parameter = *parameter;
        if let ParameterSemantics::StoreValueInProperty(property) = parameter.semantics() {
            analyzer.context_mut().record_assignment(
                PropertyReferenceResolution {
                    receiver: Rc::clone(&result),
                    property,
                },
                Rc::clone(argument),
            );
        }
    }

    match (lambda, configure_target) {
        (Some(lambda), Some(target))
            if function
                .semantics()
                .configure_requirement()
                .is_some_and(|requirement| requirement.allows_block()) =>
        {
            analyze_nested_block(analyzer, target, lambda);
        }
        (Some(_), _) => analyzer.report(at, ErrorReason::UnusedConfigureLambda),
        (None, _)
            if function
                .semantics()
                .configure_requirement()
                .is_some_and(|requirement| requirement.requires_block()) =>
        {
            analyzer.report(at, ErrorReason::MissingConfigureLambda { function });
        }
        (None, _) => {}
    }

    result
}

fn check_builder(function: &SchemaFunction, receiver: Option<&Rc<ObjectOrigin<'_>>>) {
    let [parameter] = function.parameters() else {
        panic!(
            "builder function `{}` must take exactly one parameter",
            function.simple_name()
        );
    };
    assert!(
        matches!(
            parameter.semantics(),
            ParameterSemantics::StoreValueInProperty(_)
        ),
        "builder function `{}` must store its parameter into a property",
        function.simple_name()
    );
    assert!(
        receiver.is_some(),
        "builder function `{}` needs a receiver",
        function.simple_name()
    );
}

fn require_receiver<'s>(
    function: &SchemaFunction,
    receiver: Option<Rc<ObjectOrigin<'s>>>,
) -> Rc<ObjectOrigin<'s>> {
    let Some(receiver) = receiver else {
        panic!(
            "configure function `{}` needs a receiver",
            function.simple_name()
        );
    };
    receiver
}
