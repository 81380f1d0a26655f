//! Property access resolution
//!
//! Unqualified names are looked up scope by scope, innermost first. Within a
//! scope, a local value shadows a property of the scope's receiver. Imported
//! external objects come last. A qualified access `r.n` looks `n` up on `r`
//! and also tries the whole chain as the name of an external object.

use std::rc::Rc;

use dcl_ast::{self as ast, Expr, NodeId, NodeMeta};
use dcl_schema::{AnalysisSchema, DataProperty, DataType, ExternalObjectProviderKey, FqName};

use crate::{
    context::LocalBinding,
    error::ErrorReason,
    origin::{ObjectOrigin, PropertyReferenceResolution},
    resolver::{Analyzer, resolve_expr},
};

/// The first thing a name was found to refer to
#[derive(Debug, Clone)]
enum PropertyCandidate<'s> {
    Local(LocalBinding<'s>),
    Property(PropertyReferenceResolution<'s>),
    External {
        name: FqName,
        key: &'s ExternalObjectProviderKey,
    },
}

impl<'s> PropertyCandidate<'s> {
    fn into_origin(self, node: NodeId) -> ObjectOrigin<'s> {
        match self {
            Self::Local(local) => local.as_origin(),
            Self::Property(PropertyReferenceResolution { receiver, property }) => {
                ObjectOrigin::PropertyReference {
                    receiver,
                    property,
                    node,
                }
            }
            Self::External { name, key } => ObjectOrigin::External { name, key, node },
        }
    }
}

#[derive(Debug, Clone)]
enum PropertyLookup<'s> {
    Found(PropertyCandidate<'s>),
    NotFound,
    /// The explicit receiver failed to resolve and its error is already
    /// reported
    ReceiverUnresolved,
}

/// Resolves a property access used as a value
pub fn resolve_property_access<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    access: &ast::PropertyAccess,
    at: NodeMeta,
) -> Option<Rc<ObjectOrigin<'s>>> {
    match lookup(analyzer, access) {
        PropertyLookup::Found(candidate) => Some(Rc::new(candidate.into_origin(at.id))),
        PropertyLookup::NotFound => {
            analyzer.report(
                at,
                ErrorReason::UnresolvedReference {
                    reference: access.to_string(),
                },
            );
            None
        }
        PropertyLookup::ReceiverUnresolved => None,
    }
}

/// Resolves the receiver of a call without reporting a failure
///
/// A call receiver that is a chain of names may spell a package rather than
/// an object, so not finding it is not an error by itself.
pub fn resolve_call_receiver<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    receiver: &ast::ExprNode,
) -> Option<Rc<ObjectOrigin<'s>>> {
    let Expr::PropertyAccess(access) = &**receiver else {
        return resolve_expr(analyzer, receiver);
    };

    let origin = match lookup(analyzer, access) {
        PropertyLookup::Found(candidate) => Some(Rc::new(candidate.into_origin(receiver.id()))),
        PropertyLookup::NotFound | PropertyLookup::ReceiverUnresolved => None,
    };
    analyzer.trace_expression(receiver.id(), origin.as_ref());
    origin
}

/// Resolves the target of an assignment
///
/// Locals and external objects are found by the same lookup as values, but
/// assigning to them is an error.
pub fn resolve_assignable<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    lhs: &ast::Node<ast::PropertyAccess>,
) -> Option<PropertyReferenceResolution<'s>> {
    let at = lhs.meta();
    let target = match lookup(analyzer, lhs) {
        PropertyLookup::Found(PropertyCandidate::Property(target)) => Some(target),
        PropertyLookup::Found(PropertyCandidate::Local(local)) => {
            analyzer.report(at, ErrorReason::ValReassignment { name: local.name });
            None
        }
        PropertyLookup::Found(PropertyCandidate::External { name, .. }) => {
            analyzer.report(at, ErrorReason::ExternalReassignment { name });
            None
        }
        PropertyLookup::NotFound => {
            analyzer.report(
                at,
                ErrorReason::UnresolvedReference {
                    reference: lhs.to_string(),
                },
            );
            None
        }
        PropertyLookup::ReceiverUnresolved => None,
    };
    analyzer.trace_assignable(lhs.id(), target.as_ref());
    target
}

fn lookup<'s>(analyzer: &mut Analyzer<'s, '_>, access: &ast::PropertyAccess) -> PropertyLookup<'s> {
    match access.receiver() {
        None => lookup_unqualified(analyzer, access.name()),
        Some(receiver) => lookup_qualified(analyzer, access, receiver),
    }
}

fn lookup_unqualified<'s>(analyzer: &Analyzer<'s, '_>, name: &str) -> PropertyLookup<'s> {
    let schema = analyzer.schema();
    let context = analyzer.context();
    let scopes = context.scopes();

    for scope in scopes.active_innermost_first() {
        if let Some(local) = scopes.find_local(scope, name) {
            return PropertyLookup::Found(PropertyCandidate::Local(local.clone()));
        }
        if let Some(property) = visible_property(schema, scope.receiver(), name) {
            return PropertyLookup::Found(PropertyCandidate::Property(
                PropertyReferenceResolution {
                    receiver: Rc::clone(scope.receiver()),
                    property,
                },
            ));
        }
    }

    if let Some(imported) = context.imported(name) {
        if let Some(key) = schema.external_object(imported) {
            return PropertyLookup::Found(PropertyCandidate::External {
                name: imported.clone(),
                key,
            });
        }
    }

    PropertyLookup::NotFound
}

fn lookup_qualified<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    access: &ast::PropertyAccess,
    receiver: &ast::ExprNode,
) -> PropertyLookup<'s> {
    let schema = analyzer.schema();

    // receivers that are themselves property accesses are looked up silently
    // so that `org.example.thing` reports one error, not three
    let (receiver_origin, receiver_reported) = match &**receiver {
        Expr::PropertyAccess(inner) => {
            let (origin, reported) = match lookup(analyzer, inner) {
                PropertyLookup::Found(candidate) => {
                    (Some(Rc::new(candidate.into_origin(receiver.id()))), false)
                }
                PropertyLookup::NotFound => (None, false),
                PropertyLookup::ReceiverUnresolved => (None, true),
            };
            analyzer.trace_expression(receiver.id(), origin.as_ref());
            (origin, reported)
        }
        Expr::FunctionCall(_) | Expr::Literal(_) | Expr::This | Expr::Null => {
            let origin = resolve_expr(analyzer, receiver);
            let reported = origin.is_none();
            (origin, reported)
        }
    };

    if let Some(receiver_origin) = &receiver_origin {
        if let Some(property) = visible_property(schema, receiver_origin, access.name()) {
            return PropertyLookup::Found(PropertyCandidate::Property(
                PropertyReferenceResolution {
                    receiver: Rc::clone(receiver_origin),
                    property,
                },
            ));
        }
    }

    if let Some(chain) = access.as_access_chain() {
        let name = FqName::new(chain.qualifier(), chain.simple_name());
        if let Some(key) = schema.external_object(&name) {
            return PropertyLookup::Found(PropertyCandidate::External { name, key });
        }
    }

    if receiver_reported {
        PropertyLookup::ReceiverUnresolved
    } else {
        PropertyLookup::NotFound
    }
}

fn visible_property<'s>(
    schema: &'s AnalysisSchema,
    receiver: &ObjectOrigin<'s>,
    name: &str,
) -> Option<&'s DataProperty> {
    match receiver.data_type(schema) {
        DataType::Class(class) => class.visible_property(name),
        DataType::Constant(_) | DataType::Unit | DataType::Null => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::ErrorReason,
        origin::ObjectOrigin,
        resolve,
        test::{
            construct::{test_ast, test_schema},
            error_reasons,
        },
    };

    #[test]
    fn default_import_reaches_an_external_object() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::assign(
            "isCi",
            test_ast::access(test_ast::name("env"), "ci"),
        )]);

        let result = resolve(&schema, &trees);

        assert!(result.is_ok());
        let value = result.assignments().values().next().expect("one assignment");
        let ObjectOrigin::PropertyReference { receiver, property, .. } = &**value else {
            panic!("expected a property reference, found {value:?}");
        };
        assert_eq!(property.name(), "ci");
        assert!(matches!(
            &**receiver,
            ObjectOrigin::External { name, .. } if name.to_string() == "org.example.env"
        ));
    }

    #[test]
    fn qualified_chain_reaches_an_external_object() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::assign(
            "isCi",
            test_ast::chain("org.example.env.ci"),
        )]);

        let result = resolve(&schema, &trees);

        assert!(result.is_ok());
        assert_eq!(result.assignments().len(), 1);
    }

    #[test]
    fn unresolved_chain_is_reported_once() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::assign("version", test_ast::chain("a.b.c"))]);

        let result = resolve(&schema, &trees);

        assert_eq!(
            error_reasons(&result),
            vec![
                ErrorReason::UnresolvedReference {
                    reference: "a.b.c".to_string()
                },
                ErrorReason::UnresolvedAssignmentRhs,
            ]
        );
    }

    #[test]
    fn this_refers_to_the_current_receiver() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::assign(
            "version",
            test_ast::access(test_ast::this(), "version"),
        )]);

        let result = resolve(&schema, &trees);

        assert!(result.is_ok());
        let value = result.assignments().values().next().expect("one assignment");
        let ObjectOrigin::PropertyReference { receiver, .. } = &**value else {
            panic!("expected a property reference, found {value:?}");
        };
        assert_eq!(receiver, result.top_level_receiver());
    }

    #[test]
    fn external_object_cannot_be_reassigned() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::assign("env", test_ast::null())]);

        let result = resolve(&schema, &trees);

        assert_eq!(
            error_reasons(&result),
            vec![
                ErrorReason::ExternalReassignment {
                    name: test_schema::fq("org.example.env")
                },
                ErrorReason::UnresolvedAssignmentLhs,
            ]
        );
    }

    #[test]
    fn hidden_property_is_not_visible() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::stmt(test_ast::call(
            "plugin",
            vec![test_ast::arg(test_ast::name("java"))],
        ))]);

        let result = resolve(&schema, &trees);

        assert_eq!(
            error_reasons(&result),
            vec![ErrorReason::UnresolvedReference {
                reference: "java".to_string()
            }]
        );
    }

    #[test]
    fn enclosing_locals_and_properties_are_visible_in_a_configure_block() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![
            test_ast::local_value("level", test_ast::int(17)),
            test_ast::stmt(test_ast::call(
                "plugin",
                vec![
                    test_ast::arg(test_ast::string("a")),
                    test_ast::lambda(vec![test_ast::assign("enabled", test_ast::name("isCi"))]),
                ],
            )),
            test_ast::stmt(test_ast::call(
                "java",
                vec![test_ast::lambda(vec![test_ast::assign(
                    "sourceCompatibility",
                    test_ast::name("level"),
                )])],
            )),
        ]);

        let result = resolve(&schema, &trees);

        assert!(result.is_ok());
        let enabled = result
            .assignments()
            .iter()
            .find(|(slot, _)| slot.property.name() == "enabled")
            .map(|(_, value)| value)
            .expect("enabled is assigned");
        let ObjectOrigin::PropertyReference { receiver, .. } = &**enabled else {
            panic!("expected a property reference, found {enabled:?}");
        };
        assert_eq!(receiver, result.top_level_receiver());
    }

    #[test]
    fn unknown_property_of_a_configured_object_is_reported() {
        let schema = test_schema::project_schema();
        let lhs = test_ast::property(Some(test_ast::call("settings", vec![])), "missing");
        let trees = test_ast::script(vec![test_ast::assign_to(lhs, test_ast::string("x"))]);

        let result = resolve(&schema, &trees);

        assert_eq!(
            error_reasons(&result),
            vec![
                ErrorReason::UnresolvedReference {
                    reference: "settings().missing".to_string()
                },
                ErrorReason::UnresolvedAssignmentLhs,
            ]
        );
    }
}
