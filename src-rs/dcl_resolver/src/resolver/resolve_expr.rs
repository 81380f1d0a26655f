//! Expression resolution

use std::rc::Rc;

use dcl_ast::{self as ast, Expr};

use crate::{
    origin::ObjectOrigin,
    resolver::{Analyzer, resolve_function_call, resolve_property},
};

/// Resolves an expression to the origin of its value
///
/// Returns `None` if the expression cannot be resolved. The reason has been
/// reported by then.
pub fn resolve_expr<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    expr: &ast::ExprNode,
) -> Option<Rc<ObjectOrigin<'s>>> {
    let node = expr.id();
    let origin = match &**expr {
        Expr::PropertyAccess(access) => {
            resolve_property::resolve_property_access(analyzer, access, expr.meta())
        }
        Expr::FunctionCall(call) => {
            resolve_function_call::resolve_function_call(analyzer, call, expr.meta())
        }
        Expr::Literal(literal) => Some(Rc::new(ObjectOrigin::Constant {
            value: literal.clone(),
            node,
        })),
        Expr::This => Some(Rc::clone(
            analyzer.context().scopes().current().receiver(),
        )),
        Expr::Null => Some(Rc::new(ObjectOrigin::Null { node })),
    };
    analyzer.trace_expression(node, origin.as_ref());
    origin
}
