use std::sync::atomic::{AtomicU32, Ordering};

use dcl_ast as ast;
use dcl_shared::span::Span;

static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(1);

fn node<T>(value: T) -> ast::Node<T> {
    let id = ast::NodeId::new(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed));
    ast::Node::new(value, Span::random_span(), id)
}

// SCRIPTS AND STATEMENTS

/// A script made of a single top-level block
pub fn script(statements: Vec<ast::ElementNode>) -> Vec<ast::ElementNode> {
    vec![node(ast::Element::block(ast::Block::new(statements)))]
}

/// A script with imports ahead of its top-level block
pub fn script_with_imports(
    imports: &[&str],
    statements: Vec<ast::ElementNode>,
) -> Vec<ast::ElementNode> {
    let mut trees: Vec<_> = imports.iter().map(|name| import(name)).collect();
    trees.extend(script(statements));
    trees
}

pub fn import(dotted_name: &str) -> ast::ElementNode {
    let chain = ast::AccessChain::new(dotted_name.split('.').map(str::to_string).collect());
    node(ast::Element::import(ast::Import::new(chain)))
}

pub fn block(statements: Vec<ast::ElementNode>) -> ast::BlockNode {
    node(ast::Block::new(statements))
}

/// `name = rhs` for an unqualified `name`
pub fn assign(name: &str, rhs: ast::ExprNode) -> ast::ElementNode {
    assign_to(property(None, name), rhs)
}

pub fn assign_to(lhs: ast::Node<ast::PropertyAccess>, rhs: ast::ExprNode) -> ast::ElementNode {
    node(ast::Element::assignment(ast::Assignment::new(lhs, rhs)))
}

pub fn local_value(name: &str, rhs: ast::ExprNode) -> ast::ElementNode {
    node(ast::Element::local_value(ast::LocalValue::new(
        name.to_string(),
        rhs,
    )))
}

/// A bare expression statement
pub fn stmt(expr: ast::ExprNode) -> ast::ElementNode {
    node(ast::Element::expr(expr))
}

// EXPRESSIONS

pub fn property(receiver: Option<ast::ExprNode>, name: &str) -> ast::Node<ast::PropertyAccess> {
    node(ast::PropertyAccess::new(receiver, name.to_string()))
}

/// An unqualified name
pub fn name(name: &str) -> ast::ExprNode {
    node(ast::Expr::property_access(ast::PropertyAccess::new(
        None,
        name.to_string(),
    )))
}

pub fn access(receiver: ast::ExprNode, name: &str) -> ast::ExprNode {
    node(ast::Expr::property_access(ast::PropertyAccess::new(
        Some(receiver),
        name.to_string(),
    )))
}

/// A chain of property accesses such as `a.b.c`
pub fn chain(dotted_name: &str) -> ast::ExprNode {
    let mut parts = dotted_name.split('.');
    let first = parts.next().map_or_else(|| name(""), name);
    parts.fold(first, access)
}

pub fn call(name: &str, args: Vec<ast::ArgumentNode>) -> ast::ExprNode {
    node(ast::Expr::function_call(ast::FunctionCall::new(
        None,
        name.to_string(),
        args,
    )))
}

pub fn call_on(receiver: ast::ExprNode, name: &str, args: Vec<ast::ArgumentNode>) -> ast::ExprNode {
    node(ast::Expr::function_call(ast::FunctionCall::new(
        Some(receiver),
        name.to_string(),
        args,
    )))
}

pub fn arg(expr: ast::ExprNode) -> ast::ArgumentNode {
    node(ast::FunctionArgument::positional(expr))
}

pub fn named(name: &str, expr: ast::ExprNode) -> ast::ArgumentNode {
    node(ast::FunctionArgument::named(name.to_string(), expr))
}

pub fn lambda(statements: Vec<ast::ElementNode>) -> ast::ArgumentNode {
    lambda_of(block(statements))
}

pub fn lambda_of(block: ast::BlockNode) -> ast::ArgumentNode {
    node(ast::FunctionArgument::lambda(block))
}

// LITERALS

pub fn int(value: i32) -> ast::ExprNode {
    node(ast::Expr::literal(ast::Literal::Int(value)))
}

pub fn long(value: i64) -> ast::ExprNode {
    node(ast::Expr::literal(ast::Literal::Long(value)))
}

pub fn string(value: &str) -> ast::ExprNode {
    node(ast::Expr::literal(ast::Literal::String(value.to_string())))
}

pub fn boolean(value: bool) -> ast::ExprNode {
    node(ast::Expr::literal(ast::Literal::Boolean(value)))
}

pub fn this() -> ast::ExprNode {
    node(ast::Expr::This)
}

pub fn null() -> ast::ExprNode {
    node(ast::Expr::Null)
}
