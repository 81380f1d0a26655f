//! The statement driver
//!
//! Statements are analyzed in program order. A statement that fails only
//! stops itself: the driver always moves on to the next one.

use std::rc::Rc;

use dcl_ast::{self as ast, Element, Expr, NodeMeta};
use dcl_schema::{TypeRefContext, check_is_assignable};

use crate::{
    context::LocalBinding,
    error::ErrorReason,
    origin::ObjectOrigin,
    resolver::{Analyzer, resolve_expr, resolve_property::resolve_assignable},
};

/// Analyzes the statements of the innermost scope
///
/// # Panics
///
/// Panics if a statement is an import or a raw function argument. A
/// well-formed parse never puts either inside a block.
pub fn analyze_statements(analyzer: &mut Analyzer<'_, '_>, statements: &[ast::ElementNode]) {
    for statement in statements {
        let at = statement.meta();
        match &**statement {
            Element::Assignment(assignment) => analyze_assignment(analyzer, assignment, at),
            Element::LocalValue(local) => analyze_local_value(analyzer, local, at),
            Element::Expr(expr) => analyze_expression_statement(analyzer, expr, at),
            Element::Block(_) => analyzer.report(at, ErrorReason::DanglingPureExpression),
            Element::Import(import) => {
                panic!("import of `{}` found inside a block", import.name())
            }
            Element::FunctionArgument(_) => {
                panic!("function argument found as a statement")
            }
        }
    }
}

/// Analyzes the body of a configure block with `receiver` as its receiver
///
/// A block nested deeper than the configured limit is reported and skipped.
pub fn analyze_nested_block<'s>(
    analyzer: &mut Analyzer<'s, '_>,
    receiver: Rc<ObjectOrigin<'s>>,
    block: &ast::BlockNode,
) {
    let limit = analyzer.settings().max_configure_depth();
    if analyzer.context().scopes().depth() > limit {
        analyzer.report(block.meta(), ErrorReason::ConfigureNestingTooDeep { limit });
        return;
    }

    let scope = analyzer.context_mut().enter_scope(receiver, block.meta());
    analyze_statements(analyzer, block.statements());
    analyzer.context_mut().leave_scope(scope);
}

fn analyze_assignment(analyzer: &mut Analyzer<'_, '_>, assignment: &ast::Assignment, at: NodeMeta) {
    let schema = analyzer.schema();
    let lhs = assignment.lhs();
    let rhs = assignment.rhs();

    let Some(target) = resolve_assignable(analyzer, lhs) else {
        analyzer.report(lhs.meta(), ErrorReason::UnresolvedAssignmentLhs);
        return;
    };

    let mut has_errors = false;
    if target.property.is_read_only() {
        analyzer.report(
            rhs.meta(),
            ErrorReason::ReadOnlyPropertyAssignment {
                property: target.property,
            },
        );
        has_errors = true;
    }

    let Some(value) = resolve_expr(analyzer, rhs) else {
        analyzer.report(rhs.meta(), ErrorReason::UnresolvedAssignmentRhs);
        return;
    };

    let actual = value.data_type(schema);
    if actual.is_unit() {
        analyzer.report(at, ErrorReason::UnitAssignment);
        has_errors = true;
    }

    let expected = schema.resolve_ref(target.property.type_ref());
    if !check_is_assignable(actual, expected) {
        analyzer.report(at, ErrorReason::AssignmentTypeMismatch { expected, actual });
        has_errors = true;
    }

    if !has_errors {
        analyzer.context_mut().record_assignment(target, value);
    }
}

fn analyze_local_value(analyzer: &mut Analyzer<'_, '_>, local: &ast::LocalValue, at: NodeMeta) {
    let Some(assigned) = resolve_expr(analyzer, local.rhs()) else {
        analyzer.report(at, ErrorReason::UnresolvedAssignmentRhs);
        return;
    };

    if assigned.data_type(analyzer.schema()).is_unit() {
        analyzer.report(at, ErrorReason::UnitAssignment);
    }

    let replaced = analyzer.context_mut().declare_local(LocalBinding {
        name: local.name().to_string(),
        declaration: at.id,
        assigned,
    });
    if replaced.is_some() {
        analyzer.report(
            at,
            ErrorReason::DuplicateLocalValue {
                name: local.name().to_string(),
            },
        );
    }
}

fn analyze_expression_statement(analyzer: &mut Analyzer<'_, '_>, expr: &ast::ExprNode, at: NodeMeta) {
    match &**expr {
        Expr::FunctionCall(_) => {
            let Some(result) = resolve_expr(analyzer, expr) else {
                return;
            };
            if analyzer.policy().is_dangling(&result) {
                analyzer.report(at, ErrorReason::DanglingPureExpression);
            }
        }
        Expr::PropertyAccess(_) | Expr::Literal(_) | Expr::This | Expr::Null => {
            analyzer.report(at, ErrorReason::DanglingPureExpression);
        }
    }
}
