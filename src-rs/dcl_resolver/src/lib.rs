//! DCL Resolver
//!
//! This crate resolves the syntax tree of a declarative configuration script
//! against an [`AnalysisSchema`]. It works out what every name and call in the
//! script refers to and records the effect of each statement:
//!
//! - property assignments, keyed by the property slot they write
//! - objects added to containers by "add and configure" functions
//! - sub-objects reached by "access and configure" functions
//!
//! Every value is described by an [`ObjectOrigin`], a node of a provenance
//! graph rooted at the top-level receiver.
//!
//! # Errors
//!
//! Problems in the script never stop a pass. They are collected as
//! [`ResolutionError`]s in the [`ResolutionResult`], next to everything that
//! could still be resolved.
//!
//! # Example
//!
//! ```ignore
//! let result = dcl_resolver::resolve(&schema, &trees);
//!
//! for error in result.errors() {
//!     eprintln!("{error}");
//! }
//! ```

use std::rc::Rc;

use dcl_ast::{self as ast, Element, NodeMeta};
use dcl_schema::AnalysisSchema;

use crate::resolver::Analyzer;

pub mod context;
pub mod dangling;
pub mod error;
pub mod origin;
mod resolver;
pub mod result;
pub mod settings;
pub mod trace;

#[cfg(test)]
mod test;

pub use crate::dangling::{DanglingExpressionPolicy, DefaultDanglingPolicy};
pub use crate::error::{ErrorReason, ResolutionError};
pub use crate::origin::ObjectOrigin;
pub use crate::result::ResolutionResult;
pub use crate::settings::ResolverSettings;
pub use crate::trace::{NoTrace, ResolutionTracer};

/// Resolves a script with the default settings and dangling policy
///
/// `trees` holds the top-level nodes of one script: any number of imports and
/// exactly one block.
///
/// # Panics
///
/// Panics if `trees` does not hold exactly one block, if it holds anything
/// other than imports besides that block, or if the schema is inconsistent.
#[must_use]
pub fn resolve<'s>(schema: &'s AnalysisSchema, trees: &[ast::ElementNode]) -> ResolutionResult<'s> {
    resolve_with(
        schema,
        trees,
        ResolverSettings::default(),
        &DefaultDanglingPolicy,
        &mut NoTrace,
    )
}

/// Resolves a script
///
/// `policy` decides which bare call statements are dangling. `tracer` is told
/// about every resolved node and every error.
///
/// # Panics
///
/// Panics if `trees` does not hold exactly one block, if it holds anything
/// other than imports besides that block, or if the schema is inconsistent.
#[must_use]
pub fn resolve_with<'s>(
    schema: &'s AnalysisSchema,
    trees: &[ast::ElementNode],
    settings: ResolverSettings,
    policy: &dyn DanglingExpressionPolicy,
    tracer: &mut dyn ResolutionTracer<'s>,
) -> ResolutionResult<'s> {
    let mut imports: Vec<(&ast::Import, NodeMeta)> = Vec::new();
    let mut blocks: Vec<(&ast::Block, NodeMeta)> = Vec::new();
    for tree in trees {
        match &**tree {
            Element::Import(import) => imports.push((import, tree.meta())),
            Element::Block(block) => blocks.push((block, tree.meta())),
            Element::Assignment(_)
            | Element::LocalValue(_)
            | Element::FunctionArgument(_)
            | Element::Expr(_) => panic!("only imports and one block may appear at the top level"),
        }
    }
    let [(top_level_block, block_meta)] = blocks.as_slice() else {
        panic!(
            "a script has exactly one top-level block, found {}",
            blocks.len()
        );
    };

    tracing::debug!(
        imports = imports.len(),
        statements = top_level_block.statements().len(),
        "resolving script"
    );

    let mut analyzer = Analyzer::new(schema, settings, policy, tracer);

    let import_table = resolver::collect_imports(&mut analyzer, &imports);
    analyzer.context_mut().set_imports(import_table);

    let top_level_receiver = Rc::new(ObjectOrigin::TopLevelReceiver {
        node: block_meta.id,
    });
    let scope = analyzer
        .context_mut()
        .enter_scope(Rc::clone(&top_level_receiver), *block_meta);
    resolver::analyze_statements(&mut analyzer, top_level_block.statements());
    analyzer.context_mut().leave_scope(scope);

    let result = analyzer.into_result(top_level_receiver);
    tracing::debug!(
        assignments = result.assignments().len(),
        additions = result.additions().len(),
        errors = result.errors().len(),
        "resolved script"
    );
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test::construct::{test_ast, test_schema};

    #[test]
    fn resolving_twice_gives_the_same_result() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![
            test_ast::local_value("v", test_ast::int(11)),
            test_ast::assign("version", test_ast::name("v")),
            test_ast::stmt(test_ast::call(
                "plugin",
                vec![test_ast::arg(test_ast::string("a"))],
            )),
            test_ast::stmt(test_ast::call(
                "java",
                vec![test_ast::lambda(vec![test_ast::assign(
                    "sourceCompatibility",
                    test_ast::int(17),
                )])],
            )),
            test_ast::assign("description", test_ast::string("read only")),
        ]);

        let first = resolve(&schema, &trees);
        let second = resolve(&schema, &trees);

        assert_eq!(first, second);
        assert_eq!(first.errors().len(), 1);
    }

    #[test]
    fn top_level_receiver_is_the_block() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![]);

        let result = resolve(&schema, &trees);

        assert_eq!(result.top_level_receiver().node(), trees[0].id());
        assert!(result.is_ok());
    }

    #[test]
    #[should_panic(expected = "exactly one top-level block")]
    fn script_without_a_block_panics() {
        let schema = test_schema::project_schema();
        let trees = vec![test_ast::import("org.example.Dependency")];

        let _ = resolve(&schema, &trees);
    }

    #[test]
    #[should_panic(expected = "found inside a block")]
    fn import_inside_a_block_panics() {
        let schema = test_schema::project_schema();
        let trees = test_ast::script(vec![test_ast::import("org.example.Dependency")]);

        let _ = resolve(&schema, &trees);
    }
}
