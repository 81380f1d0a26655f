//! Import collection

use dcl_ast::{self as ast, NodeMeta};
use dcl_schema::FqName;
use indexmap::IndexMap;

use crate::{error::ErrorReason, resolver::Analyzer};

/// Builds the table from simple names to fully-qualified names
///
/// The first import of a simple name wins. A later import of a different
/// name with the same simple name is reported as ambiguous. Default imports
/// of the schema fill in simple names no import has claimed.
pub fn collect_imports(
    analyzer: &mut Analyzer<'_, '_>,
    imports: &[(&ast::Import, NodeMeta)],
) -> IndexMap<String, FqName> {
    let mut by_simple_name: IndexMap<String, FqName> = IndexMap::new();

    for (import, meta) in imports {
        let chain = import.name();
        let name = FqName::new(chain.qualifier(), chain.simple_name());

        match by_simple_name.get(name.simple_name()) {
            Some(existing) if existing != &name => {
                analyzer.report(*meta, ErrorReason::AmbiguousImport { name });
            }
            Some(_) => {}
            None => {
                by_simple_name.insert(name.simple_name().to_string(), name);
            }
        }
    }

    for default_import in analyzer.schema().default_imports() {
        by_simple_name
            .entry(default_import.simple_name().to_string())
            .or_insert_with(|| default_import.clone());
    }

    by_simple_name
}
