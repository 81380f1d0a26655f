//! Helper functions for creating test data
//!
//! Building syntax trees by hand means inventing a span and a node id for
//! every node. These helpers do that so tests only spell out the structure
//! they care about.

pub mod test_ast;
pub mod test_schema;
