#![allow(missing_docs)]
// syntax nodes should be self-documenting

//! Syntax tree definitions for the dcl configuration language.
//!
//! These are the generic tree nodes a parser hands to the resolver. Every node
//! carries a [`NodeId`] that is stable for the lifetime of the parse, so later
//! stages can refer to nodes without holding on to them.

pub mod element;
pub mod expression;
pub mod naming;
pub mod node;

pub use element::{Assignment, Block, BlockNode, Element, ElementNode, Import, LocalValue};
pub use expression::{
    ArgumentNode, Expr, ExprNode, FunctionArgument, FunctionCall, Literal, PropertyAccess,
};
pub use naming::AccessChain;
pub use node::{Node, NodeId, NodeMeta};
