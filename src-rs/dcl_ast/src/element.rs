//! Statement-level constructs

use crate::{
    expression::{ExprNode, FunctionArgument, PropertyAccess},
    naming::AccessChain,
    node::Node,
};

/// A node at statement level
///
/// `Import` only appears at the top of a script, and `FunctionArgument` is
/// only meaningful inside a call. A well-formed parse never puts either
/// inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Block(Block),
    Assignment(Assignment),
    LocalValue(LocalValue),
    Import(Import),
    FunctionArgument(FunctionArgument),
    Expr(ExprNode),
}

/// A node containing an element
pub type ElementNode = Node<Element>;

impl Element {
    #[must_use]
    pub const fn block(block: Block) -> Self {
        Self::Block(block)
    }

    #[must_use]
    pub const fn assignment(assignment: Assignment) -> Self {
        Self::Assignment(assignment)
    }

    #[must_use]
    pub const fn local_value(local: LocalValue) -> Self {
        Self::LocalValue(local)
    }

    #[must_use]
    pub const fn import(import: Import) -> Self {
        Self::Import(import)
    }

    #[must_use]
    pub const fn expr(expr: ExprNode) -> Self {
        Self::Expr(expr)
    }

    /// Returns the contained expression if this element is a bare expression
    #[must_use]
    pub const fn as_expr(&self) -> Option<&ExprNode> {
        match self {
            Self::Expr(expr) => Some(expr),
            Self::Block(_)
            | Self::Assignment(_)
            | Self::LocalValue(_)
            | Self::Import(_)
            | Self::FunctionArgument(_) => None,
        }
    }
}

/// An ordered list of statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    statements: Vec<ElementNode>,
}

/// A node containing a block
pub type BlockNode = Node<Block>;

impl Block {
    #[must_use]
    pub const fn new(statements: Vec<ElementNode>) -> Self {
        Self { statements }
    }

    #[must_use]
    pub fn statements(&self) -> &[ElementNode] {
        &self.statements
    }
}

/// `lhs = rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    lhs: Node<PropertyAccess>,
    rhs: ExprNode,
}

impl Assignment {
    #[must_use]
    pub const fn new(lhs: Node<PropertyAccess>, rhs: ExprNode) -> Self {
        Self { lhs, rhs }
    }

    #[must_use]
    pub const fn lhs(&self) -> &Node<PropertyAccess> {
        &self.lhs
    }

    #[must_use]
    pub const fn rhs(&self) -> &ExprNode {
        &self.rhs
    }
}

/// `val name = rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalValue {
    name: String,
    rhs: ExprNode,
}

impl LocalValue {
    #[must_use]
    pub const fn new(name: String, rhs: ExprNode) -> Self {
        Self { name, rhs }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn rhs(&self) -> &ExprNode {
        &self.rhs
    }
}

/// `import a.b.C`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    name: AccessChain,
}

impl Import {
    #[must_use]
    pub const fn new(name: AccessChain) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(&self) -> &AccessChain {
        &self.name
    }
}

impl From<ExprNode> for Element {
    fn from(expr: ExprNode) -> Self {
        Self::Expr(expr)
    }
}
