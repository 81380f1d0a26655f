//! Expression constructs

use std::fmt;

use crate::{element::BlockNode, naming::AccessChain, node::Node};

/// An expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `name` or `receiver.name`
    PropertyAccess(PropertyAccess),
    /// `name(args)` or `receiver.name(args)`, optionally followed by a block
    FunctionCall(FunctionCall),
    Literal(Literal),
    This,
    Null,
}

/// A node containing an expression
pub type ExprNode = Node<Expr>;

impl Expr {
    #[must_use]
    pub const fn property_access(access: PropertyAccess) -> Self {
        Self::PropertyAccess(access)
    }

    #[must_use]
    pub const fn function_call(call: FunctionCall) -> Self {
        Self::FunctionCall(call)
    }

    #[must_use]
    pub const fn literal(literal: Literal) -> Self {
        Self::Literal(literal)
    }

    /// Returns the dotted name this expression spells, if it is a chain of
    /// plain property accesses such as `a.b.c`
    #[must_use]
    pub fn as_access_chain(&self) -> Option<AccessChain> {
        match self {
            Self::PropertyAccess(access) => access.as_access_chain(),
            Self::FunctionCall(_) | Self::Literal(_) | Self::This | Self::Null => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyAccess(access) => write!(f, "{access}"),
            Self::FunctionCall(call) => write!(f, "{call}"),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::This => write!(f, "this"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<PropertyAccess> for Expr {
    fn from(access: PropertyAccess) -> Self {
        Self::PropertyAccess(access)
    }
}

impl From<FunctionCall> for Expr {
    fn from(call: FunctionCall) -> Self {
        Self::FunctionCall(call)
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// A property access, with or without an explicit receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccess {
    receiver: Option<ExprNode>,
    name: String,
}

impl PropertyAccess {
    #[must_use]
    pub const fn new(receiver: Option<ExprNode>, name: String) -> Self {
        Self { receiver, name }
    }

    #[must_use]
    pub const fn receiver(&self) -> Option<&ExprNode> {
        self.receiver.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// See [`Expr::as_access_chain`]
    #[must_use]
    pub fn as_access_chain(&self) -> Option<AccessChain> {
        match &self.receiver {
            None => Some(AccessChain::new(vec![self.name.clone()])),
            Some(receiver) => receiver
                .as_access_chain()
                .map(|chain| chain.with_part(&self.name)),
        }
    }
}

impl fmt::Display for PropertyAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.receiver {
            Some(receiver) => write!(f, "{}.{}", **receiver, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A function call
///
/// Trailing configure blocks are part of `args` as
/// [`FunctionArgument::Lambda`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    receiver: Option<ExprNode>,
    name: String,
    args: Vec<ArgumentNode>,
}

impl FunctionCall {
    #[must_use]
    pub const fn new(receiver: Option<ExprNode>, name: String, args: Vec<ArgumentNode>) -> Self {
        Self {
            receiver,
            name,
            args,
        }
    }

    #[must_use]
    pub const fn receiver(&self) -> Option<&ExprNode> {
        self.receiver.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn args(&self) -> &[ArgumentNode] {
        &self.args
    }

    /// Returns the positional and named arguments, skipping lambdas
    pub fn value_args(&self) -> impl Iterator<Item = &ArgumentNode> {
        self.args.iter().filter(|arg| !arg.is_lambda())
    }

    /// Returns the configure blocks attached to the call
    pub fn lambdas(&self) -> impl Iterator<Item = &BlockNode> {
        self.args.iter().filter_map(|arg| match &**arg {
            FunctionArgument::Lambda(block) => Some(block),
            FunctionArgument::Positional(_) | FunctionArgument::Named { .. } => None,
        })
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(receiver) = &self.receiver {
            write!(f, "{}.", **receiver)?;
        }
        write!(f, "{}(", self.name)?;
        let mut first = true;
        for arg in self.value_args() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            match &**arg {
                FunctionArgument::Positional(expr) => write!(f, "{}", **expr)?,
                FunctionArgument::Named { name, expr } => write!(f, "{name} = {}", **expr)?,
                FunctionArgument::Lambda(_) => {}
            }
        }
        write!(f, ")")?;
        if self.lambdas().next().is_some() {
            write!(f, " {{ ... }}")?;
        }
        Ok(())
    }
}

/// An argument in a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionArgument {
    Positional(ExprNode),
    Named { name: String, expr: ExprNode },
    /// A trailing configure block
    Lambda(BlockNode),
}

/// A node containing a function argument
pub type ArgumentNode = Node<FunctionArgument>;

impl FunctionArgument {
    #[must_use]
    pub const fn positional(expr: ExprNode) -> Self {
        Self::Positional(expr)
    }

    #[must_use]
    pub const fn named(name: String, expr: ExprNode) -> Self {
        Self::Named { name, expr }
    }

    #[must_use]
    pub const fn lambda(block: BlockNode) -> Self {
        Self::Lambda(block)
    }

    #[must_use]
    pub const fn is_lambda(&self) -> bool {
        matches!(self, Self::Lambda(_))
    }
}

/// A literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i32),
    Long(i64),
    String(String),
    Boolean(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}L"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use dcl_shared::span::Span;

    use super::*;
    use crate::{element::Block, node::NodeId};

    fn node<T>(value: T) -> Node<T> {
        Node::new(value, Span::random_span(), NodeId::new(0))
    }

    fn access(receiver: Option<ExprNode>, name: &str) -> ExprNode {
        node(Expr::property_access(PropertyAccess::new(
            receiver,
            name.to_string(),
        )))
    }

    #[test]
    fn plain_chain_is_an_access_chain() {
        let expr = access(Some(access(Some(access(None, "org")), "example")), "Foo");

        let chain = expr.as_access_chain().expect("chain");

        assert_eq!(chain.name_parts(), ["org", "example", "Foo"]);
    }

    #[test]
    fn call_in_the_middle_breaks_the_chain() {
        let call = node(Expr::function_call(FunctionCall::new(
            None,
            "f".to_string(),
            vec![],
        )));
        let expr = access(Some(call), "name");

        assert_eq!(expr.as_access_chain(), None);
    }

    #[test]
    fn this_is_not_an_access_chain() {
        let expr = access(Some(node(Expr::This)), "name");
        assert_eq!(expr.as_access_chain(), None);
    }

    #[test]
    fn call_display_hides_lambda_body() {
        let call = FunctionCall::new(
            Some(access(None, "app")),
            "plugin".to_string(),
            vec![
                node(FunctionArgument::positional(node(Expr::literal(
                    Literal::String("java".to_string()),
                )))),
                node(FunctionArgument::named(
                    "version".to_string(),
                    node(Expr::literal(Literal::Long(3))),
                )),
                node(FunctionArgument::lambda(node(Block::new(vec![])))),
            ],
        );

        assert_eq!(call.to_string(), "app.plugin(\"java\", version = 3L) { ... }");
        assert_eq!(call.value_args().count(), 2);
        assert_eq!(call.lambdas().count(), 1);
    }
}
