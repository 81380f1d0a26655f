//! Syntax node wrapper with identity and source location

use std::{fmt, ops::Deref};

use dcl_shared::span::Span;

/// A parse-unique identifier for a syntax node
///
/// The parser assigns ids. Two distinct nodes of one parse never share an
/// id, which makes the id usable as a key for side tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The identity and location of a node, detached from its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeMeta {
    pub id: NodeId,
    pub span: Span,
}

/// A syntax element together with its id and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: Box<T>,
    meta: NodeMeta,
}

impl<T> Node<T> {
    #[must_use]
    pub fn new(value: T, span: Span, id: NodeId) -> Self {
        Self {
            value: Box::new(value),
            meta: NodeMeta { id, span },
        }
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.meta.id
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        self.meta.span
    }

    #[must_use]
    pub const fn meta(&self) -> NodeMeta {
        self.meta
    }

    #[must_use]
    pub fn take_value(self) -> T {
        *self.value
    }
}

impl<T> Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
