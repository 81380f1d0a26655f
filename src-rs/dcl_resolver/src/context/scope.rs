use std::rc::Rc;

use dcl_ast::NodeId;
use indexmap::IndexMap;

use crate::origin::ObjectOrigin;

/// Index of a scope in a [`ScopeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A `val` declared in a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBinding<'s> {
    /// The declared name
    pub name: String,
    /// The `val` statement that declared it
    pub declaration: NodeId,
    /// The origin of the value it was initialized with
    pub assigned: Rc<ObjectOrigin<'s>>,
}

impl<'s> LocalBinding<'s> {
    /// Returns the origin of a reference to this local
    #[must_use]
    pub fn as_origin(&self) -> ObjectOrigin<'s> {
        ObjectOrigin::FromLocalValue {
            name: self.name.clone(),
            assigned: Rc::clone(&self.assigned),
            declaration: self.declaration,
        }
    }
}

/// A lexical scope: the top-level block or the body of a configure block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisScope<'s> {
    receiver: Rc<ObjectOrigin<'s>>,
    node: NodeId,
    previous: Option<ScopeId>,
    locals: IndexMap<String, LocalBinding<'s>>,
}

impl<'s> AnalysisScope<'s> {
    /// Returns the object that unqualified names in this scope refer to
    #[must_use]
    pub const fn receiver(&self) -> &Rc<ObjectOrigin<'s>> {
        &self.receiver
    }

    /// Returns the block this scope was opened for
    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// Returns the scope that was innermost when this one was opened
    #[must_use]
    pub const fn previous(&self) -> Option<ScopeId> {
        self.previous
    }

    /// Returns the locals declared directly in this scope
    #[must_use]
    pub const fn locals(&self) -> &IndexMap<String, LocalBinding<'s>> {
        &self.locals
    }
}

/// Owns every scope of a pass
///
/// Scopes refer to each other by index. Leaving a scope only removes it from
/// the active stack, so the arena keeps a full record of the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeArena<'s> {
    scopes: Vec<AnalysisScope<'s>>,
    active: Vec<ScopeId>,
}

impl<'s> ScopeArena<'s> {
    /// Creates an arena without scopes
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scopes: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Opens a scope inside the current innermost scope
    pub fn enter(&mut self, receiver: Rc<ObjectOrigin<'s>>, node: NodeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(AnalysisScope {
            receiver,
            node,
            previous: self.active.last().copied(),
            locals: IndexMap::new(),
        });
        self.active.push(id);
        id
    }

    /// Closes the innermost scope
    ///
    /// # Panics
    ///
    /// Panics if `id` is not the innermost active scope.
    pub fn leave(&mut self, id: ScopeId) {
        let innermost = self.active.pop();
        assert_eq!(
            innermost,
            Some(id),
            "scopes must be left in the reverse order they were entered"
        );
    }

    /// Returns a scope by id
    #[must_use]
    pub fn get(&self, id: ScopeId) -> &AnalysisScope<'s> {
        &self.scopes[id.0]
    }

    /// Returns the innermost active scope
    ///
    /// # Panics
    ///
    /// Panics if no scope is active.
    #[must_use]
    pub fn current(&self) -> &AnalysisScope<'s> {
        let id = self
            .active
            .last()
            .copied()
            .expect("a scope is active while statements are analyzed");
        self.get(id)
    }

    /// Returns the active scopes, innermost first
    pub fn active_innermost_first(&self) -> impl Iterator<Item = &AnalysisScope<'s>> {
        self.active.iter().rev().map(|id| self.get(*id))
    }

    /// Returns the number of active scopes
    #[must_use]
    pub fn depth(&self) -> usize {
        self.active.len()
    }

    /// Looks `name` up in `scope` and then in the scopes it was opened in
    #[must_use]
    pub fn find_local<'a>(
        &'a self,
        scope: &'a AnalysisScope<'s>,
        name: &str,
    ) -> Option<&'a LocalBinding<'s>> {
        let mut scope = scope;
        loop {
            if let Some(local) = scope.locals.get(name) {
                return Some(local);
            }
            scope = self.get(scope.previous?);
        }
    }

    /// Declares a local in the innermost scope
    ///
    /// Returns the binding it replaced if the innermost scope already had a
    /// local with the same name. Locals of enclosing scopes are shadowed, not
    /// replaced.
    ///
    /// # Panics
    ///
    /// Panics if no scope is active.
    pub fn declare_local(&mut self, local: LocalBinding<'s>) -> Option<LocalBinding<'s>> {
        let id = self
            .active
            .last()
            .copied()
            .expect("a scope is active while statements are analyzed");
        self.scopes[id.0].locals.insert(local.name.clone(), local)
    }
}

#[cfg(test)]
mod tests {
    use dcl_ast::Literal;

    use super::*;

    fn receiver(node: u32) -> Rc<ObjectOrigin<'static>> {
        Rc::new(ObjectOrigin::TopLevelReceiver {
            node: NodeId::new(node),
        })
    }

    fn local(name: &str, value: i32) -> LocalBinding<'static> {
        LocalBinding {
            name: name.to_string(),
            declaration: NodeId::new(100),
            assigned: Rc::new(ObjectOrigin::Constant {
                value: Literal::Int(value),
                node: NodeId::new(101),
            }),
        }
    }

    #[test]
    fn locals_are_visible_in_nested_scopes() {
        let mut arena = ScopeArena::new();
        let outer = arena.enter(receiver(0), NodeId::new(0));
        assert_eq!(arena.declare_local(local("v", 1)), None);
        let inner = arena.enter(receiver(1), NodeId::new(1));

        let found = arena.find_local(arena.current(), "v").expect("local");
        assert_eq!(found, &local("v", 1));
        assert_eq!(arena.get(inner).previous(), Some(outer));

        arena.leave(inner);
        arena.leave(outer);
        assert_eq!(arena.depth(), 0);
    }

    #[test]
    fn shadowing_does_not_replace_the_outer_local() {
        let mut arena = ScopeArena::new();
        let outer = arena.enter(receiver(0), NodeId::new(0));
        arena.declare_local(local("v", 1));
        let inner = arena.enter(receiver(1), NodeId::new(1));

        assert_eq!(arena.declare_local(local("v", 2)), None);
        assert_eq!(
            arena.find_local(arena.current(), "v"),
            Some(&local("v", 2))
        );

        arena.leave(inner);
        assert_eq!(
            arena.find_local(arena.current(), "v"),
            Some(&local("v", 1))
        );
        arena.leave(outer);
    }

    #[test]
    fn redeclaring_in_the_same_scope_replaces() {
        let mut arena = ScopeArena::new();
        let scope = arena.enter(receiver(0), NodeId::new(0));
        arena.declare_local(local("v", 1));

        let replaced = arena.declare_local(local("v", 2));

        assert_eq!(replaced, Some(local("v", 1)));
        assert_eq!(arena.find_local(arena.get(scope), "v"), Some(&local("v", 2)));
    }

    #[test]
    fn active_scopes_are_listed_innermost_first() {
        let mut arena = ScopeArena::new();
        arena.enter(receiver(0), NodeId::new(0));
        arena.enter(receiver(1), NodeId::new(1));

        let nodes: Vec<_> = arena.active_innermost_first().map(AnalysisScope::node).collect();

        assert_eq!(nodes, [NodeId::new(1), NodeId::new(0)]);
    }

    #[test]
    #[should_panic(expected = "reverse order")]
    fn leaving_out_of_order_panics() {
        let mut arena = ScopeArena::new();
        let outer = arena.enter(receiver(0), NodeId::new(0));
        arena.enter(receiver(1), NodeId::new(1));
        arena.leave(outer);
    }
}
