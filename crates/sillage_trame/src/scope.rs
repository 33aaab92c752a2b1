//! Lexical scope tree.
//!
//! Scopes are stored in an arena owned by [`ScopeStack`] and addressed by
//! [`ScopeId`]. Each scope records its parent, its children in creation
//! order, and the names declared directly inside it. The arena lives exactly
//! as long as the walk that builds it.

use sillage_carton::{CompactString, FxHashSet, SmallVec};

/// Unique identifier for a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The root scope of a walk
    pub const ROOT: Self = Self(0);

    /// Create a new scope ID
    #[inline(always)]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// A single lexical scope: a function body, a block, a loop body or a catch body.
#[derive(Debug, Default)]
pub struct LexicalScope {
    parent: Option<ScopeId>,
    children: SmallVec<[ScopeId; 4]>,
    identifiers: FxHashSet<CompactString>,
}

impl LexicalScope {
    fn with_parent(parent: Option<ScopeId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    /// Declare a name directly in this scope. Declaring twice is a no-op.
    #[inline]
    pub fn declare_identifier(&mut self, name: impl Into<CompactString>) {
        self.identifiers.insert(name.into());
    }

    /// Whether `name` is declared directly in this scope (ancestors are not consulted).
    #[inline]
    pub fn has_identifier(&self, name: &str) -> bool {
        self.identifiers.contains(name)
    }

    /// Parent scope, `None` for the root
    #[inline]
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Child scopes in the order they were entered
    #[inline]
    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// Names declared directly in this scope
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(|name| name.as_str())
    }
}

/// The scope arena plus the scope currently being walked.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<LexicalScope>,
    current: ScopeId,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Create a stack holding a fresh, empty root scope
    pub fn new() -> Self {
        Self {
            scopes: vec![LexicalScope::default()],
            current: ScopeId::ROOT,
        }
    }

    /// The scope currently being walked
    #[inline]
    pub fn current(&self) -> &LexicalScope {
        &self.scopes[self.current.as_u32() as usize]
    }

    #[inline]
    fn current_mut(&mut self) -> &mut LexicalScope {
        let idx = self.current.as_u32() as usize;
        &mut self.scopes[idx]
    }

    /// Current scope ID
    #[inline]
    pub const fn current_id(&self) -> ScopeId {
        self.current
    }

    /// Get a scope by ID
    #[inline]
    pub fn get(&self, id: ScopeId) -> Option<&LexicalScope> {
        self.scopes.get(id.as_u32() as usize)
    }

    /// Number of scopes created so far, root included
    #[inline]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Check if only the root scope exists
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Enter a new child of the current scope
    pub fn push(&mut self) -> ScopeId {
        let id = ScopeId::new(self.scopes.len() as u32);
        self.scopes.push(LexicalScope::with_parent(Some(self.current)));
        self.current_mut().children.push(id);
        self.current = id;
        id
    }

    /// Return to the parent of the current scope.
    ///
    /// # Panics
    ///
    /// Panics when called on the root scope; pushes and pops must balance.
    pub fn pop(&mut self) {
        match self.current().parent {
            Some(parent) => self.current = parent,
            None => panic!("ScopeStack: could not pop root scope"),
        }
    }

    /// Declare a name in the current scope
    #[inline]
    pub fn declare_identifier(&mut self, name: impl Into<CompactString>) {
        self.current_mut().declare_identifier(name);
    }

    /// Whether the current scope itself declares `name`
    #[inline]
    pub fn has_identifier(&self, name: &str) -> bool {
        self.current().has_identifier(name)
    }

    /// Whether the current scope or any of its ancestors declares `name`
    pub fn has_identifier_in_chain(&self, name: &str) -> bool {
        let mut next = Some(self.current);
        while let Some(id) = next {
            let scope = &self.scopes[id.as_u32() as usize];
            if scope.has_identifier(name) {
                return true;
            }
            next = scope.parent;
        }
        false
    }

    /// Distance of the current scope from the root
    pub fn depth(&self) -> u32 {
        let mut depth = 0u32;
        let mut next = self.current().parent;
        while let Some(id) = next {
            depth += 1;
            next = self.scopes[id.as_u32() as usize].parent;
        }
        depth
    }
}
