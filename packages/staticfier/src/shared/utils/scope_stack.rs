//! Scope stack for local name lookup
//!
//! Tracks nested lexical scopes (blocks, lambdas, loops, catch clauses)
//! during a method body traversal.

/// How a local name entered scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalKind {
    Parameter,
    Variable,
    /// `instanceof` / switch pattern binding. Flow scoping is approximated by
    /// lexical scoping, so lookups treat these with suspicion.
    PatternBinding,
}

/// Scope stack for managing local declarations
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<Vec<(String, LocalKind)>>,
}

impl ScopeStack {
    /// Create a new scope stack with a single root scope
    pub fn new() -> Self {
        Self {
            scopes: vec![Vec::new()],
        }
    }

    /// Push a new scope
    pub fn push(&mut self) {
        self.scopes.push(Vec::new());
    }

    /// Pop the current scope
    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare a name in the innermost scope
    pub fn declare(&mut self, name: impl Into<String>, kind: LocalKind) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.push((name.into(), kind));
        }
    }

    /// Innermost declaration of `name`
    pub fn lookup(&self, name: &str) -> Option<LocalKind> {
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(declared, _)| declared == name)
            .map(|(_, kind)| *kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Clear all scopes
    pub fn clear(&mut self) {
        self.scopes.clear();
        self.scopes.push(Vec::new());
    }
}
