//! Variable scoping with a scope stack.
//!
//! Lookup walks the stack from the innermost scope outwards. A function call
//! pushes its scope on top of the caller's, so a function body sees the
//! caller's variables: scoping is dynamic and there are no closures.

use lull_diagnostic::ErrorKind;
use rustc_hash::FxHashMap;

use crate::Value;

/// Bindings of one block, loop or call.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

/// The scope stack of one run. The bottom scope is never popped.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn current_mut(&mut self) -> &mut Scope {
        if self.scopes.is_empty() {
            self.scopes.push(Scope::new());
        }
        let top = self.scopes.len() - 1;
        &mut self.scopes[top]
    }

    /// Bind `name` in the current scope. Fails if the current scope already
    /// has it; bindings in enclosing scopes are shadowed.
    pub fn define(&mut self, name: &str, value: Value) -> Result<(), ErrorKind> {
        let scope = self.current_mut();
        if scope.contains(name) {
            return Err(ErrorKind::AlreadyDefined {
                name: name.to_string(),
            });
        }
        scope.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrite the nearest binding of `name`, or create it in the current
    /// scope if no scope has it.
    pub fn assign(&mut self, name: &str, value: Value) {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.bindings.get_mut(name) {
                *slot = value;
                return;
            }
        }
        self.current_mut().bindings.insert(name.to_string(), value);
    }

    /// Look up the nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name))
            .cloned()
    }

    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
