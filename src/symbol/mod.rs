//==================================================
// File: symbol/mod.rs
//==================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Names and scoped bindings of the interpreter
// Objective: Provide the Symbol key type and a global scope plus a stack
//            of call-frame scopes
//==================================================

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use crate::types::ValueRef;

//==================================================
// Section 1.0 - Symbol
//==================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Symbol(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol(value.to_string())
    }
}

impl Deref for Symbol {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//==================================================
// Section 2.0 - Symbol Table
//==================================================

type Scope = HashMap<Symbol, ValueRef>;

/// Global bindings plus one scope per active call frame.
///
/// Lookups see the innermost frame first, then globals. Intermediate
/// frames are not visible.
#[derive(Debug, Default)]
pub struct SymbolTable {
    globals: Scope,
    frames: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<ValueRef> {
        self.frames
            .last()
            .and_then(|scope| scope.get(name))
            .or_else(|| self.globals.get(name))
            .cloned()
    }

    /// Binds in the innermost frame, or globally outside any call.
    pub fn put(&mut self, name: impl Into<Symbol>, value: ValueRef) -> Option<ValueRef> {
        let scope = self.frames.last_mut().unwrap_or(&mut self.globals);
        scope.insert(name.into(), value)
    }

    pub fn put_global(&mut self, name: impl Into<Symbol>, value: ValueRef) -> Option<ValueRef> {
        self.globals.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<ValueRef> {
        let scope = self.frames.last_mut().unwrap_or(&mut self.globals);
        scope.remove(name)
    }

    pub fn push_scope(&mut self) {
        self.frames.push(Scope::new());
    }

    /// Drops the innermost frame and every binding it held.
    pub fn pop_scope(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Double;

    #[test]
    fn frame_bindings_shadow_globals_until_popped() {
        let mut table = SymbolTable::new();
        table.put("x", ValueRef::new(Double::scalar(1.0)));
        table.push_scope();
        table.put("x", ValueRef::new(Double::scalar(2.0)));
        let inner = table.lookup("x").expect("bound");
        assert_eq!(inner.borrow().as_double().and_then(|d| d.get_real(0)), Some(2.0));

        table.pop_scope();
        let outer = table.lookup("x").expect("bound");
        assert_eq!(outer.borrow().as_double().and_then(|d| d.get_real(0)), Some(1.0));
        assert_eq!(table.depth(), 0);
    }

    #[test]
    fn globals_stay_visible_inside_frames() {
        let mut table = SymbolTable::new();
        table.put_global("g", ValueRef::new(Double::scalar(3.0)));
        table.push_scope();
        assert!(table.lookup("g").is_some());
        assert!(table.remove("g").is_none());
    }
}

//==================================================
// End of file
//==================================================
