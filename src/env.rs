// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Names are case-insensitive: `Foo` and `foo` bind the same slot. Bindings
/// are keyed by an ASCII-lowercased copy of the name.
fn fold_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new global environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child environment with a parent.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Defines a binding in THIS scope (doesn't walk the parent chain).
    pub fn define(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(fold_key(name), value);
    }

    /// Walks up to the root frame and defines the binding there, regardless
    /// of which frame `self` is. Used by the function-shape of `define`,
    /// which installs globally even when invoked from a nested scope.
    pub fn define_global(self: &Rc<Self>, name: &str, value: Value) {
        let mut frame = Rc::clone(self);
        while let Some(parent) = frame.parent.clone() {
            frame = parent;
        }
        frame.define(name, value);
    }

    /// Looks up a symbol in this scope and parent scopes recursively.
    /// Case-insensitive.
    pub fn get(&self, name: &str) -> Option<Value> {
        let key = fold_key(name);
        if let Some(value) = self.bindings.borrow().get(&key) {
            return Some(value.clone());
        }
        if let Some(ref parent) = self.parent {
            return parent.get(name);
        }
        None
    }
}
