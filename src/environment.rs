//! Parent-linked environment chain.
//!
//! Each function call gets a fresh frame whose lookups fall through to an enclosing
//! scope. A plain `Rc<RefCell<_>>` linked frame is the conventional shape for this in
//! a tree-walking interpreter.

use crate::value::Value;
use ahash::AHashMap;
use std::cell::RefCell;
use std::rc::Rc;

struct Frame {
    bindings: AHashMap<String, Value>,
    parent: Option<Environment>,
}

#[derive(Clone)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    pub fn new_root() -> Self {
        Self(Rc::new(RefCell::new(Frame {
            bindings: AHashMap::default(),
            parent: None,
        })))
    }

    pub fn child_of(parent: &Environment) -> Self {
        Self(Rc::new(RefCell::new(Frame {
            bindings: AHashMap::default(),
            parent: Some(parent.clone()),
        })))
    }

    /// Always binds in this frame, shadowing any enclosing binding of the same name.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.0.borrow();
        if let Some(v) = frame.bindings.get(name) {
            return Some(v.clone());
        }
        frame.parent.as_ref().and_then(|p| p.get(name))
    }

    /// Walk the chain looking for an existing binding to update. Returns `false`
    /// if no frame anywhere in the chain already defines `name` — the caller
    /// (the evaluator's assignment rule) is responsible for then calling `define`
    /// on the innermost frame, reproducing the "assignment creates" fallback policy.
    pub fn try_assign(&self, name: &str, value: Value) -> bool {
        {
            let mut frame = self.0.borrow_mut();
            if frame.bindings.contains_key(name) {
                frame.bindings.insert(name.to_string(), value);
                return true;
            }
        }
        let parent = self.0.borrow().parent.clone();
        match parent {
            Some(p) => p.try_assign(name, value),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_through_to_parent() {
        let root = Environment::new_root();
        root.define("ա", Value::Number(1.0));
        let child = Environment::child_of(&root);
        assert_eq!(child.get("ա"), Some(Value::Number(1.0)));
    }

    #[test]
    fn assign_updates_outer_binding_when_present() {
        let root = Environment::new_root();
        root.define("ա", Value::Number(1.0));
        let child = Environment::child_of(&root);
        assert!(child.try_assign("ա", Value::Number(2.0)));
        assert_eq!(root.get("ա"), Some(Value::Number(2.0)));
    }

    #[test]
    fn assign_reports_missing_binding_for_caller_to_define_locally() {
        let root = Environment::new_root();
        let child = Environment::child_of(&root);
        assert!(!child.try_assign("բ", Value::Number(1.0)));
        assert_eq!(root.get("բ"), None);
    }
}
