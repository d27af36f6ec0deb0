//! Global table + parameter frame stack.
//!
//! Name resolution and binding are deliberately asymmetric: a read checks
//! the top frame, then globals; a write only ever updates an *existing*
//! slot in the top frame, otherwise it always lands in globals. That
//! asymmetry is what makes `x = 1` inside a function body a global write
//! unless `x` is a parameter.

use std::collections::HashMap;

use crate::value::Value;

#[derive(Debug, Default)]
pub struct Environment {
    globals: HashMap<String, Value>,
    frames: Vec<HashMap<String, Value>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name resolution for a read: check the active frame, then globals.
    /// Falling back to the function table, and finally to `None`, is
    /// handled by the interpreter, which is the only place both tables
    /// are in scope.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(frame) = self.frames.last() {
            if let Some(v) = frame.get(name) {
                return Some(v.clone());
            }
        }
        self.globals.get(name).cloned()
    }

    /// Update an existing parameter slot in place, or
    /// fall through to globals. Never creates a new parameter slot.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            if frame.contains_key(name) {
                frame.insert(name.to_string(), value);
                return;
            }
        }
        self.globals.insert(name.to_string(), value);
    }

    pub fn push_frame(&mut self, frame: HashMap<String, Value>) {
        self.frames.push(frame);
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }
}
