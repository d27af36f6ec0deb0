//! User-defined functions and the call-binding algorithm.
//!
//! Defaults are captured as already-evaluated `Value`s at definition
//! time, not as expressions to be re-evaluated per call. A definition
//! like `def f(x, y=compute())` only ever runs `compute()` once.

use std::collections::HashMap;

use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// How many leading parameters have no default and are required.
    pub required: usize,
    /// Defaults for the trailing parameters, aligned to
    /// `params[required..]`, already evaluated.
    pub defaults: Vec<Value>,
    pub body: rustpython_parser::ast::Suite,
}

#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: HashMap<String, Function>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, function: Function) {
        self.functions.insert(function.name.clone(), function);
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

/// Bind `positional` and `keyword` arguments to `function`'s parameter
/// list: positional arguments fill slots left to right, then keyword
/// arguments fill the named slots, then any still-unfilled trailing
/// slots pull from defaults. An unknown keyword name, a slot assigned
/// twice, or a required slot left empty is a binding failure, and the
/// caller turns that into a lenient `None` rather than an `Error`.
pub fn bind(
    function: &Function,
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
) -> Option<HashMap<String, Value>> {
    if positional.len() > function.params.len() {
        return None;
    }

    let mut slots: Vec<Option<Value>> = vec![None; function.params.len()];
    for (slot, value) in slots.iter_mut().zip(positional) {
        *slot = Some(value);
    }

    for (name, value) in keyword {
        let index = function.params.iter().position(|p| *p == name)?;
        if slots[index].is_some() {
            return None; // already bound positionally or by an earlier keyword
        }
        slots[index] = Some(value);
    }

    for (index, slot) in slots.iter_mut().enumerate() {
        if slot.is_some() {
            continue;
        }
        if index < function.required {
            return None; // required parameter left unfilled
        }
        let default_index = index - function.required;
        *slot = function.defaults.get(default_index).cloned();
        if slot.is_none() {
            return None;
        }
    }

    let mut frame = HashMap::with_capacity(function.params.len());
    for (name, value) in function.params.iter().zip(slots) {
        frame.insert(name.clone(), value.expect("all slots filled or bind returned early"));
    }
    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn func(params: &[&str], required: usize, defaults: &[i64]) -> Function {
        Function {
            name: "f".to_string(),
            params: params.iter().map(|s| s.to_string()).collect(),
            required,
            defaults: defaults.iter().map(|n| Value::Int(BigInt::from(*n))).collect(),
            body: Vec::new(),
        }
    }

    fn int(n: i64) -> Value {
        Value::Int(BigInt::from(n))
    }

    #[test]
    fn positional_args_fill_slots_left_to_right() {
        let f = func(&["a", "b"], 2, &[]);
        let frame = bind(&f, vec![int(1), int(2)], vec![]).unwrap();
        assert_eq!(frame["a"], int(1));
        assert_eq!(frame["b"], int(2));
    }

    #[test]
    fn keyword_args_fill_named_slots_after_positional() {
        let f = func(&["a", "b", "c"], 1, &[10, 20]);
        let frame = bind(&f, vec![int(1)], vec![("c".to_string(), int(3))]).unwrap();
        assert_eq!(frame["a"], int(1));
        assert_eq!(frame["b"], int(10)); // default, untouched
        assert_eq!(frame["c"], int(3));
    }

    #[test]
    fn unfilled_trailing_slots_pull_from_defaults() {
        let f = func(&["a", "b"], 1, &[99]);
        let frame = bind(&f, vec![int(1)], vec![]).unwrap();
        assert_eq!(frame["b"], int(99));
    }

    #[test]
    fn unknown_keyword_name_fails_the_bind() {
        let f = func(&["a"], 1, &[]);
        assert!(bind(&f, vec![int(1)], vec![("nope".to_string(), int(2))]).is_none());
    }

    #[test]
    fn duplicate_assignment_fails_the_bind() {
        let f = func(&["a", "b"], 2, &[]);
        assert!(bind(&f, vec![int(1), int(2)], vec![("a".to_string(), int(3))]).is_none());
    }

    #[test]
    fn missing_required_slot_fails_the_bind() {
        let f = func(&["a", "b"], 2, &[]);
        assert!(bind(&f, vec![int(1)], vec![]).is_none());
    }

    #[test]
    fn too_many_positional_args_fails_the_bind() {
        let f = func(&["a"], 1, &[]);
        assert!(bind(&f, vec![int(1), int(2)], vec![]).is_none());
    }
}
