//! The tagged-union value model.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// A runtime value. `Int` is arbitrary-precision; everything else is a
/// fixed small payload. The tag set is closed: adding a value kind means
/// touching every `match` in the arithmetic kernel, which is the point.
/// No open polymorphism here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }

    /// `None`→false, `Bool`→itself, `Int`/`Float`→≠0, `Str`→non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(i) => !i.is_zero(),
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// View this value as an arbitrary-precision integer, coercing `Bool`.
    /// `None` for anything that isn't part of the integral family.
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Value::Int(i) => Some(i.clone()),
            Value::Bool(b) => Some(BigInt::from(if *b { 1 } else { 0 })),
            _ => None,
        }
    }

    /// View this value as `f64`, coercing `Int`/`Bool`. Lossy for very
    /// large integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => i.to_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Used by `print`, `str()`, and format strings.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(b) => if *b { "True" } else { "False" }.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{:.6}", f),
            Value::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_the_per_type_rules() {
        assert!(!Value::None.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Int(BigInt::from(0)).is_truthy());
        assert!(Value::Int(BigInt::from(-1)).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(Value::Float(0.1).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(Value::Str(" ".to_string()).is_truthy());
    }

    #[test]
    fn display_matches_to_string_rules() {
        assert_eq!(Value::None.to_display_string(), "None");
        assert_eq!(Value::Bool(true).to_display_string(), "True");
        assert_eq!(Value::Bool(false).to_display_string(), "False");
        assert_eq!(Value::Int(BigInt::from(42)).to_display_string(), "42");
        assert_eq!(Value::Float(1.5).to_display_string(), "1.500000");
        assert_eq!(Value::Float(-2.0).to_display_string(), "-2.000000");
        assert_eq!(Value::Str("hi".to_string()).to_display_string(), "hi");
    }

    #[test]
    fn bool_coerces_to_int_in_numeric_context() {
        assert_eq!(Value::Bool(true).as_bigint(), Some(BigInt::from(1)));
        assert_eq!(Value::Bool(false).as_bigint(), Some(BigInt::from(0)));
    }
}
