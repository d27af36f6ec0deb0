//! Arithmetic & comparison kernel.
//!
//! Every function here is infallible: an incompatible operand pair is an
//! in-language fault, not a Rust error. It resolves to `Value::None` (or
//! `false` for ordered comparisons) and, where it might otherwise be
//! surprising, a one-line note on stderr. Division/modulo by zero follow
//! the same rule. Nothing here ever panics or returns `Result`.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use crate::value::Value;

fn note(msg: impl AsRef<str>) {
    eprintln!("pylite: {}", msg.as_ref());
}

/// The two promoted "numeric-family" views an operand can take, per the
/// promotion order: Float beats Int beats Bool-as-Int.
enum Numeric {
    Int(BigInt),
    Float(f64),
}

/// Promote a pair of operands for a numeric operation. `None` if either
/// operand isn't part of the numeric family (Int/Float/Bool).
fn promote(left: &Value, right: &Value) -> Option<(Numeric, Numeric)> {
    let is_float = matches!(left, Value::Float(_)) || matches!(right, Value::Float(_));
    if is_float {
        let l = left.as_f64()?;
        let r = right.as_f64()?;
        return Some((Numeric::Float(l), Numeric::Float(r)));
    }
    let l = left.as_bigint()?;
    let r = right.as_bigint()?;
    Some((Numeric::Int(l), Numeric::Int(r)))
}

pub fn add(left: &Value, right: &Value) -> Value {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Value::Str(format!("{a}{b}"));
    }
    match promote(left, right) {
        Some((Numeric::Int(a), Numeric::Int(b))) => Value::Int(a + b),
        Some((Numeric::Float(a), Numeric::Float(b))) => Value::Float(a + b),
        Some(_) => unreachable!("promote always returns a matched pair"),
        None => {
            note(format!(
                "unsupported operand types for +: '{}' and '{}'",
                left.type_name(),
                right.type_name()
            ));
            Value::None
        }
    }
}

pub fn sub(left: &Value, right: &Value) -> Value {
    match promote(left, right) {
        Some((Numeric::Int(a), Numeric::Int(b))) => Value::Int(a - b),
        Some((Numeric::Float(a), Numeric::Float(b))) => Value::Float(a - b),
        Some(_) => unreachable!("promote always returns a matched pair"),
        None => {
            note(format!(
                "unsupported operand types for -: '{}' and '{}'",
                left.type_name(),
                right.type_name()
            ));
            Value::None
        }
    }
}

/// repeat `s` `n` times; `n <= 0` yields an empty string.
fn repeat_str(s: &str, n: &BigInt) -> String {
    if n.is_negative() || n.is_zero() {
        return String::new();
    }
    match n.to_usize() {
        Some(count) => s.repeat(count),
        None => {
            note("string repetition count out of range");
            String::new()
        }
    }
}

pub fn mul(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Str(s), other) | (other, Value::Str(s)) if other.as_bigint().is_some() => {
            Value::Str(repeat_str(s, &other.as_bigint().unwrap()))
        }
        _ => match promote(left, right) {
            Some((Numeric::Int(a), Numeric::Int(b))) => Value::Int(a * b),
            Some((Numeric::Float(a), Numeric::Float(b))) => Value::Float(a * b),
            Some(_) => unreachable!("promote always returns a matched pair"),
            None => {
                note(format!(
                    "unsupported operand types for *: '{}' and '{}'",
                    left.type_name(),
                    right.type_name()
                ));
                Value::None
            }
        },
    }
}

/// True division: always `Float`, coercing both operands first.
pub fn div(left: &Value, right: &Value) -> Value {
    let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
        note(format!(
            "unsupported operand types for /: '{}' and '{}'",
            left.type_name(),
            right.type_name()
        ));
        return Value::None;
    };
    if b == 0.0 {
        note("division by zero");
        return Value::None;
    }
    Value::Float(a / b)
}

/// Floor division: always produces an `Int`, even when an operand
/// is `Float`. This isn't real-Python `//` semantics.
pub fn floor_div(left: &Value, right: &Value) -> Value {
    if let (Some(a), Some(b)) = (left.as_bigint(), right.as_bigint()) {
        if b == BigInt::from(0) {
            note("integer division or modulo by zero");
            return Value::None;
        }
        return Value::Int(a.div_floor(&b));
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(a), Some(b)) => {
            if b == 0.0 {
                note("float floor division by zero");
                return Value::None;
            }
            match BigInt::from_f64((a / b).floor()) {
                Some(q) => Value::Int(q),
                None => {
                    note("floor division result out of range");
                    Value::None
                }
            }
        }
        _ => {
            note(format!(
                "unsupported operand types for //: '{}' and '{}'",
                left.type_name(),
                right.type_name()
            ));
            Value::None
        }
    }
}

/// `a - (a // b) * b`, using the same promotion the division used,
/// implemented literally as that composition.
pub fn modulo(left: &Value, right: &Value) -> Value {
    let quotient = floor_div(left, right);
    let product = mul(&quotient, right);
    sub(left, &product)
}

/// Three-way comparison across the value pairs that support ordered
/// comparison: numeric-family (with promotion), `Str` vs `Str`
/// (lexicographic), and `None` vs `None`. `None` means incomparable.
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Some(a.cmp(b));
    }
    if matches!(left, Value::None) && matches!(right, Value::None) {
        return Some(Ordering::Equal);
    }
    match promote(left, right) {
        Some((Numeric::Int(a), Numeric::Int(b))) => Some(a.cmp(&b)),
        Some((Numeric::Float(a), Numeric::Float(b))) => a.partial_cmp(&b),
        Some(_) => unreachable!("promote always returns a matched pair"),
        None => None,
    }
}

pub fn eq(left: &Value, right: &Value) -> bool {
    compare(left, right) == Some(Ordering::Equal)
}

pub fn ne(left: &Value, right: &Value) -> bool {
    !eq(left, right)
}

pub fn lt(left: &Value, right: &Value) -> bool {
    compare(left, right) == Some(Ordering::Less)
}

pub fn le(left: &Value, right: &Value) -> bool {
    matches!(compare(left, right), Some(Ordering::Less) | Some(Ordering::Equal))
}

pub fn gt(left: &Value, right: &Value) -> bool {
    compare(left, right) == Some(Ordering::Greater)
}

pub fn ge(left: &Value, right: &Value) -> bool {
    matches!(compare(left, right), Some(Ordering::Greater) | Some(Ordering::Equal))
}
