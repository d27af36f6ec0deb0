//! The five built-in callables: `print`, `int`, `float`, `str`, `bool`.
//!
//! Dispatch happens before the function table is consulted, so a
//! user-defined `def int(x): ...` can never shadow these.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::interpreter::Interpreter;
use crate::value::Value;

/// `None` means `name` isn't one of the built-ins; the caller falls
/// through to the user function table.
pub fn call(interp: &mut Interpreter, name: &str, args: &[Value]) -> Option<Value> {
    match name {
        "print" => {
            interp.print_line(args);
            Some(Value::None)
        }
        "int" if args.len() <= 1 => Some(to_int(args.first())),
        "float" if args.len() <= 1 => Some(to_float(args.first())),
        "str" if args.len() == 1 => Some(Value::Str(args[0].to_display_string())),
        "bool" if args.len() == 1 => Some(Value::Bool(args[0].is_truthy())),
        "int" | "float" | "str" | "bool" => Some(Value::None), // arity mismatch
        _ => None,
    }
}

fn to_int(arg: Option<&Value>) -> Value {
    match arg {
        None => Value::Int(BigInt::from(0)),
        Some(Value::Int(i)) => Value::Int(i.clone()),
        Some(Value::Bool(b)) => Value::Int(BigInt::from(if *b { 1 } else { 0 })),
        Some(Value::Float(f)) => match BigInt::from_f64(f.trunc()) {
            Some(i) => Value::Int(i),
            None => Value::Int(BigInt::from(0)),
        },
        Some(Value::Str(s)) => parse_decimal(s),
        Some(Value::None) => Value::Int(BigInt::from(0)),
    }
}

fn to_float(arg: Option<&Value>) -> Value {
    match arg {
        None => Value::Float(0.0),
        Some(Value::Float(f)) => Value::Float(*f),
        Some(Value::Int(i)) => Value::Float(i.to_f64().unwrap_or(0.0)),
        Some(Value::Bool(b)) => Value::Float(if *b { 1.0 } else { 0.0 }),
        Some(Value::Str(s)) => Value::Float(parse_float_prefix(s)),
        Some(Value::None) => Value::Float(0.0),
    }
}

/// Parse a leading decimal-integer token, allowing a leading sign and
/// skipping any other character, rather than Rust's strict
/// `i64::from_str`. A `.` anywhere switches to floating-point parsing,
/// same as a bare numeric literal would.
fn parse_decimal(s: &str) -> Value {
    if s.contains('.') {
        return Value::Float(parse_float_prefix(s));
    }
    let mut negative = false;
    let mut acc = BigInt::from(0);
    let ten = BigInt::from(10);
    for (i, c) in s.chars().enumerate() {
        if i == 0 && (c == '+' || c == '-') {
            negative = c == '-';
            continue;
        }
        if let Some(d) = c.to_digit(10) {
            acc = acc * &ten + BigInt::from(d);
        }
    }
    Value::Int(if negative { -acc } else { acc })
}

/// Longest-prefix float parse, approximating `strtod`'s leniency: if the
/// whole string doesn't parse, fall back to its longest parseable prefix.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim();
    if let Ok(v) = s.parse::<f64>() {
        return v;
    }
    let chars: Vec<char> = s.chars().collect();
    for end in (1..=chars.len()).rev() {
        let candidate: String = chars[..end].iter().collect();
        if let Ok(v) = candidate.parse::<f64>() {
            return v;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_of_string_extracts_digits_leniently() {
        assert_eq!(to_int(Some(&Value::Str("12abc".to_string()))), Value::Int(BigInt::from(12)));
        assert_eq!(to_int(Some(&Value::Str("-7".to_string()))), Value::Int(BigInt::from(-7)));
    }

    #[test]
    fn int_of_dotted_string_parses_as_float() {
        assert_eq!(to_int(Some(&Value::Str("3.5".to_string()))), Value::Float(3.5));
    }

    #[test]
    fn int_of_float_truncates_toward_zero() {
        assert_eq!(to_int(Some(&Value::Float(-3.9))), Value::Int(BigInt::from(-3)));
        assert_eq!(to_int(Some(&Value::Float(3.9))), Value::Int(BigInt::from(3)));
    }

    #[test]
    fn no_argument_int_and_float_default_to_zero() {
        assert_eq!(to_int(None), Value::Int(BigInt::from(0)));
        assert_eq!(to_float(None), Value::Float(0.0));
    }

    #[test]
    fn float_of_string_parses_leniently() {
        assert_eq!(to_float(Some(&Value::Str("1.5".to_string()))), Value::Float(1.5));
        assert_eq!(to_float(Some(&Value::Str("garbage".to_string()))), Value::Float(0.0));
    }
}
