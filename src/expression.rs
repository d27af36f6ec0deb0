//! Expression evaluator: atoms, unary/binary operators, boolean
//! short-circuiting, comparison chains, calls, and format strings.

use num_bigint::BigInt;
use rustpython_parser::ast::{BoolOp, CmpOp, Constant, Expr, UnaryOp};

use crate::arithmetic;
use crate::error::{Error, Result};
use crate::interpreter::Interpreter;
use crate::statement::apply_binop;
use crate::value::Value;

impl Interpreter {
    /// Evaluate a single expression node.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Constant(c) => eval_constant(&c.value),

            Expr::Name(n) => {
                let id = n.id.as_str();
                if let Some(value) = self.env.get(id) {
                    return Ok(value);
                }
                if self.functions.contains(id) {
                    // A function reference has no representation as a
                    // `Value`, observable only at a call site, never
                    // as a first-class value.
                    return Ok(Value::None);
                }
                Ok(Value::None)
            }

            Expr::UnaryOp(u) => {
                let operand = self.eval_expr(&u.operand)?;
                Ok(eval_unaryop(u.op, &operand))
            }

            Expr::BoolOp(b) => self.eval_boolop(b.op, &b.values),

            Expr::BinOp(b) => {
                let left = self.eval_expr(&b.left)?;
                let right = self.eval_expr(&b.right)?;
                apply_binop(&b.op, &left, &right)
            }

            Expr::Compare(c) => self.eval_compare(c),

            Expr::Call(c) => self.eval_call(c),

            Expr::JoinedStr(j) => self.eval_joined_str(&j.values),
            Expr::FormattedValue(f) => {
                let value = self.eval_expr_list(&f.value)?;
                Ok(Value::Str(value.to_display_string()))
            }

            other => Err(Error::Unsupported(format!(
                "expression kind not in the supported subset: {other:?}"
            ))),
        }
    }

    /// A comma-separated expression list (assignment RHS, `return`
    /// value, compound-assignment RHS, embedded format expression):
    /// every element is evaluated left-to-right, the last one's value
    /// is what the list "is".
    pub(crate) fn eval_expr_list(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Tuple(t) => {
                let mut last = Value::None;
                for elt in &t.elts {
                    last = self.eval_expr(elt)?;
                }
                Ok(last)
            }
            other => self.eval_expr(other),
        }
    }

    fn eval_boolop(&mut self, op: BoolOp, values: &[Expr]) -> Result<Value> {
        match op {
            BoolOp::And => {
                for value in values {
                    if !self.eval_expr(value)?.is_truthy() {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            BoolOp::Or => {
                for value in values {
                    if self.eval_expr(value)?.is_truthy() {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
        }
    }

    /// All operands are evaluated once, up front, in order; only the
    /// pairwise comparisons themselves short-circuit on the first
    /// failing link.
    fn eval_compare(&mut self, c: &rustpython_parser::ast::ExprCompare) -> Result<Value> {
        let mut operands = Vec::with_capacity(c.comparators.len() + 1);
        operands.push(self.eval_expr(&c.left)?);
        for comparator in &c.comparators {
            operands.push(self.eval_expr(comparator)?);
        }

        for (i, op) in c.ops.iter().enumerate() {
            let a = &operands[i];
            let b = &operands[i + 1];
            let holds = match op {
                CmpOp::Eq => arithmetic::eq(a, b),
                CmpOp::NotEq => arithmetic::ne(a, b),
                CmpOp::Lt => arithmetic::lt(a, b),
                CmpOp::LtE => arithmetic::le(a, b),
                CmpOp::Gt => arithmetic::gt(a, b),
                CmpOp::GtE => arithmetic::ge(a, b),
                other => {
                    return Err(Error::Unsupported(format!(
                        "comparison operator not in the supported subset: {other:?}"
                    )))
                }
            };
            if !holds {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    }

    fn eval_call(&mut self, call: &rustpython_parser::ast::ExprCall) -> Result<Value> {
        let Expr::Name(callee) = call.func.as_ref() else {
            return Err(Error::Unsupported(
                "only calls to a bare name are supported".to_string(),
            ));
        };

        let mut positional = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            positional.push(self.eval_expr(arg)?);
        }

        let mut keyword = Vec::with_capacity(call.keywords.len());
        for kw in &call.keywords {
            let Some(name) = &kw.arg else {
                return Err(Error::Unsupported("**kwargs unpacking is not supported".to_string()));
            };
            keyword.push((name.to_string(), self.eval_expr(&kw.value)?));
        }

        self.call(callee.id.as_str(), positional, keyword)
    }

    fn eval_joined_str(&mut self, parts: &[Expr]) -> Result<Value> {
        let mut out = String::new();
        for part in parts {
            match part {
                Expr::Constant(c) => match &c.value {
                    Constant::Str(s) => out.push_str(&unescape_braces(s)),
                    other => out.push_str(&eval_constant(other)?.to_display_string()),
                },
                other => out.push_str(&self.eval_expr(other)?.to_display_string()),
            }
        }
        Ok(Value::Str(out))
    }
}

fn unescape_braces(fragment: &str) -> String {
    fragment.replace("{{", "{").replace("}}", "}")
}

fn eval_constant(c: &Constant) -> Result<Value> {
    match c {
        Constant::None => Ok(Value::None),
        Constant::Bool(b) => Ok(Value::Bool(*b)),
        Constant::Int(i) => Ok(Value::Int(i.clone())),
        Constant::Float(f) => Ok(Value::Float(*f)),
        Constant::Str(s) => Ok(Value::Str(s.clone())),
        other => Err(Error::Unsupported(format!("literal kind not in the supported subset: {other:?}"))),
    }
}

fn eval_unaryop(op: UnaryOp, operand: &Value) -> Value {
    match op {
        UnaryOp::Not => Value::Bool(!operand.is_truthy()),
        UnaryOp::UAdd => match operand {
            Value::Int(_) | Value::Bool(_) | Value::Float(_) => operand.clone(),
            _ => {
                eprintln!("pylite: bad operand type for unary +: '{}'", operand.type_name());
                Value::None
            }
        },
        UnaryOp::USub => match operand {
            Value::Int(i) => Value::Int(-i.clone()),
            Value::Bool(b) => Value::Int(-BigInt::from(if *b { 1 } else { 0 })),
            Value::Float(f) => Value::Float(-f),
            _ => {
                eprintln!("pylite: bad operand type for unary -: '{}'", operand.type_name());
                Value::None
            }
        },
        UnaryOp::Invert => {
            eprintln!("pylite: bitwise invert is not in the supported subset");
            Value::None
        }
    }
}
