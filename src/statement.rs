//! Statement evaluator: `if`/`while`/`funcdef`/assignment/flow statements.
//!
//! `break`, `continue`, and `return` are modeled as a typed signal that
//! bubbles up through `exec_block` rather than as a Rust exception.
//! Only `while` catches `Break`/`Continue`, and only a call frame (see
//! `Interpreter::call`) catches `Return`.

use rustpython_parser::ast::{Expr, Stmt};

use crate::arithmetic;
use crate::error::{Error, Result};
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::value::Value;

#[derive(Debug)]
pub enum Flow {
    Return(Value),
    Break,
    Continue,
}

impl Interpreter {
    /// Run a block; stop early and report the signal the moment one
    /// statement produces it, later statements in the block never run.
    pub(crate) fn exec_block(&mut self, body: &[Stmt]) -> Result<Option<Flow>> {
        for stmt in body {
            if let Some(flow) = self.exec_stmt(stmt)? {
                return Ok(Some(flow));
            }
        }
        Ok(None)
    }

    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Option<Flow>> {
        match stmt {
            Stmt::Expr(s) => {
                self.eval_expr(&s.value)?;
                Ok(None)
            }

            Stmt::Assign(s) => {
                let value = self.eval_expr_list(&s.value)?;
                for target in &s.targets {
                    self.assign(target, value.clone())?;
                }
                Ok(None)
            }

            Stmt::AugAssign(s) => {
                let current = self.eval_expr(&s.target)?;
                let rhs = self.eval_expr_list(&s.value)?;
                let result = apply_binop(&s.op, &current, &rhs)?;
                self.assign(&s.target, result)?;
                Ok(None)
            }

            Stmt::If(s) => {
                if self.eval_expr(&s.test)?.is_truthy() {
                    self.exec_block(&s.body)
                } else {
                    self.exec_block(&s.orelse)
                }
            }

            Stmt::While(s) => {
                while self.eval_expr(&s.test)?.is_truthy() {
                    match self.exec_block(&s.body)? {
                        None | Some(Flow::Continue) => {}
                        Some(Flow::Break) => break,
                        Some(Flow::Return(v)) => return Ok(Some(Flow::Return(v))),
                    }
                }
                Ok(None)
            }

            Stmt::FunctionDef(def) => {
                self.define_function(def)?;
                Ok(None)
            }

            Stmt::Return(s) => {
                let value = match &s.value {
                    Some(expr) => self.eval_expr_list(expr)?,
                    None => Value::None,
                };
                Ok(Some(Flow::Return(value)))
            }

            Stmt::Break(_) => Ok(Some(Flow::Break)),
            Stmt::Continue(_) => Ok(Some(Flow::Continue)),

            other => Err(Error::Unsupported(format!(
                "statement kind not in the supported subset: {other:?}"
            ))),
        }
    }

    fn define_function(&mut self, def: &rustpython_parser::ast::StmtFunctionDef) -> Result<()> {
        if !def.args.kwonlyargs.is_empty() || def.args.vararg.is_some() || def.args.kwarg.is_some() {
            return Err(Error::Unsupported(
                "only plain positional/keyword parameters are supported".to_string(),
            ));
        }

        let declared: Vec<_> = def.args.posonlyargs.iter().chain(def.args.args.iter()).collect();
        let params: Vec<String> = declared.iter().map(|a| a.def.arg.to_string()).collect();
        let required = declared.iter().position(|a| a.default.is_some()).unwrap_or(declared.len());

        let mut defaults = Vec::with_capacity(declared.len() - required);
        for arg in &declared[required..] {
            let default_expr = arg.default.as_deref().ok_or_else(|| {
                Error::Unsupported(
                    "a parameter without a default cannot follow one that has one".to_string(),
                )
            })?;
            defaults.push(self.eval_expr(default_expr)?);
        }

        self.functions.define(Function {
            name: def.name.to_string(),
            params,
            required,
            defaults,
            body: def.body.clone(),
        });
        Ok(())
    }

    /// Write-side of name resolution: bare names only.
    fn assign(&mut self, target: &Expr, value: Value) -> Result<()> {
        match target {
            Expr::Name(name) => {
                self.env.set(name.id.as_str(), value);
                Ok(())
            }
            other => Err(Error::Unsupported(format!(
                "assignment target not in the supported subset: {other:?}"
            ))),
        }
    }
}

pub(crate) fn apply_binop(op: &rustpython_parser::ast::Operator, left: &Value, right: &Value) -> Result<Value> {
    use rustpython_parser::ast::Operator;
    match op {
        Operator::Add => Ok(arithmetic::add(left, right)),
        Operator::Sub => Ok(arithmetic::sub(left, right)),
        Operator::Mult => Ok(arithmetic::mul(left, right)),
        Operator::Div => Ok(arithmetic::div(left, right)),
        Operator::FloorDiv => Ok(arithmetic::floor_div(left, right)),
        Operator::Mod => Ok(arithmetic::modulo(left, right)),
        other => Err(Error::Unsupported(format!("operator not in the supported subset: {other:?}"))),
    }
}
