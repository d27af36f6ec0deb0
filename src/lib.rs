//! A tree-walking interpreter for a reduced, indentation-structured
//! scripting subset: variables, arithmetic over arbitrary-precision
//! integers, control flow, user-defined functions with keyword
//! arguments and defaults, five built-ins, and format strings.
//!
//! Parsing is delegated entirely to `rustpython-parser`; this crate
//! only walks the resulting AST and only recognizes the subset of node
//! kinds the language actually uses. Anything else is rejected as
//! [`Error::Unsupported`] before a single statement runs.

mod arithmetic;
mod builtins;
mod environment;
mod error;
mod expression;
mod function;
mod interpreter;
mod statement;
mod value;

pub use error::{Error, Result};
pub use value::Value;

use interpreter::Interpreter;

/// Run a full program and return everything it printed.
///
/// Operand-type mismatches, division by zero, and call-binding failures
/// never reach this `Result`: they're in-language faults that resolve
/// to `None` and keep the program running. `Err` only comes back for a
/// parse failure or a construct outside the supported subset.
pub fn run(source: &str) -> Result<String> {
    Interpreter::new().run(source)
}
