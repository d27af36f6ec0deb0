//! Wires together the environment, the function table, and captured
//! output into the single execution context the evaluator runs in.

use rustpython_parser::{parse, Mode};

use crate::builtins;
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::function::{self, Function, FunctionTable};
use crate::statement::Flow;
use crate::value::Value;

pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) functions: FunctionTable,
    output: String,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            functions: FunctionTable::new(),
            output: String::new(),
        }
    }

    /// Parse and run a full program, returning everything `print` wrote.
    pub fn run(&mut self, source: &str) -> Result<String> {
        let parsed = parse(source, Mode::Module, "<stdin>").map_err(|e| Error::Parse(e.to_string()))?;
        let module = parsed
            .as_module()
            .ok_or_else(|| Error::Internal("parser did not produce a module".to_string()))?;
        match self.exec_block(&module.body)? {
            None => {}
            Some(Flow::Return(_)) => {
                eprintln!("pylite: return outside a function call is ignored");
            }
            Some(Flow::Break) | Some(Flow::Continue) => {
                eprintln!("pylite: break/continue outside a loop is ignored");
            }
        }
        Ok(std::mem::take(&mut self.output))
    }

    pub(crate) fn print_line(&mut self, args: &[Value]) {
        let line: Vec<String> = args.iter().map(Value::to_display_string).collect();
        self.output.push_str(&line.join(" "));
        self.output.push('\n');
    }

    /// Dispatch a call by name: built-ins first, then the user function
    /// table, then the lenient "unknown callee" fallback.
    pub(crate) fn call(
        &mut self,
        name: &str,
        positional: Vec<Value>,
        keyword: Vec<(String, Value)>,
    ) -> Result<Value> {
        if let Some(value) = builtins::call(self, name, &positional) {
            return Ok(value);
        }

        let Some(function) = self.functions.get(name).cloned() else {
            return Ok(Value::None);
        };

        let Some(frame) = function::bind(&function, positional, keyword) else {
            eprintln!("pylite: call to '{name}' failed to bind arguments");
            return Ok(Value::None);
        };

        self.env.push_frame(frame);
        let result = self.exec_function_body(&function);
        self.env.pop_frame();
        result
    }

    fn exec_function_body(&mut self, function: &Function) -> Result<Value> {
        match self.exec_block(&function.body)? {
            Some(Flow::Return(value)) => Ok(value),
            Some(Flow::Break) | Some(Flow::Continue) => {
                eprintln!(
                    "pylite: break/continue escaped the body of '{}', call yields None",
                    function.name
                );
                Ok(Value::None)
            }
            None => Ok(Value::None),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
