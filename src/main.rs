//! CLI shell: read a full program from standard input, run it, and
//! mirror its exit-status contract: zero on normal completion,
//! non-zero only when the implementation itself failed to run the
//! program (a parse error or an unsupported construct).

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("pylite: failed to read standard input: {e}");
        return ExitCode::FAILURE;
    }

    match pylite::run(&source) {
        Ok(output) => {
            print!("{output}");
            let _ = io::stdout().flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("pylite: {e}");
            ExitCode::FAILURE
        }
    }
}
