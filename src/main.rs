//! Interactive front end: pick an operation and two matrix files, write the result
//!
//! Usage: `sparse-matrix [input_dir] [output_dir]`
//!
//! Directories default to `$SPARSE_MATRIX_INPUT_DIR` / `$SPARSE_MATRIX_OUTPUT_DIR`,
//! then `sample_inputs` / `sample_results`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use sparse_matrix::session::{list_matrix_files, select_file, Request, SessionConfig, SessionError};
use sparse_matrix::Operation;

fn main() -> ExitCode {
    let config = SessionConfig::from_args(std::env::args().skip(1));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SessionConfig) -> Result<(), SessionError> {
    let files = list_matrix_files(&config.input_dir)?;

    println!("Select operation:");
    for op in Operation::ALL {
        println!("{}. {}", op.menu_number(), op.label());
    }
    let operation: Operation = prompt("Enter operation number: ")?.parse()?;

    println!("Available matrix files:");
    for (i, path) in files.iter().enumerate() {
        println!("{}: {}", i, path.display());
    }
    let first = select_file(&files, &prompt("Enter first matrix file index: ")?)?;
    let second = select_file(&files, &prompt("Enter second matrix file index: ")?)?;
    let output_name = prompt("Enter output file name: ")?;

    let request = Request {
        operation,
        first: first.to_path_buf(),
        second: second.to_path_buf(),
        output_name,
    };

    let outcome = config.execute(&request, &mut io::stdout())?;
    println!(
        "Result ({}x{}, {} nonzeros) saved to {}",
        outcome.result_shape.0,
        outcome.result_shape.1,
        outcome.result_nnz,
        outcome.output_path.display()
    );

    Ok(())
}

/// Prints `message` and reads one trimmed line from stdin
fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a value was entered",
        ));
    }
    Ok(line.trim().to_string())
}
