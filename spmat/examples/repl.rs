//! Interactive matrix shell
//!
//! Maps textual commands onto the algebra contract over a registry of
//! named matrices, with the storage engine selectable per load.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use clap::Parser;
use spmat::{load_dense_text, AnyMatrix, EngineKind};

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Interactive sparse matrix shell - load matrices and run algebra on them")]
struct Cli {
    /// Storage engine used when a command does not name one
    #[arg(long, default_value_t = EngineKind::Hash)]
    engine: EngineKind,
}

fn show_help() {
    println!(
        "\nAvailable commands:\n\
         \x20 load <file_path> <matrix> [engine]  - Load matrix from file\n\
         \x20 access <matrix> <i> <j>             - Access element at position (i,j)\n\
         \x20 insert <matrix> <i> <j> <value>     - Insert/update element at position (i,j)\n\
         \x20 transpose <matrix>                  - Transpose matrix in place\n\
         \x20 sum <matrix1> <matrix2>             - Sum two matrices\n\
         \x20 smult <matrix> <scalar>             - Multiply matrix by scalar\n\
         \x20 mmult <matrix1> <matrix2>           - Multiply two matrices\n\
         \x20 print <matrix>                      - Print matrix information\n\
         \x20 help                                - Show this help message\n\
         \x20 exit                                - Exit the program\n"
    );
}

fn show_matrix(matrix: &AnyMatrix) {
    let (rows, cols) = matrix.shape();
    println!(
        "shape: {rows} x {cols} (engine: {}, nnz: {})",
        matrix.kind(),
        matrix.nnz()
    );
    for (row, col, value) in matrix.triplets() {
        println!("({row}, {col}): {value}");
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> Option<T> {
    match token.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("Error: '{token}' is not a valid {what}.");
            None
        }
    }
}

fn lookup<'a>(registry: &'a HashMap<String, AnyMatrix>, name: &str) -> Option<&'a AnyMatrix> {
    let found = registry.get(name);
    if found.is_none() {
        println!("Error: Matrix '{name}' not found.");
    }
    found
}

fn dispatch(registry: &mut HashMap<String, AnyMatrix>, default_engine: EngineKind, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return;
    };

    match (command, args) {
        ("help", _) => show_help(),

        ("load", [path, name]) | ("load", [path, name, _]) => {
            let engine = match args.get(2) {
                Some(token) => match token.parse::<EngineKind>() {
                    Ok(kind) => kind,
                    Err(err) => {
                        println!("Error: {err}");
                        return;
                    }
                },
                None => default_engine,
            };
            match load_dense_text(path) {
                Ok(parsed) => match parsed.to_any(engine) {
                    Ok(matrix) => {
                        registry.insert(name.to_string(), matrix);
                        println!("Matrix '{name}' loaded successfully ({engine}).");
                    }
                    Err(err) => println!("Error: {err}"),
                },
                Err(err) => println!("Error: {err}"),
            }
        }

        ("access", [name, i, j]) => {
            let Some(matrix) = lookup(registry, name) else {
                return;
            };
            let (Some(row), Some(col)) = (
                parse_number::<usize>(i, "row index"),
                parse_number::<usize>(j, "column index"),
            ) else {
                return;
            };
            match matrix.access(row, col) {
                Ok(value) => println!("Value at position ({row}, {col}): {value}"),
                Err(err) => println!("Error: {err}"),
            }
        }

        ("insert", [name, i, j, value]) => {
            let (Some(row), Some(col), Some(value)) = (
                parse_number::<usize>(i, "row index"),
                parse_number::<usize>(j, "column index"),
                parse_number::<f64>(value, "number"),
            ) else {
                return;
            };
            match registry.get_mut(*name) {
                Some(matrix) => {
                    if let Err(err) = matrix.insert(row, col, value) {
                        println!("Error: {err}");
                    }
                }
                None => println!("Error: Matrix '{name}' not found."),
            }
        }

        ("transpose", [name]) => match registry.get_mut(*name) {
            Some(matrix) => matrix.transpose(),
            None => println!("Error: Matrix '{name}' not found."),
        },

        ("sum", [left, right]) => {
            let (Some(a), Some(b)) = (lookup(registry, left), lookup(registry, right)) else {
                return;
            };
            match a.add(b) {
                Ok(result) => {
                    println!("result:");
                    show_matrix(&result);
                }
                Err(err) => println!("Error: {err}"),
            }
        }

        ("smult", [name, scalar]) => {
            let Some(matrix) = lookup(registry, name) else {
                return;
            };
            let Some(factor) = parse_number::<f64>(scalar, "number") else {
                return;
            };
            println!("result:");
            show_matrix(&matrix.scale(factor));
        }

        ("mmult", [left, right]) => {
            let (Some(a), Some(b)) = (lookup(registry, left), lookup(registry, right)) else {
                return;
            };
            match a.matmul(b) {
                Ok(result) => {
                    println!("result:");
                    show_matrix(&result);
                }
                Err(err) => println!("Error: {err}"),
            }
        }

        ("print", [name]) => {
            if let Some(matrix) = lookup(registry, name) {
                show_matrix(matrix);
            }
        }

        _ => println!(
            "Invalid command or incorrect number of arguments. Type 'help' for a list of commands."
        ),
    }
}

fn main() {
    let cli = Cli::parse();
    let mut registry: HashMap<String, AnyMatrix> = HashMap::new();

    show_help();
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        dispatch(&mut registry, cli.engine, trimmed);
    }
}
