//! Plain-text dense matrix loader
//!
//! The only on-disk format in the system: rows of whitespace-separated
//! numeric tokens. The first line fixes the column count, every later
//! line must match it, and the row count is the number of non-blank
//! lines. Only nonzero cells are kept as triplets, so any engine can be
//! materialized from the parse result.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use spmat_core::MatrixAlgebra;

use crate::dynamic::{AnyMatrix, EngineKind};

/// Failures while reading or parsing a matrix file
#[derive(Debug)]
pub enum LoadError {
    /// Underlying file read failure
    Io(io::Error),
    /// The file contains no rows
    Empty,
    /// A token failed to parse as a number (1-based line and token)
    Parse { line: usize, token: usize },
    /// A row's token count differs from the first row's
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read matrix file: {err}"),
            LoadError::Empty => write!(f, "matrix file contains no rows"),
            LoadError::Parse { line, token } => {
                write!(f, "invalid numeric token {token} on line {line}")
            }
            LoadError::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line} has {found} tokens, expected {expected} from the first line"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Shape and nonzero triplets parsed from a dense text file
#[derive(Debug, Clone)]
pub struct DenseText {
    pub rows: usize,
    pub cols: usize,
    pub triplets: Vec<(usize, usize, f64)>,
}

impl DenseText {
    /// Materialize any engine implementing the algebra contract
    pub fn to_matrix<M>(&self) -> spmat_core::Result<M>
    where
        M: MatrixAlgebra<Element = f64>,
    {
        M::from_triplets(self.rows, self.cols, self.triplets.iter().copied())
    }

    /// Materialize an engine chosen at runtime
    pub fn to_any(&self, kind: EngineKind) -> spmat_core::Result<AnyMatrix> {
        AnyMatrix::from_triplets(kind, self.rows, self.cols, self.triplets.iter().copied())
    }
}

/// Read and parse a dense text file
pub fn load_dense_text<P: AsRef<Path>>(path: P) -> Result<DenseText, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_dense_text(&text)
}

/// Parse dense text from an in-memory string
pub fn parse_dense_text(text: &str) -> Result<DenseText, LoadError> {
    let mut triplets = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;
    for (line_index, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if rows == 0 {
            cols = tokens.len();
        } else if tokens.len() != cols {
            return Err(LoadError::Ragged {
                line: line_index + 1,
                expected: cols,
                found: tokens.len(),
            });
        }
        for (token_index, token) in tokens.iter().enumerate() {
            let value: f64 = token.parse().map_err(|_| LoadError::Parse {
                line: line_index + 1,
                token: token_index + 1,
            })?;
            if value != 0.0 {
                triplets.push((rows, token_index, value));
            }
        }
        rows += 1;
    }
    if rows == 0 {
        return Err(LoadError::Empty);
    }
    Ok(DenseText {
        rows,
        cols,
        triplets,
    })
}
