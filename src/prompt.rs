//! Reading a matrix from a line-oriented reader.
//!
//! The expected input is a row count, a column count, and then one line
//! per row of whitespace-separated `0`/`1` values. Invalid lines get a
//! complaint written to the output and are read again, up to a fixed
//! number of attempts.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, Write};

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use thiserror::Error;

use crate::matrix::{Matrix, MatrixError};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

fn parse_integer(token: &str) -> Option<i64> {
    if INTEGER.is_match(token) {
        token.parse().ok()
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dimension {
    Rows,
    Columns,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Dimension::Rows => write!(f, "rows"),
            Dimension::Columns => write!(f, "columns"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Subject {
    Dimension(Dimension),
    /// Zero-based row index
    Row(usize),
}

impl Subject {
    fn prompt(self) -> String {
        match self {
            Subject::Dimension(dimension) => format!("Input number of {}: ", dimension),
            Subject::Row(index) => format!("Input matrix row {}: ", index + 1),
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Subject::Dimension(dimension) => write!(f, "number of {}", dimension),
            Subject::Row(index) => write!(f, "matrix row {}", index + 1),
        }
    }
}

/// The message shown to the user when a line is rejected.
pub trait Complaint {
    fn complaint(&self) -> &'static str;
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DimensionError {
    #[error("{0:?} is not an integer")]
    NotAnInteger(String),

    #[error("{0} is negative")]
    Negative(i64),

    #[error("{0} is too large")]
    TooLarge(i64),
}

impl Complaint for DimensionError {
    fn complaint(&self) -> &'static str {
        "Please input a non-negative integer value."
    }
}

pub fn parse_dimension(line: &str) -> Result<usize, DimensionError> {
    let line = line.trim();
    let value = parse_integer(line).ok_or_else(|| DimensionError::NotAnInteger(line.to_owned()))?;

    if value < 0 {
        Err(DimensionError::Negative(value))
    } else {
        usize::try_from(value).map_err(|_| DimensionError::TooLarge(value))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RowError {
    #[error("{0:?} is not an integer")]
    NotAnInteger(String),

    #[error("{0} is not 0 or 1")]
    NotBinary(i64),

    #[error("expected {expected} columns, found {found}")]
    WrongLength { expected: usize, found: usize },
}

impl Complaint for RowError {
    fn complaint(&self) -> &'static str {
        match self {
            RowError::NotAnInteger(..) | RowError::NotBinary(..) => {
                "Elements can only be 0 or 1; please retry."
            }
            RowError::WrongLength { .. } => "Please enter the proper number of columns.",
        }
    }
}

// Values are checked before the count
pub fn parse_row(line: &str, columns: usize) -> Result<Vec<u8>, RowError> {
    let values = line
        .split_whitespace()
        .map(|token| parse_integer(token).ok_or_else(|| RowError::NotAnInteger(token.to_owned())))
        .collect::<Result<Vec<i64>, RowError>>()?;

    let row = values
        .iter()
        .map(|&value| match value {
            0 => Ok(0),
            1 => Ok(1),
            _ => Err(RowError::NotBinary(value)),
        })
        .collect::<Result<Vec<u8>, RowError>>()?;

    if row.len() != columns {
        return Err(RowError::WrongLength {
            expected: columns,
            found: row.len(),
        });
    }

    Ok(row)
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input ended while reading {subject}")]
    UnexpectedEof { subject: Subject },

    #[error("gave up reading {subject} after {attempts} invalid attempts")]
    TooManyAttempts { subject: Subject, attempts: usize },

    #[error("invalid matrix: {0}")]
    Matrix(#[from] MatrixError),
}

/// Reads a matrix line by line, re-prompting on bad input. Prompts and
/// complaints go to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
    show_prompts: bool,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            show_prompts: false,
            line: String::new(),
        }
    }

    /// Give up after `max_attempts` rejected lines for a single value.
    /// 0 means never give up.
    pub fn with_max_attempts(self, max_attempts: usize) -> Self {
        Prompter {
            max_attempts,
            ..self
        }
    }

    pub fn with_prompts(self, show_prompts: bool) -> Self {
        Prompter {
            show_prompts,
            ..self
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_until<T, E>(
        &mut self,
        subject: Subject,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, PromptError>
    where
        E: Complaint + Display,
    {
        let mut attempts = 0;

        loop {
            if self.show_prompts {
                write!(self.output, "{}", subject.prompt())?;
                self.output.flush()?;
            }

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(PromptError::UnexpectedEof { subject });
            }

            match parse(&self.line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempts += 1;
                    debug!("Rejected {}: {}", subject, err);
                    writeln!(self.output, "{}", err.complaint())?;

                    if self.max_attempts != 0 && attempts >= self.max_attempts {
                        warn!("Giving up on {} after {} attempts", subject, attempts);
                        return Err(PromptError::TooManyAttempts { subject, attempts });
                    }
                }
            }
        }
    }

    pub fn read_dimension(&mut self, dimension: Dimension) -> Result<usize, PromptError> {
        self.prompt_until(Subject::Dimension(dimension), parse_dimension)
    }

    pub fn read_row(&mut self, index: usize, columns: usize) -> Result<Vec<u8>, PromptError> {
        self.prompt_until(Subject::Row(index), |line| parse_row(line, columns))
    }

    pub fn read_matrix(&mut self) -> Result<Matrix, PromptError> {
        let num_rows = self.read_dimension(Dimension::Rows)?;
        let num_columns = self.read_dimension(Dimension::Columns)?;
        debug!("Reading a {}x{} matrix", num_rows, num_columns);

        let rows = (0..num_rows)
            .map(|index| self.read_row(index, num_columns))
            .collect::<Result<Vec<Vec<u8>>, PromptError>>()?;

        Ok(Matrix::from_rows(&rows)?)
    }
}
