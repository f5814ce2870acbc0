use std::io::{self, BufRead, Read};
use thiserror::Error;

/// Whitespace-separated tokens of a text file, one entry per non-blank line.
///
/// Row indices refer to non-blank lines only, counted from zero, which is how the
/// fixed layouts in [`super::poscar`] and [`super::etot`] address their fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRows {
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Row {row} ({field}) is missing; the input has only {available} non-blank row(s)")]
    MissingRow {
        row: usize,
        field: &'static str,
        available: usize,
    },
    #[error("Row {row} ({field}) has {found} token(s), expected at least {expected}")]
    TooFewTokens {
        row: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Row {row} ({field}) has {found} token(s), expected exactly {expected}")]
    UnexpectedTokenCount {
        row: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid number in row {row}, column {column} ({field}): '{value}'")]
    InvalidNumber {
        row: usize,
        column: usize,
        field: &'static str,
        value: String,
    },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            RowError::MissingRow { row, .. }
            | RowError::TooFewTokens { row, .. }
            | RowError::UnexpectedTokenCount { row, .. }
            | RowError::InvalidNumber { row, .. } => *row,
        }
    }
}

impl TokenRows {
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();
        Self { rows }
    }

    pub fn read_from(reader: &mut impl BufRead) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the tokens of `row`, failing unless it holds at least `min_tokens` of them.
    pub fn require(
        &self,
        row: usize,
        min_tokens: usize,
        field: &'static str,
    ) -> Result<&[String], RowError> {
        let tokens = self.row(row).ok_or(RowError::MissingRow {
            row,
            field,
            available: self.rows.len(),
        })?;
        if tokens.len() < min_tokens {
            return Err(RowError::TooFewTokens {
                row,
                field,
                expected: min_tokens,
                found: tokens.len(),
            });
        }
        Ok(tokens)
    }

    pub fn require_exact(
        &self,
        row: usize,
        tokens: usize,
        field: &'static str,
    ) -> Result<&[String], RowError> {
        let found = self.require(row, tokens, field)?;
        if found.len() != tokens {
            return Err(RowError::UnexpectedTokenCount {
                row,
                field,
                expected: tokens,
                found: found.len(),
            });
        }
        Ok(found)
    }

    pub fn field(&self, row: usize, column: usize, field: &'static str) -> Result<&str, RowError> {
        self.require(row, column + 1, field)
            .map(|tokens| tokens[column].as_str())
    }

    pub fn float(&self, row: usize, column: usize, field: &'static str) -> Result<f64, RowError> {
        let value = self.field(row, column, field)?;
        parse_float(value).ok_or_else(|| RowError::InvalidNumber {
            row,
            column,
            field,
            value: value.to_string(),
        })
    }

    pub fn integer(
        &self,
        row: usize,
        column: usize,
        field: &'static str,
    ) -> Result<usize, RowError> {
        let value = self.field(row, column, field)?;
        value.parse().map_err(|_| RowError::InvalidNumber {
            row,
            column,
            field,
            value: value.to_string(),
        })
    }
}

fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
