use cellbond::core::models::code::StructureCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid {kind} value for {key}: '{value}'")]
    InvalidValue {
        key: String,
        kind: &'static str,
        value: String,
    },
}

/// Clap value parser for structure codes.
pub fn parse_structure_code(s: &str) -> Result<StructureCode, String> {
    StructureCode::parse(s.trim()).map_err(|e| e.to_string())
}

/// Splits a `--set` argument at its first `=`.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(s.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(s.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_value<T: std::str::FromStr>(
    key: &str,
    value: &str,
    kind: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        kind,
        value: value.to_string(),
    })
}

/// Comma-separated list, blanks dropped.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
