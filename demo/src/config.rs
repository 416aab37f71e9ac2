use std::env::VarError;
use std::num::{IntErrorKind, ParseIntError};

use perhaps_core::app::env;
use perhaps_core::Maybe;

const NODES_VAR: &str = "PERHAPS_NODES";
const NUMBERS_VAR: &str = "PERHAPS_NUMBERS";
const DEFAULT_NODES: &str = "first,second,third";
const DEFAULT_NUMBERS: &str = "1,2,3";

#[derive(Clone, Debug)]
pub struct Config {
  /// Labels of the linked list nodes, in order.
  pub nodes: Vec<String>,
  /// Numbers to sum; empty entries are absent.
  pub numbers: Vec<Maybe<i64>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Failed to read environment variable {0}: {1}")]
  Var(&'static str, #[source] VarError),
  #[error("Failed to parse number {value:?}: {source}")]
  ParseNumber {
    value: String,
    #[source]
    source: ParseIntError,
  },
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    let nodes = read_var(NODES_VAR, DEFAULT_NODES)?;
    let numbers = read_var(NUMBERS_VAR, DEFAULT_NUMBERS)?;
    Self::parse(&nodes, &numbers)
  }

  pub fn parse(nodes: &str, numbers: &str) -> Result<Self, ConfigError> {
    let nodes = nodes.split(',')
      .map(str::trim)
      .filter(|node| !node.is_empty())
      .map(str::to_string)
      .collect();
    let numbers = numbers.split(',')
      .map(parse_number)
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self { nodes, numbers })
  }
}

fn read_var(key: &'static str, default: &str) -> Result<String, ConfigError> {
  let value = env::var(key).map_err(|e| ConfigError::Var(key, e))?;
  Ok(value.unwrap_or_else(|| default.to_string()))
}

fn parse_number(value: &str) -> Result<Maybe<i64>, ConfigError> {
  let value = value.trim();
  Maybe::from_fallible(|| value.parse::<i64>(), &[IntErrorKind::Empty])
    .map_err(|source| ConfigError::ParseNumber { value: value.to_string(), source })
}


#[cfg(test)]
mod tests {
  use perhaps_core::{Absent, Present};

  use super::*;

  #[test]
  fn parse_defaults() {
    let config = Config::parse(DEFAULT_NODES, DEFAULT_NUMBERS).unwrap();
    assert_eq!(config.nodes, vec!["first", "second", "third"]);
    assert_eq!(config.numbers, vec![Present(1), Present(2), Present(3)]);
  }

  #[test]
  fn empty_numbers_are_absent() {
    let config = Config::parse("a, b,", "1, ,3").unwrap();
    assert_eq!(config.nodes, vec!["a", "b"]);
    assert_eq!(config.numbers, vec![Present(1), Absent, Present(3)]);
  }

  #[test]
  fn invalid_number_is_an_error() {
    let error = Config::parse("a", "1,x").unwrap_err();
    match error {
      ConfigError::ParseNumber { value, source } => {
        assert_eq!(value, "x");
        assert_eq!(source.kind(), &IntErrorKind::InvalidDigit);
      }
      e => panic!("unexpected error: {}", e),
    }
  }

  #[test]
  fn overflowing_number_is_an_error() {
    let error = Config::parse("a", "99999999999999999999").unwrap_err();
    assert_eq!(error.to_string(), "Failed to parse number \"99999999999999999999\": number too large to fit in target type");
  }
}
