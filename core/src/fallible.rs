use std::io;
use std::num::{IntErrorKind, ParseIntError};

use crate::maybe::{Absent, Maybe, Present};

/// Classifies an error into a kind, which is compared against a declared set of kinds by
/// [`Maybe::from_fallible`].
pub trait Classify {
  type Kind: PartialEq;

  fn classify(&self) -> Self::Kind;
}

impl Classify for io::Error {
  type Kind = io::ErrorKind;

  #[inline]
  fn classify(&self) -> io::ErrorKind { self.kind() }
}

impl Classify for ParseIntError {
  type Kind = IntErrorKind;

  #[inline]
  fn classify(&self) -> IntErrorKind { self.kind().clone() }
}

#[cfg(feature = "serde_json")]
impl Classify for serde_json::Error {
  type Kind = serde_json::error::Category;

  #[inline]
  fn classify(&self) -> serde_json::error::Category { serde_json::Error::classify(self) }
}

impl<T> Maybe<T> {
  /// Runs `f`, turning its success into [`Present`] and errors of one of the given `kinds` into [`Absent`]. Errors
  /// of any other kind are returned unchanged.
  ///
  /// ```
  /// # use std::num::IntErrorKind;
  /// # use perhaps_core::{Absent, Maybe, Present};
  /// assert_eq!(Maybe::from_fallible(|| "1".parse::<i32>(), &[IntErrorKind::Empty]), Ok(Present(1)));
  /// assert_eq!(Maybe::from_fallible(|| "".parse::<i32>(), &[IntErrorKind::Empty]), Ok(Absent));
  /// assert!(Maybe::from_fallible(|| "x".parse::<i32>(), &[IntErrorKind::Empty]).is_err());
  /// ```
  #[inline]
  pub fn from_fallible<E: Classify>(f: impl FnOnce() -> Result<T, E>, kinds: &[E::Kind]) -> Result<Self, E> {
    Self::from_fallible_if(f, |error| kinds.contains(&error.classify()))
  }

  /// Runs `f`, turning its success into [`Present`] and errors for which `is_absence` holds into [`Absent`]. Other
  /// errors are returned unchanged.
  #[inline]
  pub fn from_fallible_if<E>(
    f: impl FnOnce() -> Result<T, E>,
    is_absence: impl FnOnce(&E) -> bool,
  ) -> Result<Self, E> {
    match f() {
      Ok(value) => Ok(Present(value)),
      Err(error) => if is_absence(&error) { Ok(Absent) } else { Err(error) },
    }
  }
}


#[cfg(test)]
mod tests {
  use std::fs::File;

  use super::*;

  #[test]
  fn declared_kind_becomes_absent() {
    let result = Maybe::from_fallible(
      || Err::<i32, _>(io::Error::new(io::ErrorKind::NotFound, "no such file")),
      &[io::ErrorKind::NotFound],
    );
    assert_eq!(result.ok(), Some(Absent));
  }

  #[test]
  fn undeclared_kind_propagates_unchanged() {
    let result = Maybe::from_fallible(
      || Err::<i32, _>(io::Error::new(io::ErrorKind::PermissionDenied, "locked")),
      &[io::ErrorKind::NotFound],
    );
    let error = result.expect_err("undeclared error kind should propagate");
    assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(error.to_string(), "locked");
  }

  #[test]
  fn propagated_error_keeps_source() {
    #[derive(Debug, thiserror::Error)]
    #[error("wrapped")]
    struct Wrapped(#[source] Cause);
    #[derive(Debug, thiserror::Error)]
    #[error("inner cause")]
    struct Cause;

    let result = Maybe::from_fallible(
      || Err::<(), _>(io::Error::new(io::ErrorKind::Other, Wrapped(Cause))),
      &[io::ErrorKind::NotFound, io::ErrorKind::InvalidData],
    );
    let error = result.expect_err("undeclared error kind should propagate");
    let wrapped = error.get_ref().expect("custom error should be kept");
    assert_eq!(wrapped.to_string(), "wrapped");
    assert_eq!(wrapped.source().map(ToString::to_string), Some("inner cause".to_string()));
  }

  #[test]
  fn success_becomes_present() {
    let result = Maybe::from_fallible(|| "42".parse::<u8>(), &[IntErrorKind::Empty]);
    assert_eq!(result, Ok(Present(42)));
  }

  #[test]
  fn parse_int_kinds() {
    let kinds = [IntErrorKind::Empty, IntErrorKind::PosOverflow];
    assert_eq!(Maybe::from_fallible(|| "".parse::<u8>(), &kinds), Ok(Absent));
    assert_eq!(Maybe::from_fallible(|| "256".parse::<u8>(), &kinds), Ok(Absent));
    let error = Maybe::from_fallible(|| "-1".parse::<u8>(), &kinds).unwrap_err();
    assert_eq!(error.kind(), &IntErrorKind::InvalidDigit);
  }

  #[test]
  fn missing_file_is_absent() {
    let result = Maybe::from_fallible(
      || File::open("/this/path/does/not/exist/perhaps.txt"),
      &[io::ErrorKind::NotFound],
    );
    assert!(matches!(result, Ok(Absent)));
  }

  #[derive(PartialEq, Debug)]
  enum LookupError {
    Missing(&'static str),
    Corrupt(&'static str),
  }

  #[derive(PartialEq, Debug)]
  enum LookupErrorKind {
    Missing,
    Corrupt,
  }

  impl Classify for LookupError {
    type Kind = LookupErrorKind;

    fn classify(&self) -> LookupErrorKind {
      match self {
        LookupError::Missing(_) => LookupErrorKind::Missing,
        LookupError::Corrupt(_) => LookupErrorKind::Corrupt,
      }
    }
  }

  #[test]
  fn custom_kinds() {
    let missing = || Err::<i32, _>(LookupError::Missing("key"));
    let corrupt = || Err::<i32, _>(LookupError::Corrupt("checksum mismatch"));
    assert_eq!(Maybe::from_fallible(missing, &[LookupErrorKind::Missing]), Ok(Absent));
    assert_eq!(
      Maybe::from_fallible(corrupt, &[LookupErrorKind::Missing]),
      Err(LookupError::Corrupt("checksum mismatch"))
    );
    assert_eq!(
      Maybe::from_fallible(corrupt, &[LookupErrorKind::Missing, LookupErrorKind::Corrupt]),
      Ok(Absent)
    );
  }

  #[test]
  fn no_declared_kinds_propagates_everything() {
    let result = Maybe::from_fallible(|| Err::<i32, _>(LookupError::Missing("key")), &[]);
    assert_eq!(result, Err(LookupError::Missing("key")));
  }

  #[test]
  fn predicate() {
    let result = Maybe::from_fallible_if(|| Err::<i32, _>("gone"), |error| *error == "gone");
    assert_eq!(result, Ok(Absent));
    let result = Maybe::from_fallible_if(|| Err::<i32, _>("broken"), |error| *error == "gone");
    assert_eq!(result, Err("broken"));
    let result = Maybe::from_fallible_if(|| Ok::<_, &str>(1), |_| panic!("predicate invoked on success"));
    assert_eq!(result, Ok(Present(1)));
  }

  #[cfg(feature = "serde_json")]
  #[test]
  fn serde_json_categories() {
    use serde_json::error::Category;

    let eof = Maybe::from_fallible(|| serde_json::from_str::<Vec<i32>>("[1, 2"), &[Category::Eof]);
    assert!(matches!(eof, Ok(Absent)));
    let syntax = Maybe::from_fallible(|| serde_json::from_str::<Vec<i32>>("[1, }"), &[Category::Eof]);
    assert_eq!(syntax.unwrap_err().classify(), Category::Syntax);
  }
}
