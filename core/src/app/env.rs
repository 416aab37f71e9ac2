use std::env::{self, VarError};
use std::ffi::OsStr;

use crate::maybe::Maybe;

/// Loads variables from a `.env` file in the current directory or any of its parents into the environment.
pub fn load_dotenv_into_env() {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
}

/// Gets environment variable `key`, or [`Absent`](crate::Absent) if it is not set.
///
/// Fails if the variable is set but does not contain valid unicode.
pub fn var(key: impl AsRef<OsStr>) -> Result<Maybe<String>, VarError> {
  Maybe::from_fallible_if(|| env::var(key), |error| matches!(error, VarError::NotPresent))
}
