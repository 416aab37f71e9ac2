pub mod maybe;
pub mod error;
pub mod fallible;
pub mod iter;
pub mod app;

#[cfg(feature = "serde")]
mod serde_impls;

pub use maybe::{Absent, Maybe, Present};
pub use error::AbsentError;
pub use fallible::Classify;
