/// Error for extracting the value out of an [`Absent`](crate::Absent) maybe.
///
/// Distinct from any error produced by downstream code, so callers can tell "the value was absent" apart from
/// other failures.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("tried to unwrap Absent")]
pub struct AbsentError;
