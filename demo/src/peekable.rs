use std::mem;

use perhaps_core::Maybe;

/// Iterator that buffers the next element of `source`, so it can be [peeked](Self::peek) at.
pub struct Peekable<I: Iterator> {
  source: I,
  current: Maybe<I::Item>,
}
impl<I: Iterator> Peekable<I> {
  pub fn new(source: impl IntoIterator<IntoIter=I>) -> Self {
    let mut source = source.into_iter();
    let current = Maybe::from_next(&mut source);
    Self { source, current }
  }

  /// Returns the element that the next call to [`next`](Iterator::next) returns, or
  /// [`Absent`](perhaps_core::Absent) if the source is exhausted.
  #[inline]
  pub fn peek(&self) -> Maybe<&I::Item> { self.current.as_ref() }
}

impl<I: Iterator> Iterator for Peekable<I> {
  type Item = I::Item;

  fn next(&mut self) -> Option<I::Item> {
    let result = mem::take(&mut self.current).to_option()?;
    self.current = Maybe::from_next(&mut self.source);
    Some(result)
  }
}
