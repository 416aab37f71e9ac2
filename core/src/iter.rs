use std::iter::FusedIterator;
use std::mem;

use crate::maybe::{Absent, Maybe, Present};

impl<T> Maybe<T> {
  /// Takes the next item of `iter`, turning the end of the sequence into [`Absent`].
  #[inline]
  pub fn from_next<I: Iterator<Item=T>>(iter: &mut I) -> Self { iter.next().into() }

  /// Iterates over the [`Present`] value, if any.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter { inner: IntoIter { inner: self.as_ref() } } }
}


/// Iterator over the value of a [`Maybe`], yielding at most one item.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: Maybe<T>,
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> { mem::take(&mut self.inner).to_option() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = usize::from(self.inner.is_present());
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<T> { self.next() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> IntoIter<T> { IntoIter { inner: self } }
}


/// Iterator over a reference to the value of a [`Maybe`], yielding at most one item.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
  inner: IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> { self.inner.next() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> { self.inner.next_back() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> { self.iter() }
}


/// Collects the values of an iterator of maybes into a [`Present`] collection, or [`Absent`] as soon as an item is
/// [`Absent`]. Items after the first [`Absent`] item are not consumed.
impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
  fn from_iter<I: IntoIterator<Item=Maybe<A>>>(iter: I) -> Self {
    let mut found_absent = false;
    let collected: V = iter.into_iter()
      .map_while(|item| match item {
        Present(value) => Some(value),
        Absent => {
          found_absent = true;
          None
        }
      })
      .collect();
    if found_absent { Absent } else { Present(collected) }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_next() {
    let mut iter = [1, 2].into_iter();
    assert_eq!(Maybe::from_next(&mut iter), Present(1));
    assert_eq!(Maybe::from_next(&mut iter), Present(2));
    assert_eq!(Maybe::from_next(&mut iter), Absent);
  }

  #[test]
  fn into_iter() {
    assert_eq!(Present(1).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(Maybe::<i32>::Absent.into_iter().collect::<Vec<_>>(), Vec::<i32>::new());
    assert_eq!(Present(1).into_iter().len(), 1);
    assert_eq!(Maybe::<i32>::Absent.into_iter().len(), 0);
  }

  #[test]
  fn iter() {
    let maybe = Present("a".to_string());
    let mut iter = maybe.iter();
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&"a".to_string()));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    let mut count = 0;
    for value in &maybe {
      assert_eq!(value, "a");
      count += 1;
    }
    assert_eq!(count, 1);
  }

  #[test]
  fn flatten() {
    let values = vec![Present(1), Absent, Present(3)];
    assert_eq!(values.into_iter().flatten().collect::<Vec<_>>(), vec![1, 3]);
  }

  #[test]
  fn collect() {
    let all: Maybe<Vec<i32>> = vec![Present(1), Present(2)].into_iter().collect();
    assert_eq!(all, Present(vec![1, 2]));

    let some: Maybe<Vec<i32>> = vec![Present(1), Absent, Present(3)].into_iter().collect();
    assert_eq!(some, Absent);

    let none: Maybe<Vec<i32>> = Vec::<Maybe<i32>>::new().into_iter().collect();
    assert_eq!(none, Present(Vec::new()));
  }

  #[test]
  fn collect_stops_at_first_absent() {
    let mut consumed = 0;
    let result: Maybe<Vec<i32>> = [Present(1), Absent, Present(3)].into_iter()
      .inspect(|_| consumed += 1)
      .collect();
    assert_eq!(result, Absent);
    assert_eq!(consumed, 2);
  }
}
