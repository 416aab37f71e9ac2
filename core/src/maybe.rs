use std::fmt;

use crate::error::AbsentError;

pub use self::Maybe::{Absent, Present};

/// An optional value: either [`Present`] with a value of type `T`, or [`Absent`].
///
/// Combinators consume `self` and produce a new `Maybe`. They short-circuit on [`Absent`]: functions passed to
/// them are never invoked when there is no value to pass.
///
/// Ordering follows [`Option`]: [`Absent`] is less than any [`Present`] value.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Maybe<T> {
  Absent,
  Present(T),
}

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Absent }
}

impl<T> Maybe<T> {
  /// Returns `true` if this is [`Present`]; the truthiness of a maybe.
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Present(_)) }

  #[inline]
  pub const fn is_absent(&self) -> bool { !self.is_present() }

  /// Returns `true` if this is [`Present`] and its value satisfies `predicate`.
  #[inline]
  pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Present(value) => predicate(value),
      Absent => false,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Present(value) => Present(value),
      Absent => Absent,
    }
  }


  /// Maps the value with `f` if [`Present`].
  #[inline]
  pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Maybe<R> {
    match self {
      Present(value) => Present(f(value)),
      Absent => Absent,
    }
  }

  /// Keeps a [`Present`] value unchanged, or produces one with `f` if [`Absent`]. The result is always [`Present`].
  #[inline]
  pub fn map_absent(self, f: impl FnOnce() -> T) -> Maybe<T> {
    match self {
      Present(value) => Present(value),
      Absent => Present(f()),
    }
  }

  /// Chains a computation that may itself be [`Absent`], flattening one level of nesting.
  #[inline]
  pub fn bind<R>(self, f: impl FnOnce(T) -> Maybe<R>) -> Maybe<R> {
    match self {
      Present(value) => f(value),
      Absent => Absent,
    }
  }

  /// Alias of [`bind`](Self::bind).
  #[inline]
  pub fn and_then<R>(self, f: impl FnOnce(T) -> Maybe<R>) -> Maybe<R> { self.bind(f) }

  /// Combines this value with the value of `other` using `f`, if both are [`Present`].
  #[inline]
  pub fn lift_two<R, U>(self, other: Maybe<R>, f: impl FnOnce(T, R) -> U) -> Maybe<U> {
    match (self, other) {
      (Present(value), Present(other)) => Present(f(value, other)),
      _ => Absent,
    }
  }

  /// Lifts binary function `f` into a function over two maybes, which applies `f` with
  /// [`lift_two`](Self::lift_two).
  ///
  /// ```
  /// # use perhaps_core::{Absent, Maybe, Present};
  /// let add = Maybe::lift2(|a: i32, b: i32| a + b);
  /// assert_eq!(add(Present(5), Present(7)), Present(12));
  /// assert_eq!(add(Present(5), Absent), Absent);
  /// ```
  #[inline]
  pub fn lift2<R, U>(f: impl Fn(T, R) -> U) -> impl Fn(Maybe<T>, Maybe<R>) -> Maybe<U> {
    move |maybe, other| maybe.lift_two(other, &f)
  }


  /// Returns the [`Present`] value.
  ///
  /// # Panics
  ///
  /// Panics with the [`AbsentError`] message if [`Absent`]. Prefer [`try_unwrap`](Self::try_unwrap),
  /// [`unwrap_or_raise`](Self::unwrap_or_raise), or one of the `unwrap_or` variants outside of prototypes.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Present(value) => value,
      Absent => panic!("{}", AbsentError),
    }
  }

  /// Returns the [`Present`] value.
  ///
  /// # Panics
  ///
  /// Panics with `message` followed by the [`AbsentError`] message if [`Absent`].
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Present(value) => value,
      Absent => panic!("{}: {}", message, AbsentError),
    }
  }

  /// Returns the [`Present`] value, or [`AbsentError`] if [`Absent`].
  #[inline]
  pub fn try_unwrap(self) -> Result<T, AbsentError> {
    self.unwrap_or_raise(|| AbsentError)
  }

  /// Returns the [`Present`] value, or the error created by `error` if [`Absent`].
  #[inline]
  pub fn unwrap_or_raise<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Present(value) => Ok(value),
      Absent => Err(error()),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Present(value) => value,
      Absent => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Present(value) => value,
      Absent => f(),
    }
  }


  /// Keeps a [`Present`] value only if it satisfies `predicate`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Maybe<T> {
    match self {
      Present(value) => if predicate(&value) { Present(value) } else { Absent },
      Absent => Absent,
    }
  }

  /// Keeps a [`Present`] value only if it satisfies `predicate`, re-typing it to `R` when it does.
  ///
  /// ```
  /// # use perhaps_core::{Absent, Maybe, Present};
  /// assert_eq!(Present(7_u8).filter_typed::<i64>(|v| *v > 5), Present(7_i64));
  /// assert_eq!(Present(3_u8).filter_typed::<i64>(|v| *v > 5), Absent);
  /// ```
  #[inline]
  pub fn filter_typed<R: From<T>>(self, predicate: impl FnOnce(&T) -> bool) -> Maybe<R> {
    self.filter(predicate).map(R::from)
  }

  /// Narrows a [`Present`] value to type `R`, keeping it only if the conversion succeeds.
  ///
  /// ```
  /// # use perhaps_core::{Absent, Maybe, Present};
  /// assert_eq!(Present(200_i64).narrow::<u8>(), Present(200_u8));
  /// assert_eq!(Present(300_i64).narrow::<u8>(), Absent);
  /// ```
  #[inline]
  pub fn narrow<R: TryFrom<T>>(self) -> Maybe<R> {
    self.bind(|value| R::try_from(value).ok().into())
  }


  /// Returns `other` if this is [`Present`], otherwise [`Absent`].
  #[inline]
  pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
    match self {
      Present(_) => other,
      Absent => Absent,
    }
  }

  /// Returns this maybe if [`Present`], otherwise `other`.
  #[inline]
  pub fn or(self, other: Maybe<T>) -> Maybe<T> {
    match self {
      Present(value) => Present(value),
      Absent => other,
    }
  }

  /// Returns this maybe if [`Present`], otherwise the maybe produced by `f`.
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
    match self {
      Present(value) => Present(value),
      Absent => f(),
    }
  }


  #[inline]
  pub fn from_option(option: Option<T>) -> Self {
    match option {
      Some(value) => Present(value),
      None => Absent,
    }
  }

  #[inline]
  pub fn to_option(self) -> Option<T> {
    match self {
      Present(value) => Some(value),
      Absent => None,
    }
  }
}

impl<T: Clone> Maybe<&T> {
  #[inline]
  pub fn cloned(self) -> Maybe<T> { self.map(T::clone) }
}

impl<T: Copy> Maybe<&T> {
  #[inline]
  pub fn copied(self) -> Maybe<T> { self.map(|value| *value) }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { Self::from_option(option) }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self { maybe.to_option() }
}

impl<T: fmt::Debug> fmt::Display for Maybe<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Present(value) => write!(f, "Present({:?})", value),
      Absent => f.write_str("Absent()"),
    }
  }
}
