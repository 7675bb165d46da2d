use std::fmt::{self, Display, Formatter};

use crate::error::MaybeError;

/// Zero or one value of type `A`.
///
/// Created with [`wrap`](Self::wrap), [`absent`](Self::absent), or [`present`](Self::present). Every entry point that
/// takes an [`Option`] collapses `None` into [`Absent`](Self::Absent), while [`present`](Self::present) stores its
/// value verbatim. Operations never mutate a container; they consume it and return a new one.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Maybe<A> {
  Present(A),
  Absent,
}

impl<A> Default for Maybe<A> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<A> Maybe<A> {
  /// Wrap `value`, returning [`Absent`](Self::Absent) if it is `None`.
  #[inline]
  pub fn wrap(value: Option<A>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  #[inline]
  pub const fn absent() -> Self { Self::Absent }

  /// Wrap `value` as [`Present`](Self::Present) without any absence check. `Maybe::present(None)` is a present
  /// container holding `None`; use [`flatten_option`](Maybe::flatten_option) to collapse it.
  #[inline]
  pub const fn present(value: A) -> Self { Self::Present(value) }


  #[inline]
  pub const fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  #[inline]
  pub const fn is_present(&self) -> bool { !self.is_absent() }


  /// Apply `f` to the held value. `f` is not called when `self` is absent.
  #[inline]
  pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
    match self {
      Self::Present(value) => Maybe::Present(f(value)),
      Self::Absent => Maybe::Absent,
    }
  }

  /// Apply `f` to the held value and [wrap](Maybe::wrap) the result, so that `f` returning `None` produces an absent
  /// container.
  #[inline]
  pub fn filter_map<B>(self, f: impl FnOnce(A) -> Option<B>) -> Maybe<B> {
    match self {
      Self::Present(value) => Maybe::wrap(f(value)),
      Self::Absent => Maybe::Absent,
    }
  }

  /// Apply `f` to the held value and return its container as-is.
  #[inline]
  pub fn flat_map<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Maybe::Absent,
    }
  }

  /// Apply the function held by `f` to the value held by `self`. The result is present only if both are present.
  ///
  /// Absence of `self` short-circuits: `f` is not inspected and its function is not called.
  #[inline]
  pub fn apply<B, F>(self, f: Maybe<F>) -> Maybe<B> where
    F: FnOnce(A) -> B,
  {
    match self {
      Self::Present(value) => f.map(|f| f(value)),
      Self::Absent => Maybe::Absent,
    }
  }


  #[inline]
  pub fn get_or_else(self, default: A) -> A {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }

  /// Return `self` if present, otherwise [wrap](Self::wrap) `default`. A `None` default yields an absent container.
  #[inline]
  pub fn or_else(self, default: impl Into<Option<A>>) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => Self::wrap(default.into()),
    }
  }

  /// Return the held value.
  ///
  /// # Errors
  ///
  /// Returns [`MaybeError::EmptyValueAccess`] if `self` is absent.
  #[inline]
  pub fn get(self) -> Result<A, MaybeError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => {
        #[cfg(feature = "tracing")]
        tracing::trace!("attempted to get value from absent container");
        Err(MaybeError::EmptyValueAccess)
      }
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Maybe<&A> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }
}

impl<A> Maybe<Maybe<A>> {
  #[inline]
  pub fn flatten(self) -> Maybe<A> { self.flat_map(|inner| inner) }
}

impl<A> Maybe<Option<A>> {
  /// Collapse a present `None` into an absent container.
  #[inline]
  pub fn flatten_option(self) -> Maybe<A> { self.filter_map(|inner| inner) }
}


impl<A> From<Option<A>> for Maybe<A> {
  #[inline]
  fn from(value: Option<A>) -> Self { Self::wrap(value) }
}

impl<A> From<Maybe<A>> for Option<A> {
  #[inline]
  fn from(value: Maybe<A>) -> Self {
    match value {
      Maybe::Present(value) => Some(value),
      Maybe::Absent => None,
    }
  }
}

impl<A: Display> Display for Maybe<A> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Present(value) => write!(f, "Present({})", value),
      Self::Absent => f.write_str("Absent"),
    }
  }
}
