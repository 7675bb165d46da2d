use crate::maybe::Maybe;

/// Extension trait converting an [`Option`] into a [`Maybe`].
pub trait OptionExt<A> {
  /// Wrap `self`, collapsing `None` into [`Maybe::Absent`].
  fn into_maybe(self) -> Maybe<A>;
}

impl<A> OptionExt<A> for Option<A> {
  #[inline]
  fn into_maybe(self) -> Maybe<A> { Maybe::wrap(self) }
}
