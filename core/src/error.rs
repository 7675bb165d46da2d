use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum MaybeError {
  #[error("Cannot get value from an absent container")]
  EmptyValueAccess,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_value_access_message() {
    assert_eq!(MaybeError::EmptyValueAccess.to_string(), "Cannot get value from an absent container");
  }
}
