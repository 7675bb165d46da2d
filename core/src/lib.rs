pub mod maybe;
pub mod error;
pub mod option_ext;

pub use error::MaybeError;
pub use maybe::Maybe;
pub use option_ext::OptionExt;
