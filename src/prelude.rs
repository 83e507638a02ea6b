pub use crate::pkg::internal::error::EvalError;

pub type Result<T> = core::result::Result<T, EvalError>;
