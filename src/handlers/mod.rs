// This file declares the handler modules and re-exports their contents
// This allows other parts of the code to use `use crate::handlers::function_name`
// instead of `use crate::handlers::misuse::function_name`

pub mod health;
pub mod misuse;

pub use health::*;
pub use misuse::*;
