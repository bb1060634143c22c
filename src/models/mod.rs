// This file declares all model modules and re-exports their contents
// This allows other parts of the code to use `use crate::models::SharedMap`
// instead of `use crate::models::shared_map::SharedMap`

pub mod fill;
pub mod shared_map;

pub use fill::*;
pub use shared_map::*;
