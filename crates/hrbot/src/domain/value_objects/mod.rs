//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod generation_options;
mod model_name;

pub use generation_options::*;
pub use model_name::*;
