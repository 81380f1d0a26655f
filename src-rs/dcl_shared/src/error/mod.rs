//! Diagnostics for the dcl configuration language

mod context;
mod location;
mod traits;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsDclError;
