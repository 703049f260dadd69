//! Request handlers.

mod index;
mod upload;

pub use index::*;
pub use upload::*;
