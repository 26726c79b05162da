mod error;
mod serde;
mod types;

pub use error::*;
pub use serde::*;
pub use types::*;
