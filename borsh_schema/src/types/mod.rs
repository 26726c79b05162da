mod descriptor;
mod schema;

pub use descriptor::*;
pub use schema::*;
