mod id;
mod note;

pub use id::*;
pub use note::*;
