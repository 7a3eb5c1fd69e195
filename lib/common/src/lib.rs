mod error;
mod options;

pub use error::*;
pub use options::*;
