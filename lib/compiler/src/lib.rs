mod assemble;
mod binding;
mod deparse;
mod error;
mod expr;
mod like;
mod mapping;
mod template;

pub use assemble::*;
pub use binding::*;
pub use deparse::*;
pub use error::*;
pub use expr::*;
pub use like::*;
pub use mapping::*;
pub use template::*;
