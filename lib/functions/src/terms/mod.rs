mod bnode;
mod datatype;
mod iri;
mod lang;
mod str;
mod strdt;
mod strlang;

pub use bnode::*;
pub use datatype::*;
pub use iri::*;
pub use lang::*;
pub use self::str::*;
pub use strdt::*;
pub use strlang::*;
