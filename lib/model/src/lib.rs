mod compare;
mod error;
mod numeric;
mod parse;
mod string_literal;
mod typed;

pub use compare::*;
pub use error::*;
pub use numeric::*;
pub use parse::*;
pub use string_literal::*;
pub use typed::*;

// Re-export some oxrdf types.
pub use oxiri::Iri;
pub use oxrdf::vocab;
pub use oxrdf::{
    BlankNode, BlankNodeRef, IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef, Term,
    TermRef,
};
