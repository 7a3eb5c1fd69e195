pub mod aggregates;
mod registry;
mod strings;
mod terms;

pub use registry::*;
pub use strings::*;
pub use terms::*;

use sparql_bridge_model::{ThinResult, TypedValue};

/// A SPARQL operation over one term.
///
/// Implementations are pure: they never perform I/O and treat unsuitable argument types as an
/// expected [sparql_bridge_model::ThinError], not a hard failure.
pub trait UnaryTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue>;
}

/// A SPARQL operation over two terms.
pub trait BinaryTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue>;
}

/// A SPARQL operation over three terms.
pub trait TernaryTermOp {
    fn evaluate(
        &self,
        arg0: &TypedValue,
        arg1: &TypedValue,
        arg2: &TypedValue,
    ) -> ThinResult<TypedValue>;
}

/// A SPARQL operation over any number of terms.
pub trait NAryTermOp {
    fn evaluate(&self, args: &[TypedValue]) -> ThinResult<TypedValue>;
}
