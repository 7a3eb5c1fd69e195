use crate::BinaryTermOp;
use sparql_bridge_model::{ThinError, ThinResult, TypedValue, ValueKind};

/// [SPARQL 1.1 - STRDT](https://www.w3.org/TR/sparql11-query/#func-strdt)
///
/// Builds a typed literal from a simple literal and a datatype IRI. The lexical form must fit
/// the datatype's value space when the datatype is one of the constrained ones.
#[derive(Debug, Default)]
pub struct StrDtTermOp;

impl StrDtTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for StrDtTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        if !matches!(lhs.kind(), ValueKind::SimpleLiteral) || !rhs.is_iri() {
            return ThinError::expected();
        }
        let datatype = match rhs.term() {
            sparql_bridge_model::Term::NamedNode(node) => node.clone(),
            _ => return ThinError::expected(),
        };
        TypedValue::typed_literal(lhs.lexical(), datatype).map_err(Into::into)
    }
}
