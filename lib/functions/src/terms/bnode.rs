use crate::UnaryTermOp;
use sparql_bridge_model::{BlankNode, ThinError, ThinResult, TypedValue, ValueKind};

/// [SPARQL 1.1 - BNODE](https://www.w3.org/TR/sparql11-query/#func-bnode)
///
/// The unary form maps a simple literal to a blank node with that label.
#[derive(Debug, Default)]
pub struct BNodeTermOp;

impl BNodeTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for BNodeTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        match arg.kind() {
            ValueKind::SimpleLiteral => Ok(TypedValue::blank(BlankNode::new(arg.lexical())?)),
            _ => ThinError::expected(),
        }
    }
}
