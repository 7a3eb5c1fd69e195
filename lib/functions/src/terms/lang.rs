use crate::UnaryTermOp;
use sparql_bridge_model::{ThinError, ThinResult, TypedValue};

/// [SPARQL 1.1 - LANG](https://www.w3.org/TR/sparql11-query/#func-lang)
///
/// Untagged literals yield the empty string. Non-literals raise an expected error.
#[derive(Debug, Default)]
pub struct LangTermOp;

impl LangTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for LangTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        if !arg.is_literal() {
            return ThinError::expected();
        }
        Ok(TypedValue::simple(arg.language().unwrap_or("")))
    }
}
