use crate::BinaryTermOp;
use sparql_bridge_model::{ThinError, ThinResult, TypedValue, ValueKind};

/// [SPARQL 1.1 - STRLANG](https://www.w3.org/TR/sparql11-query/#func-strlang)
///
/// Builds a language-tagged string from two simple literals.
#[derive(Debug, Default)]
pub struct StrLangTermOp;

impl StrLangTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for StrLangTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        if !matches!(lhs.kind(), ValueKind::SimpleLiteral)
            || !matches!(rhs.kind(), ValueKind::SimpleLiteral)
        {
            return ThinError::expected();
        }
        TypedValue::language_string(lhs.lexical(), rhs.lexical()).map_err(Into::into)
    }
}
