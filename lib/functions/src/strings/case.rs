use crate::UnaryTermOp;
use sparql_bridge_model::{OwnedStringLiteral, StringLiteralRef, ThinResult, TypedValue};

/// [SPARQL 1.1 - UCASE](https://www.w3.org/TR/sparql11-query/#func-ucase)
#[derive(Debug, Default)]
pub struct UCaseTermOp;

impl UCaseTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for UCaseTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        let arg = StringLiteralRef::try_from(arg)?;
        TypedValue::string_literal(OwnedStringLiteral(
            arg.0.to_uppercase(),
            arg.1.map(ToOwned::to_owned),
        ))
        .map_err(Into::into)
    }
}

/// [SPARQL 1.1 - LCASE](https://www.w3.org/TR/sparql11-query/#func-lcase)
#[derive(Debug, Default)]
pub struct LCaseTermOp;

impl LCaseTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for LCaseTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        let arg = StringLiteralRef::try_from(arg)?;
        TypedValue::string_literal(OwnedStringLiteral(
            arg.0.to_lowercase(),
            arg.1.map(ToOwned::to_owned),
        ))
        .map_err(Into::into)
    }
}
