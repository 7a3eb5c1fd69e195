use crate::NAryTermOp;
use sparql_bridge_model::{
    OwnedStringLiteral, StringLiteralRef, ThinResult, TypedValue,
};

/// [SPARQL 1.1 - CONCAT](https://www.w3.org/TR/sparql11-query/#func-concat)
///
/// The result keeps a language tag only when every operand carries the same one; conflicting
/// tags degrade the result to a plain literal.
#[derive(Debug, Default)]
pub struct ConcatTermOp;

impl ConcatTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl NAryTermOp for ConcatTermOp {
    fn evaluate(&self, args: &[TypedValue]) -> ThinResult<TypedValue> {
        let mut result = String::default();
        let mut language: Option<Option<&str>> = None;

        for arg in args {
            let arg = StringLiteralRef::try_from(arg)?;
            if let Some(lang) = &language {
                if *lang != arg.1 {
                    language = Some(None);
                }
            } else {
                language = Some(arg.1);
            }
            result += arg.0;
        }

        TypedValue::string_literal(OwnedStringLiteral(
            result,
            language.flatten().map(ToOwned::to_owned),
        ))
        .map_err(Into::into)
    }
}
