use crate::strings::regex::compile_pattern;
use crate::{NAryTermOp, TernaryTermOp};
use sparql_bridge_model::{
    OwnedStringLiteral, StringLiteralRef, ThinError, ThinResult, TypedValue, ValueKind,
};

/// [SPARQL 1.1 - REPLACE](https://www.w3.org/TR/sparql11-query/#func-replace)
///
/// The language tag of the text operand is preserved. The four-argument form takes regex flags.
#[derive(Debug, Default)]
pub struct ReplaceTermOp;

impl ReplaceTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl TernaryTermOp for ReplaceTermOp {
    fn evaluate(
        &self,
        arg0: &TypedValue,
        arg1: &TypedValue,
        arg2: &TypedValue,
    ) -> ThinResult<TypedValue> {
        evaluate_replace(arg0, arg1, arg2, None)
    }
}

impl NAryTermOp for ReplaceTermOp {
    fn evaluate(&self, args: &[TypedValue]) -> ThinResult<TypedValue> {
        match args {
            [text, pattern, replacement] => evaluate_replace(text, pattern, replacement, None),
            [text, pattern, replacement, flags] => {
                evaluate_replace(text, pattern, replacement, Some(simple_lexical(flags)?))
            }
            _ => ThinError::expected(),
        }
    }
}

fn simple_lexical(value: &TypedValue) -> ThinResult<&str> {
    match value.kind() {
        ValueKind::SimpleLiteral => Ok(value.lexical()),
        _ => ThinError::expected(),
    }
}

fn evaluate_replace(
    text: &TypedValue,
    pattern: &TypedValue,
    replacement: &TypedValue,
    flags: Option<&str>,
) -> ThinResult<TypedValue> {
    let text = StringLiteralRef::try_from(text)?;
    let regex =
        compile_pattern(simple_lexical(pattern)?, flags).ok_or(ThinError::default())?;
    let result = regex
        .replace_all(text.0, simple_lexical(replacement)?)
        .into_owned();

    TypedValue::string_literal(OwnedStringLiteral(result, text.1.map(ToOwned::to_owned)))
        .map_err(Into::into)
}
