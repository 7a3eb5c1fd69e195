use crate::{BinaryTermOp, TernaryTermOp};
use sparql_bridge_model::{
    Numeric, OwnedStringLiteral, StringLiteralRef, ThinError, ThinResult, TypedValue, ValueKind,
};

/// [SPARQL 1.1 - SUBSTR](https://www.w3.org/TR/sparql11-query/#func-substr)
///
/// The starting location is one-based and counts characters, not bytes. The language tag of the
/// source operand is preserved.
#[derive(Debug, Default)]
pub struct SubStrTermOp;

impl SubStrTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for SubStrTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        evaluate_substr(lhs, rhs, None)
    }
}

impl TernaryTermOp for SubStrTermOp {
    fn evaluate(
        &self,
        arg0: &TypedValue,
        arg1: &TypedValue,
        arg2: &TypedValue,
    ) -> ThinResult<TypedValue> {
        evaluate_substr(arg0, arg1, Some(arg2))
    }
}

fn as_integer(value: &TypedValue) -> ThinResult<i64> {
    match value.kind() {
        ValueKind::Numeric(Numeric::Integer(value)) => Ok(i64::from(*value)),
        _ => ThinError::expected(),
    }
}

fn evaluate_substr(
    source: &TypedValue,
    starting_loc: &TypedValue,
    length: Option<&TypedValue>,
) -> ThinResult<TypedValue> {
    let source = StringLiteralRef::try_from(source)?;
    let index = usize::try_from(as_integer(starting_loc)?)?;
    let length = match length {
        Some(length) => Some(usize::try_from(as_integer(length)?)?),
        None => None,
    };

    // We want to slice on char indices, not byte indices.
    let mut start_iter = source
        .0
        .char_indices()
        .skip(index.checked_sub(1).ok_or(ThinError::default())?)
        .peekable();
    let result = if let Some((start_position, _)) = start_iter.peek().copied() {
        if let Some(length) = length {
            let mut end_iter = start_iter.skip(length).peekable();
            if let Some((end_position, _)) = end_iter.peek() {
                &source.0[start_position..*end_position]
            } else {
                &source.0[start_position..]
            }
        } else {
            &source.0[start_position..]
        }
    } else {
        ""
    };

    TypedValue::string_literal(OwnedStringLiteral(
        result.to_owned(),
        source.1.map(ToOwned::to_owned),
    ))
    .map_err(Into::into)
}
