use crate::{BinaryTermOp, TernaryTermOp};
use regex::{Regex, RegexBuilder};
use sparql_bridge_model::{
    StringLiteralRef, ThinError, ThinResult, TypedValue, ValueKind,
};
use std::borrow::Cow;

/// [SPARQL 1.1 - REGEX](https://www.w3.org/TR/sparql11-query/#func-regex)
///
/// The pattern and the optional flags must be simple literals. An invalid pattern or an unknown
/// flag is an expected error.
#[derive(Debug, Default)]
pub struct RegexTermOp;

impl RegexTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for RegexTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        let text = StringLiteralRef::try_from(lhs)?;
        let regex = compile_pattern(simple_lexical(rhs)?, None).ok_or(ThinError::default())?;
        Ok(TypedValue::boolean(regex.is_match(text.0)))
    }
}

impl TernaryTermOp for RegexTermOp {
    fn evaluate(
        &self,
        arg0: &TypedValue,
        arg1: &TypedValue,
        arg2: &TypedValue,
    ) -> ThinResult<TypedValue> {
        let text = StringLiteralRef::try_from(arg0)?;
        let regex = compile_pattern(simple_lexical(arg1)?, Some(simple_lexical(arg2)?))
            .ok_or(ThinError::default())?;
        Ok(TypedValue::boolean(regex.is_match(text.0)))
    }
}

fn simple_lexical(value: &TypedValue) -> ThinResult<&str> {
    match value.kind() {
        ValueKind::SimpleLiteral => Ok(value.lexical()),
        _ => ThinError::expected(),
    }
}

pub(super) fn compile_pattern(pattern: &str, flags: Option<&str>) -> Option<Regex> {
    const REGEX_SIZE_LIMIT: usize = 1_000_000;

    let mut pattern = Cow::Borrowed(pattern);
    let flags = flags.unwrap_or_default();
    if flags.contains('q') {
        pattern = regex::escape(&pattern).into();
    }
    let mut regex_builder = RegexBuilder::new(&pattern);
    regex_builder.size_limit(REGEX_SIZE_LIMIT);
    for flag in flags.chars() {
        match flag {
            's' => {
                regex_builder.dot_matches_new_line(true);
            }
            'm' => {
                regex_builder.multi_line(true);
            }
            'i' => {
                regex_builder.case_insensitive(true);
            }
            'x' => {
                regex_builder.ignore_whitespace(true);
            }
            'q' => (),        // Already handled above.
            _ => return None, // invalid option
        }
    }
    regex_builder.build().ok()
}
