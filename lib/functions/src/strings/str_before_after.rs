use crate::BinaryTermOp;
use sparql_bridge_model::{
    CompatibleStringArgs, OwnedStringLiteral, StringLiteralRef, ThinResult, TypedValue,
};

/// [SPARQL 1.1 - STRBEFORE](https://www.w3.org/TR/sparql11-query/#func-strbefore)
///
/// When the needle does not occur, the result is the empty *plain* literal, without the language
/// tag of the haystack.
#[derive(Debug, Default)]
pub struct StrBeforeTermOp;

impl StrBeforeTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for StrBeforeTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        let lhs = StringLiteralRef::try_from(lhs)?;
        let rhs = StringLiteralRef::try_from(rhs)?;
        let args = CompatibleStringArgs::try_from(lhs, rhs)?;

        let Some(position) = args.lhs.find(args.rhs) else {
            return Ok(TypedValue::simple(""));
        };
        TypedValue::string_literal(OwnedStringLiteral(
            args.lhs[..position].to_owned(),
            args.language.map(ToOwned::to_owned),
        ))
        .map_err(Into::into)
    }
}

/// [SPARQL 1.1 - STRAFTER](https://www.w3.org/TR/sparql11-query/#func-strafter)
#[derive(Debug, Default)]
pub struct StrAfterTermOp;

impl StrAfterTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for StrAfterTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        let lhs = StringLiteralRef::try_from(lhs)?;
        let rhs = StringLiteralRef::try_from(rhs)?;
        let args = CompatibleStringArgs::try_from(lhs, rhs)?;

        let Some(position) = args.lhs.find(args.rhs) else {
            return Ok(TypedValue::simple(""));
        };
        TypedValue::string_literal(OwnedStringLiteral(
            args.lhs[position + args.rhs.len()..].to_owned(),
            args.language.map(ToOwned::to_owned),
        ))
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_the_needle() {
        let haystack = TypedValue::simple("user@example.com");
        let needle = TypedValue::simple("@");
        let before = StrBeforeTermOp::new().evaluate(&haystack, &needle).unwrap();
        let after = StrAfterTermOp::new().evaluate(&haystack, &needle).unwrap();
        assert_eq!(before.lexical(), "user");
        assert_eq!(after.lexical(), "example.com");
    }

    #[test]
    fn missing_needle_yields_an_empty_plain_literal() {
        let haystack = TypedValue::language_string("chat", "fr").unwrap();
        let needle = TypedValue::simple("x");
        let result = StrBeforeTermOp::new().evaluate(&haystack, &needle).unwrap();
        assert_eq!(result.lexical(), "");
        assert_eq!(result.language(), None);
    }

    #[test]
    fn found_needle_preserves_the_language() {
        let haystack = TypedValue::language_string("chat", "fr").unwrap();
        let needle = TypedValue::simple("a");
        let result = StrAfterTermOp::new().evaluate(&haystack, &needle).unwrap();
        assert_eq!(result.lexical(), "t");
        assert_eq!(result.language(), Some("fr"));
    }

    #[test]
    fn empty_needle_keeps_the_language() {
        let haystack = TypedValue::language_string("chat", "fr").unwrap();
        let needle = TypedValue::simple("");
        let result = StrBeforeTermOp::new().evaluate(&haystack, &needle).unwrap();
        assert_eq!(result.lexical(), "");
        assert_eq!(result.language(), Some("fr"));
    }
}
