use crate::BinaryTermOp;
use sparql_bridge_model::{
    CompatibleStringArgs, StringLiteralRef, ThinResult, TypedValue,
};

/// [SPARQL 1.1 - STRSTARTS](https://www.w3.org/TR/sparql11-query/#func-strstarts)
#[derive(Debug, Default)]
pub struct StrStartsTermOp;

impl StrStartsTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for StrStartsTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        let lhs = StringLiteralRef::try_from(lhs)?;
        let rhs = StringLiteralRef::try_from(rhs)?;
        let args = CompatibleStringArgs::try_from(lhs, rhs)?;
        Ok(TypedValue::boolean(args.lhs.starts_with(args.rhs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_bridge_model::ThinError;

    #[test]
    fn empty_prefix_is_always_true() {
        let result = StrStartsTermOp::new()
            .evaluate(&TypedValue::simple("anything"), &TypedValue::simple(""))
            .unwrap();
        assert_eq!(result, TypedValue::boolean(true));
    }

    #[test]
    fn incompatible_languages_are_an_expected_error() {
        let en = TypedValue::language_string("chat", "en").unwrap();
        let fr = TypedValue::language_string("ch", "fr").unwrap();
        assert_eq!(StrStartsTermOp::new().evaluate(&en, &fr), ThinError::expected());
    }

    #[test]
    fn tagged_against_simple_is_compatible() {
        let en = TypedValue::language_string("chat", "en").unwrap();
        let result = StrStartsTermOp::new()
            .evaluate(&en, &TypedValue::simple("ch"))
            .unwrap();
        assert_eq!(result, TypedValue::boolean(true));
    }
}
