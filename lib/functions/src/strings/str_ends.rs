use crate::BinaryTermOp;
use sparql_bridge_model::{
    CompatibleStringArgs, StringLiteralRef, ThinResult, TypedValue,
};

/// [SPARQL 1.1 - STRENDS](https://www.w3.org/TR/sparql11-query/#func-strends)
#[derive(Debug, Default)]
pub struct StrEndsTermOp;

impl StrEndsTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for StrEndsTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        let lhs = StringLiteralRef::try_from(lhs)?;
        let rhs = StringLiteralRef::try_from(rhs)?;
        let args = CompatibleStringArgs::try_from(lhs, rhs)?;
        Ok(TypedValue::boolean(args.lhs.ends_with(args.rhs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_suffix_is_always_true() {
        let result = StrEndsTermOp::new()
            .evaluate(&TypedValue::simple("anything"), &TypedValue::simple(""))
            .unwrap();
        assert_eq!(result, TypedValue::boolean(true));
    }
}
