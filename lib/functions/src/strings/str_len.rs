use crate::UnaryTermOp;
use sparql_bridge_model::{StringLiteralRef, ThinResult, TypedValue};

/// [SPARQL 1.1 - STRLEN](https://www.w3.org/TR/sparql11-query/#func-strlen)
#[derive(Debug, Default)]
pub struct StrLenTermOp;

impl StrLenTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for StrLenTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        let arg = StringLiteralRef::try_from(arg)?;
        Ok(TypedValue::integer(i64::try_from(arg.len())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_not_bytes() {
        let result = StrLenTermOp::new()
            .evaluate(&TypedValue::simple("héllo"))
            .unwrap();
        assert_eq!(result, TypedValue::integer(5));
    }
}
