use crate::BinaryTermOp;
use sparql_bridge_model::{
    CompatibleStringArgs, StringLiteralRef, ThinResult, TypedValue,
};

/// [SPARQL 1.1 - CONTAINS](https://www.w3.org/TR/sparql11-query/#func-contains)
#[derive(Debug, Default)]
pub struct ContainsTermOp;

impl ContainsTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl BinaryTermOp for ContainsTermOp {
    fn evaluate(&self, lhs: &TypedValue, rhs: &TypedValue) -> ThinResult<TypedValue> {
        let lhs = StringLiteralRef::try_from(lhs)?;
        let rhs = StringLiteralRef::try_from(rhs)?;
        let args = CompatibleStringArgs::try_from(lhs, rhs)?;
        Ok(TypedValue::boolean(args.lhs.contains(args.rhs)))
    }
}
