use crate::UnaryTermOp;
use sparql_bridge_model::{NamedNode, ThinError, ThinResult, TypedValue, ValueKind};

/// [SPARQL 1.1 - IRI](https://www.w3.org/TR/sparql11-query/#func-iri)
///
/// IRIs pass through unchanged. Simple literals are promoted to an IRI after validation.
#[derive(Debug, Default)]
pub struct IriTermOp;

impl IriTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for IriTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        match arg.kind() {
            ValueKind::NamedNode => Ok(arg.clone()),
            ValueKind::SimpleLiteral => Ok(TypedValue::iri(NamedNode::new(arg.lexical())?)),
            _ => ThinError::expected(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotes_a_simple_literal() {
        let result = IriTermOp::new()
            .evaluate(&TypedValue::simple("http://example.com/a"))
            .unwrap();
        assert!(result.is_iri());
        assert_eq!(result.lexical(), "http://example.com/a");
    }

    #[test]
    fn iri_passes_through() {
        let iri = TypedValue::iri(NamedNode::new("http://example.com/a").unwrap());
        let result = IriTermOp::new().evaluate(&iri).unwrap();
        assert_eq!(result, iri);
    }

    #[test]
    fn invalid_iri_errors() {
        IriTermOp::new()
            .evaluate(&TypedValue::simple("no scheme"))
            .unwrap_err();
    }
}
