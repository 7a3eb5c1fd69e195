use crate::UnaryTermOp;
use sparql_bridge_model::{ThinError, ThinResult, TypedValue};

/// [SPARQL 1.1 - DATATYPE](https://www.w3.org/TR/sparql11-query/#func-datatype)
///
/// Plain literals report `xsd:string` and language-tagged ones `rdf:langString`, both via the
/// underlying literal. Non-literals raise an expected error.
#[derive(Debug, Default)]
pub struct DatatypeTermOp;

impl DatatypeTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for DatatypeTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        match arg.datatype() {
            Some(datatype) => Ok(TypedValue::iri(datatype.into_owned())),
            None => ThinError::expected(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_bridge_model::NamedNode;
    use sparql_bridge_model::vocab::{rdf, xsd};

    #[test]
    fn datatype_of_plain_literal_is_xsd_string() {
        let result = DatatypeTermOp::new()
            .evaluate(&TypedValue::simple("x"))
            .unwrap();
        assert_eq!(result.lexical(), xsd::STRING.as_str());
    }

    #[test]
    fn datatype_of_language_string_is_rdf_lang_string() {
        let tagged = TypedValue::language_string("x", "en").unwrap();
        let result = DatatypeTermOp::new().evaluate(&tagged).unwrap();
        assert_eq!(result.lexical(), rdf::LANG_STRING.as_str());
    }

    #[test]
    fn datatype_of_iri_errors() {
        let iri = TypedValue::iri(NamedNode::new("http://example.com/a").unwrap());
        DatatypeTermOp::new().evaluate(&iri).unwrap_err();
    }
}
