use crate::UnaryTermOp;
use sparql_bridge_model::{ThinError, ThinResult, TypedValue};

/// [SPARQL 1.1 - STR](https://www.w3.org/TR/sparql11-query/#func-str)
///
/// Yields the lexical form of a literal or the text of an IRI as a plain literal. Blank nodes
/// raise an expected error.
#[derive(Debug, Default)]
pub struct StrTermOp;

impl StrTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for StrTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        if arg.is_blank() {
            return ThinError::expected();
        }
        Ok(TypedValue::simple(arg.lexical()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_bridge_model::{BlankNode, NamedNode};

    #[test]
    fn str_of_iri_is_its_text() {
        let iri = TypedValue::iri(NamedNode::new("http://example.com/a").unwrap());
        let result = StrTermOp::new().evaluate(&iri).unwrap();
        assert_eq!(result.lexical(), "http://example.com/a");
        assert!(result.is_literal());
    }

    #[test]
    fn str_of_language_string_drops_the_tag() {
        let tagged = TypedValue::language_string("chat", "fr").unwrap();
        let result = StrTermOp::new().evaluate(&tagged).unwrap();
        assert_eq!(result.lexical(), "chat");
        assert_eq!(result.language(), None);
    }

    #[test]
    fn str_of_blank_node_errors() {
        let blank = TypedValue::blank(BlankNode::new("b0").unwrap());
        StrTermOp::new().evaluate(&blank).unwrap_err();
    }
}
