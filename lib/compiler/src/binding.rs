use crate::{ColumnMapping, NodeKind};
use sparql_bridge_model::{parse_term, NamedNode, TermParseError, TypedValue};

/// A pull-based source of row bindings, produced by the external response parser.
///
/// `advance` moves to the next row and reports whether one exists. `value` yields the wire text
/// bound to a column in the current row, or `None` when the binding is absent.
pub trait BindingSource {
    fn advance(&mut self) -> bool;

    fn value(&self, column: &str) -> Option<&str>;
}

/// Converts one wire-text binding into a typed value, honoring the column mapping's overrides.
///
/// Overrides are applied in order: a forced IRI node kind turns the text into an IRI outright,
/// then a forced datatype or language replaces whatever the wire form carried. An absent binding
/// stays absent.
pub fn bind_column(
    mapping: &ColumnMapping,
    wire: Option<&str>,
) -> Result<Option<TypedValue>, TermParseError> {
    let Some(wire) = wire else {
        return Ok(None);
    };

    if mapping.node_kind() == Some(NodeKind::Iri) {
        let text = wire
            .trim()
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .unwrap_or_else(|| wire.trim());
        // Relative IRIs pass through here, exactly as they do for wire-form IRI terms.
        return Ok(Some(TypedValue::iri(NamedNode::new_unchecked(text))));
    }

    let parsed = parse_term(wire)?;
    if let Some(datatype) = mapping.datatype() {
        return Ok(Some(TypedValue::typed_literal(
            parsed.lexical(),
            datatype.clone(),
        )?));
    }
    if let Some(language) = mapping.language() {
        return Ok(Some(TypedValue::language_string(
            parsed.lexical(),
            language,
        )?));
    }
    Ok(Some(parsed))
}

/// Reads the current row of `source` for the given mappings, in mapping order.
pub fn bind_row(
    mappings: &[ColumnMapping],
    source: &dyn BindingSource,
) -> Result<Vec<Option<TypedValue>>, TermParseError> {
    mappings
        .iter()
        .map(|mapping| bind_column(mapping, source.value(mapping.column())))
        .collect()
}
