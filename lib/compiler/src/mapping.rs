use sparql_bridge_model::NamedNode;

/// The node kind a column is forced to produce, overriding whatever the wire response claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Iri,
    Literal,
}

/// Binds one relational column to the SPARQL side of a scan.
///
/// A column maps to either a SPARQL variable or a literal expression template. The optional
/// overrides force the node kind, datatype or language of every value bound to the column,
/// regardless of the wire form. Mappings are read-only during compilation.
#[derive(Clone, Debug)]
pub struct ColumnMapping {
    column: String,
    variable: Option<String>,
    expression: Option<String>,
    node_kind: Option<NodeKind>,
    datatype: Option<NamedNode>,
    language: Option<String>,
    pushable: bool,
}

impl ColumnMapping {
    /// A column backed by a SPARQL variable. `variable` is given without the leading `?`.
    pub fn variable(column: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            variable: Some(variable.into()),
            expression: None,
            node_kind: None,
            datatype: None,
            language: None,
            pushable: true,
        }
    }

    /// A column backed by a literal expression template instead of a plain variable. Such
    /// columns never participate in predicate pushdown; the projection computes them as
    /// `(expr AS ?column)`.
    pub fn expression(column: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            variable: None,
            expression: Some(expression.into()),
            node_kind: None,
            datatype: None,
            language: None,
            pushable: false,
        }
    }

    pub fn with_node_kind(mut self, node_kind: NodeKind) -> Self {
        self.node_kind = Some(node_kind);
        self
    }

    pub fn with_datatype(mut self, datatype: NamedNode) -> Self {
        self.datatype = Some(datatype);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_pushable(mut self, pushable: bool) -> Self {
        self.pushable = pushable;
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn variable_name(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn expression_template(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    pub fn node_kind(&self) -> Option<NodeKind> {
        self.node_kind
    }

    pub fn datatype(&self) -> Option<&NamedNode> {
        self.datatype.as_ref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn is_pushable(&self) -> bool {
        self.pushable
    }

    /// The variable this column deparses to, or `None` when the column cannot participate in
    /// pushdown.
    pub fn pushable_variable(&self) -> Option<&str> {
        if self.pushable {
            self.variable.as_deref()
        } else {
            None
        }
    }
}

/// The column mappings of one foreign table, looked up by column name.
#[derive(Clone, Debug, Default)]
pub struct MappingTable {
    mappings: Vec<ColumnMapping>,
}

impl MappingTable {
    pub fn new(mappings: Vec<ColumnMapping>) -> Self {
        Self { mappings }
    }

    pub fn get(&self, column: &str) -> Option<&ColumnMapping> {
        self.mappings.iter().find(|m| m.column() == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.mappings.iter()
    }

    /// Resolves a column to its SPARQL variable, rendered with the leading `?`.
    pub fn sparql_variable(&self, column: &str) -> Option<String> {
        self.get(column)?
            .pushable_variable()
            .map(|name| format!("?{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_columns_resolve() {
        let table = MappingTable::new(vec![ColumnMapping::variable("name", "personName")]);
        assert_eq!(
            table.sparql_variable("name"),
            Some("?personName".to_owned())
        );
        assert_eq!(table.sparql_variable("missing"), None);
    }

    #[test]
    fn non_pushable_columns_do_not_resolve() {
        let table = MappingTable::new(vec![
            ColumnMapping::variable("name", "personName").with_pushable(false),
            ColumnMapping::expression("label", "CONCAT(?a, ?b)"),
        ]);
        assert_eq!(table.sparql_variable("name"), None);
        assert_eq!(table.sparql_variable("label"), None);
    }
}
