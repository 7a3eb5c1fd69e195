use crate::{like_to_regex, BinaryOperator, ColumnMapping, MappingTable, NodeKind, ScalarExpr};
use regex::Regex;
use sparql_bridge_functions::BuiltinName;
use sparql_bridge_model::{TermCategory, TypedValue, ValueKind};
use tracing::debug;

/// Translates one scalar expression into a SPARQL fragment.
///
/// `None` is a normal outcome, not an error: it means the expression must be evaluated locally.
/// A failure anywhere in a subtree makes the whole enclosing expression untranslatable, so a
/// pushed filter is always exactly equivalent to the host predicate it replaces.
pub struct Deparser<'a> {
    mappings: &'a MappingTable,
}

impl<'a> Deparser<'a> {
    pub fn new(mappings: &'a MappingTable) -> Self {
        Self { mappings }
    }

    pub fn deparse(&self, expr: &ScalarExpr) -> Option<String> {
        match expr {
            ScalarExpr::Column(column) => {
                let variable = self.mappings.sparql_variable(column);
                if variable.is_none() {
                    debug!(column = %column, "column has no pushable variable mapping");
                }
                variable
            }
            ScalarExpr::Literal(value) => Some(value.to_string()),
            ScalarExpr::Binary { op, lhs, rhs } => self.deparse_binary(*op, lhs, rhs),
            ScalarExpr::Function { name, args } => self.deparse_function(name, args),
            ScalarExpr::InList {
                expr,
                list,
                negated,
            } => self.deparse_in_list(expr, list, *negated),
            ScalarExpr::Cast(inner) => self.deparse(inner),
            ScalarExpr::IsNull { expr, negated } => self.deparse_is_null(expr, *negated),
        }
    }

    fn deparse_binary(
        &self,
        op: BinaryOperator,
        lhs: &ScalarExpr,
        rhs: &ScalarExpr,
    ) -> Option<String> {
        if op.is_like() {
            return self.deparse_like(op, lhs, rhs);
        }

        // Relative comparison against a string constant is not pushed: SPARQL endpoints order
        // strings by code point while the host follows its collation.
        if op.is_relative() && matches!(string_typed_constant(rhs), Some(true)) {
            debug!("relative comparison against a string constant is evaluated locally");
            return None;
        }

        let spelling = op.sparql_spelling()?;
        let rendered_lhs = self.deparse_operand(lhs, rhs)?;
        let rendered_rhs = self.deparse_operand(rhs, lhs)?;
        Some(format!("({rendered_lhs} {spelling} {rendered_rhs})"))
    }

    /// Deparses one side of a comparison. A constant compared against a mapped column is
    /// rendered with the column's forced node kind, datatype or language so both sides of the
    /// comparison live in the same value space.
    fn deparse_operand(&self, expr: &ScalarExpr, other: &ScalarExpr) -> Option<String> {
        if let (ScalarExpr::Literal(value), ScalarExpr::Column(column)) =
            (unwrap_casts(expr), unwrap_casts(other))
        {
            if let Some(mapping) = self.mappings.get(column) {
                return Some(render_constant(value, mapping));
            }
        }
        self.deparse(expr)
    }

    fn deparse_like(
        &self,
        op: BinaryOperator,
        lhs: &ScalarExpr,
        rhs: &ScalarExpr,
    ) -> Option<String> {
        let ScalarExpr::Literal(pattern) = unwrap_casts(rhs) else {
            return None;
        };
        if !matches!(pattern.kind(), ValueKind::SimpleLiteral) {
            return None;
        }

        let regex = like_to_regex(pattern.lexical());
        if Regex::new(&regex).is_err() {
            debug!(regex = %regex, "generated pattern is not a valid regex");
            return None;
        }

        let lhs = self.deparse(lhs)?;
        let negated = matches!(op, BinaryOperator::NotLike | BinaryOperator::NotILike);
        let flags = match op {
            BinaryOperator::ILike | BinaryOperator::NotILike => ", \"i\"",
            _ => "",
        };
        let call = format!(
            "{}({lhs}, \"{}\"{flags})",
            BuiltinName::Regex,
            escape_string(&regex)
        );
        Some(if negated { format!("!{call}") } else { call })
    }

    fn deparse_function(&self, name: &str, args: &[ScalarExpr]) -> Option<String> {
        let Some(builtin) = BuiltinName::from_sql_name(name) else {
            debug!(name = %name, "unknown function is evaluated locally");
            return None;
        };
        if !builtin.accepts_arity(args.len()) {
            return None;
        }
        let args = args
            .iter()
            .map(|arg| self.deparse(arg))
            .collect::<Option<Vec<_>>>()?;
        Some(format!("{builtin}({})", args.join(", ")))
    }

    fn deparse_in_list(
        &self,
        expr: &ScalarExpr,
        list: &[ScalarExpr],
        negated: bool,
    ) -> Option<String> {
        // An empty list has different semantics on the host side, never push it.
        if list.is_empty() {
            return None;
        }
        let rendered = self.deparse(expr)?;
        let list = list
            .iter()
            .map(|item| self.deparse_operand(item, expr))
            .collect::<Option<Vec<_>>>()?;
        let keyword = if negated { "NOT IN" } else { "IN" };
        Some(format!("({rendered} {keyword} ({}))", list.join(", ")))
    }

    fn deparse_is_null(&self, expr: &ScalarExpr, negated: bool) -> Option<String> {
        // Only a direct column reference maps cleanly onto BOUND.
        let ScalarExpr::Column(column) = unwrap_casts(expr) else {
            return None;
        };
        let variable = self.mappings.sparql_variable(column)?;
        let call = format!("{}({variable})", BuiltinName::Bound);
        Some(if negated { call } else { format!("!{call}") })
    }
}

fn unwrap_casts(expr: &ScalarExpr) -> &ScalarExpr {
    match expr {
        ScalarExpr::Cast(inner) => unwrap_casts(inner),
        _ => expr,
    }
}

/// Renders a constant in the value space of the column it is compared against.
fn render_constant(value: &TypedValue, mapping: &ColumnMapping) -> String {
    if mapping.node_kind() == Some(NodeKind::Iri) && !value.is_iri() {
        return format!("<{}>", value.lexical());
    }
    if value.is_literal() {
        if let Some(language) = mapping.language() {
            return format!("\"{}\"@{language}", escape_string(value.lexical()));
        }
        if let Some(datatype) = mapping.datatype() {
            return format!("\"{}\"^^{datatype}", escape_string(value.lexical()));
        }
    }
    value.to_string()
}

/// Whether the expression is a constant of a string-like category. `None` when it is not a
/// constant at all.
fn string_typed_constant(expr: &ScalarExpr) -> Option<bool> {
    match unwrap_casts(expr) {
        ScalarExpr::Literal(value) => Some(matches!(
            value.category(),
            TermCategory::StringLike | TermCategory::LanguageString
        )),
        _ => None,
    }
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
