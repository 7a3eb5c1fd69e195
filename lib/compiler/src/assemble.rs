use crate::{
    Deparser, MappingTable, QueryTemplate, ScalarExpr, SelectModifier, SortKey,
};
use std::fmt::Write;
use tracing::debug;

/// What the host planner requests from one scan of the foreign table.
#[derive(Clone, Debug, Default)]
pub struct ScanPlan {
    pub target_columns: Vec<String>,
    pub restrictions: Vec<ScalarExpr>,
    pub sort_keys: Vec<SortKey>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub distinct: bool,
    pub has_aggregates: bool,
    pub has_grouping: bool,
}

/// The compiled scan, kept across planning and execution.
///
/// `has_local_filter` records that at least one restriction could not be translated and must be
/// re-checked locally on every row the endpoint returns.
#[derive(Clone, Debug)]
pub struct CompiledScan {
    pub query: String,
    pub has_local_filter: bool,
    pub pushed_order_by: bool,
    pub pushed_limit: bool,
}

/// Assembles one SPARQL request from a template and the host's scan plan.
///
/// Every decision here degrades conservatively: an untranslatable restriction becomes a local
/// filter, a partially pushable sort is not pushed at all, and a limit is only pushed when no
/// local processing could change which rows survive.
pub struct ScanCompiler<'a> {
    mappings: &'a MappingTable,
}

impl<'a> ScanCompiler<'a> {
    pub fn new(mappings: &'a MappingTable) -> Self {
        Self { mappings }
    }

    pub fn compile(&self, template: &QueryTemplate, plan: &ScanPlan) -> CompiledScan {
        if !template.is_rewritable() {
            debug!("template is not rewritable, sending it unmodified");
            return CompiledScan {
                query: template.raw().to_owned(),
                has_local_filter: !plan.restrictions.is_empty(),
                pushed_order_by: false,
                pushed_limit: false,
            };
        }

        let deparser = Deparser::new(self.mappings);

        let mut filters = Vec::new();
        let mut has_local_filter = false;
        for restriction in &plan.restrictions {
            match deparser.deparse(restriction) {
                Some(fragment) => filters.push(format!("FILTER({fragment})")),
                None => {
                    debug!("restriction is not pushable, evaluating it locally");
                    has_local_filter = true;
                }
            }
        }

        let order_by = self.compile_order_by(&plan.sort_keys);
        let limit = self.compile_limit(template, plan, has_local_filter);

        let mut query = String::new();
        for prefix in template.prefixes() {
            let _ = writeln!(query, "{prefix}");
        }

        let modifier = match template.select_modifier() {
            SelectModifier::Distinct => "DISTINCT ",
            SelectModifier::Reduced => "REDUCED ",
            SelectModifier::None if plan.distinct => "DISTINCT ",
            SelectModifier::None => "",
        };
        let _ = writeln!(
            query,
            "SELECT {modifier}{}",
            self.compile_projection(&plan.target_columns)
        );

        for from in template.from_clauses() {
            let _ = writeln!(query, "{from}");
        }

        let _ = writeln!(query, "{}", augment_pattern(template.graph_pattern(), &filters));

        if let Some(order_by) = &order_by {
            let _ = writeln!(query, "{order_by}");
        }
        if let Some(limit) = limit {
            let _ = writeln!(query, "LIMIT {limit}");
        }

        CompiledScan {
            query,
            has_local_filter,
            pushed_order_by: order_by.is_some(),
            pushed_limit: limit.is_some(),
        }
    }

    /// Expression-mapped columns are projected as `(expr AS ?column)` so the endpoint computes
    /// them. A column without a rendering degrades the whole projection to `*`.
    fn compile_projection(&self, target_columns: &[String]) -> String {
        if target_columns.is_empty() {
            return "*".to_owned();
        }
        let mut rendered = Vec::with_capacity(target_columns.len());
        for column in target_columns {
            let Some(mapping) = self.mappings.get(column) else {
                return "*".to_owned();
            };
            if let Some(expression) = mapping.expression_template() {
                rendered.push(format!("({expression} AS ?{column})"));
            } else if let Some(variable) = self.mappings.sparql_variable(column) {
                rendered.push(variable);
            } else {
                return "*".to_owned();
            }
        }
        rendered.join(" ")
    }

    /// An ORDER BY is pushed only when every key is a single pushable variable. A partial sort
    /// would violate the ordering the host assumes, so it is all or nothing.
    fn compile_order_by(&self, sort_keys: &[SortKey]) -> Option<String> {
        if sort_keys.is_empty() {
            return None;
        }
        let mut rendered = Vec::with_capacity(sort_keys.len());
        for key in sort_keys {
            let ScalarExpr::Column(column) = &key.expr else {
                debug!("sort key is not a plain column, sort is evaluated locally");
                return None;
            };
            let variable = self.mappings.sparql_variable(column)?;
            rendered.push(if key.descending {
                format!("DESC({variable})")
            } else {
                variable
            });
        }
        Some(format!("ORDER BY {}", rendered.join(" ")))
    }

    /// A LIMIT is pushed only when nothing evaluated locally could reduce the row count below
    /// it. The offset is folded into an enlarged limit because the local side still needs to
    /// skip the leading rows itself.
    fn compile_limit(
        &self,
        template: &QueryTemplate,
        plan: &ScanPlan,
        has_local_filter: bool,
    ) -> Option<u64> {
        let limit = plan.limit?;
        if plan.has_grouping
            || plan.has_aggregates
            || plan.distinct
            || template.select_modifier() == SelectModifier::Distinct
            || has_local_filter
        {
            debug!("limit is not pushable, fetching the full result");
            return None;
        }
        Some(limit.saturating_add(plan.offset.unwrap_or(0)))
    }
}

fn augment_pattern(pattern: &str, filters: &[String]) -> String {
    if filters.is_empty() {
        return pattern.to_owned();
    }
    let body = pattern.strip_suffix('}').unwrap_or(pattern);
    let mut augmented = body.to_owned();
    for filter in filters {
        augmented.push_str("\n  ");
        augmented.push_str(filter);
    }
    augmented.push_str("\n}");
    augmented
}
