use sparql_bridge::compiler::{
    bind_column, BinaryOperator, ColumnMapping, MappingTable, QueryTemplate, ScalarExpr,
    ScanCompiler, ScanPlan, SortKey,
};
use sparql_bridge::functions::aggregates::{
    AvgAccumulator, GroupConcatAccumulator, SumAccumulator, TermAccumulator,
};
use sparql_bridge::model::TypedValue;

const TEMPLATE: &str = "\
PREFIX foaf: <http://xmlns.com/foaf/0.1/>
SELECT ?name ?age
WHERE {
  ?person foaf:name ?name .
  ?person foaf:age ?age
}";

fn mappings() -> MappingTable {
    MappingTable::new(vec![
        ColumnMapping::variable("name", "name"),
        ColumnMapping::variable("age", "age"),
    ])
}

#[test]
fn full_scan_compilation() {
    let template = QueryTemplate::parse(TEMPLATE).unwrap();
    let plan = ScanPlan {
        target_columns: vec!["name".to_owned(), "age".to_owned()],
        restrictions: vec![
            ScalarExpr::binary(
                BinaryOperator::GtEq,
                ScalarExpr::column("age"),
                ScalarExpr::literal(TypedValue::integer(18)),
            ),
            ScalarExpr::binary(
                BinaryOperator::Like,
                ScalarExpr::column("name"),
                ScalarExpr::literal(TypedValue::simple("Al%")),
            ),
        ],
        sort_keys: vec![SortKey::descending(ScalarExpr::column("age"))],
        limit: Some(20),
        offset: Some(10),
        ..ScanPlan::default()
    };

    let mappings = mappings();
    let scan = ScanCompiler::new(&mappings).compile(&template, &plan);

    assert!(!scan.has_local_filter);
    assert!(scan.pushed_order_by);
    assert!(scan.pushed_limit);

    let query = &scan.query;
    assert!(query.starts_with("PREFIX foaf: <http://xmlns.com/foaf/0.1/>"));
    assert!(query.contains("SELECT ?name ?age"));
    assert!(query.contains(
        "FILTER((?age >= \"18\"^^<http://www.w3.org/2001/XMLSchema#integer>))"
    ));
    assert!(query.contains("FILTER(REGEX(?name, \"^Al\"))"));
    assert!(query.contains("ORDER BY DESC(?age)"));
    assert!(query.contains("LIMIT 30"));
}

#[test]
fn group_by_template_is_sent_unchanged() {
    let raw = "SELECT ?person (COUNT(?name) AS ?names) \
               WHERE { ?person <http://xmlns.com/foaf/0.1/name> ?name } \
               GROUP BY ?person";
    let template = QueryTemplate::parse(raw).unwrap();
    let plan = ScanPlan {
        restrictions: vec![ScalarExpr::binary(
            BinaryOperator::Eq,
            ScalarExpr::column("name"),
            ScalarExpr::literal(TypedValue::simple("Alice")),
        )],
        limit: Some(5),
        ..ScanPlan::default()
    };

    let mappings = mappings();
    let scan = ScanCompiler::new(&mappings).compile(&template, &plan);

    assert_eq!(scan.query, raw);
    assert!(scan.has_local_filter);
    assert!(!scan.pushed_order_by);
    assert!(!scan.pushed_limit);
}

#[test]
fn bindings_feed_the_aggregate_engine() {
    let mapping = ColumnMapping::variable("age", "age");
    let wire_rows = [
        Some("\"30\"^^<http://www.w3.org/2001/XMLSchema#integer>"),
        Some("\"40\"^^<http://www.w3.org/2001/XMLSchema#integer>"),
        None,
    ];

    let mut sum = SumAccumulator::new();
    let mut avg = AvgAccumulator::new();
    let mut concat = GroupConcatAccumulator::new("-");
    for wire in wire_rows {
        let value = bind_column(&mapping, wire).unwrap();
        sum.step(value.as_ref());
        concat.step(value.as_ref());
    }
    // The unbound row poisons SUM but is skipped by GROUP_CONCAT.
    assert_eq!(sum.finish(), None);
    assert_eq!(concat.finish(), Some(TypedValue::simple("30-40")));

    for wire in &wire_rows[..2] {
        let value = bind_column(&mapping, *wire).unwrap();
        avg.step(value.as_ref());
    }
    let average = avg.finish().unwrap();
    assert_eq!(average.lexical(), "35.0");
}
