use crate::{ComparisonError, TermCategory, TypedValue, ValueKind};
use std::cmp::Ordering;

/// Value-based equality following SPARQL 1.1 semantics.
///
/// Never errors: terms of incompatible categories simply compare unequal, except for the final
/// lexical fallback between otherwise untyped-compatible literals. A language-tagged literal
/// never equals an untagged one.
pub fn effective_eq(lhs: &TypedValue, rhs: &TypedValue) -> bool {
    match (lhs.kind(), rhs.kind()) {
        (ValueKind::NamedNode, ValueKind::NamedNode)
        | (ValueKind::BlankNode, ValueKind::BlankNode) => lhs.lexical() == rhs.lexical(),
        (ValueKind::NamedNode | ValueKind::BlankNode, _)
        | (_, ValueKind::NamedNode | ValueKind::BlankNode) => false,
        (ValueKind::SimpleLiteral, ValueKind::SimpleLiteral) => lhs.lexical() == rhs.lexical(),
        (ValueKind::LanguageString, ValueKind::LanguageString) => {
            let same_language = match (lhs.language(), rhs.language()) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                _ => false,
            };
            same_language && lhs.lexical() == rhs.lexical()
        }
        // Tagged and untagged literals are never equal.
        (ValueKind::LanguageString, _) | (_, ValueKind::LanguageString) => false,
        (ValueKind::Numeric(a), ValueKind::Numeric(b)) => a == b,
        (ValueKind::Boolean(a), ValueKind::Boolean(b)) => a == b,
        (ValueKind::DateTime(a), ValueKind::DateTime(b)) => a == b,
        (ValueKind::Date(a), ValueKind::Date(b)) => a == b,
        (ValueKind::Time(a), ValueKind::Time(b)) => a == b,
        (ValueKind::Duration(a), ValueKind::Duration(b)) => a == b,
        // Last resort: lexical comparison.
        _ => lhs.lexical() == rhs.lexical(),
    }
}

/// Value-based ordering for the relative operators (`<`, `<=`, `>`, `>=`).
///
/// `Ok(None)` means the pair is *defined as incomparable*: every relative operator evaluates to
/// `false`. This covers NaN operands and date-times missing an explicit timezone offset. Terms
/// of different categories, and language-tagged operands, are a hard error instead.
pub fn effective_cmp(
    lhs: &TypedValue,
    rhs: &TypedValue,
) -> Result<Option<Ordering>, ComparisonError> {
    if lhs.category() == TermCategory::LanguageString
        || rhs.category() == TermCategory::LanguageString
    {
        return Err(ComparisonError::LanguageTaggedOperand);
    }

    match (lhs.kind(), rhs.kind()) {
        (ValueKind::SimpleLiteral, ValueKind::SimpleLiteral) => {
            Ok(Some(lhs.lexical().cmp(rhs.lexical())))
        }
        (ValueKind::Numeric(a), ValueKind::Numeric(b)) => Ok(a.partial_cmp(b)),
        (ValueKind::Boolean(a), ValueKind::Boolean(b)) => Ok(Some(a.cmp(b))),
        (ValueKind::DateTime(a), ValueKind::DateTime(b)) => {
            if a.timezone_offset().is_none() || b.timezone_offset().is_none() {
                return Ok(None);
            }
            Ok(a.partial_cmp(b))
        }
        (ValueKind::Date(a), ValueKind::Date(b)) => Ok(a.partial_cmp(b)),
        (ValueKind::Time(a), ValueKind::Time(b)) => Ok(a.partial_cmp(b)),
        (ValueKind::Duration(a), ValueKind::Duration(b)) => Ok(a.partial_cmp(b)),
        _ => Err(ComparisonError::IncompatibleCategories {
            lhs: lhs.category(),
            rhs: rhs.category(),
        }),
    }
}

/// Rank table backing the general total order over terms.
///
/// Blank nodes sort before IRIs, IRIs before literals; within literals the categories follow the
/// order below. This table intentionally differs from [aggregate_rank] (see DESIGN.md).
pub fn sort_rank(category: TermCategory) -> u8 {
    match category {
        TermCategory::Blank => 0,
        TermCategory::Iri => 1,
        TermCategory::StringLike => 2,
        TermCategory::LanguageString => 3,
        TermCategory::Boolean => 4,
        TermCategory::Numeric => 5,
        TermCategory::DateTime => 6,
        TermCategory::Date => 7,
        TermCategory::Time => 8,
        TermCategory::Duration => 9,
        TermCategory::Other => 10,
    }
}

/// Rank table used by MIN/MAX to resolve mixed-category groups.
///
/// String-like values beat numerics here, unlike in [sort_rank].
pub fn aggregate_rank(category: TermCategory) -> u8 {
    match category {
        TermCategory::StringLike | TermCategory::LanguageString => 0,
        TermCategory::Numeric => 1,
        TermCategory::DateTime => 2,
        TermCategory::Date => 3,
        TermCategory::Time => 4,
        TermCategory::Duration => 5,
        TermCategory::Boolean => 6,
        TermCategory::Iri => 7,
        TermCategory::Blank => 8,
        TermCategory::Other => 9,
    }
}

/// Within-category comparison that never fails.
///
/// Falls back to code-point comparison of lexical forms (then of the full wire forms) whenever
/// the category comparator declines. Used for ordering keys and for MIN/MAX tie-breaks.
pub fn category_cmp_or_lexical(lhs: &TypedValue, rhs: &TypedValue) -> Ordering {
    match (lhs.kind(), rhs.kind()) {
        (ValueKind::Numeric(a), ValueKind::Numeric(b)) => {
            if let Some(ordering) = a.partial_cmp(b) {
                return ordering;
            }
        }
        (ValueKind::Boolean(a), ValueKind::Boolean(b)) => return a.cmp(b),
        (ValueKind::DateTime(a), ValueKind::DateTime(b)) => {
            if let Some(ordering) = a.partial_cmp(b) {
                return ordering;
            }
        }
        (ValueKind::Date(a), ValueKind::Date(b)) => {
            if let Some(ordering) = a.partial_cmp(b) {
                return ordering;
            }
        }
        (ValueKind::Time(a), ValueKind::Time(b)) => {
            if let Some(ordering) = a.partial_cmp(b) {
                return ordering;
            }
        }
        (ValueKind::Duration(a), ValueKind::Duration(b)) => {
            if let Some(ordering) = a.partial_cmp(b) {
                return ordering;
            }
        }
        _ => {}
    }
    lhs.lexical()
        .cmp(rhs.lexical())
        .then_with(|| lhs.term().to_string().cmp(&rhs.term().to_string()))
}

/// A total order over arbitrary terms: [sort_rank] first, category comparison on ties.
pub fn total_cmp(lhs: &TypedValue, rhs: &TypedValue) -> Ordering {
    sort_rank(lhs.category())
        .cmp(&sort_rank(rhs.category()))
        .then_with(|| category_cmp_or_lexical(lhs, rhs))
}
