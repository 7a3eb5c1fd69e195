use crate::{Numeric, OwnedStringLiteral, TermParseError, is_numeric_datatype};
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef, Term};
use oxsdatatypes::{Date, DateTime, Duration, Time};
use std::fmt;
use std::str::FromStr;

/// The type family of a term, used for comparability checks and cross-category ranking.
///
/// Exactly one category applies to a term. Plain literals and `xsd:string` literals share
/// [TermCategory::StringLike].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermCategory {
    Iri,
    Blank,
    StringLike,
    LanguageString,
    Boolean,
    Numeric,
    DateTime,
    Date,
    Time,
    Duration,
    Other,
}

/// The classification of a term, computed once at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    NamedNode,
    BlankNode,
    SimpleLiteral,
    LanguageString,
    Boolean(bool),
    Numeric(Numeric),
    DateTime(DateTime),
    Date(Date),
    Time(Time),
    Duration(Duration),
    OtherLiteral,
}

/// An immutable RDF term together with its derived classification.
///
/// The classification is computed exactly once, when the value is constructed. Construction is
/// the only place where malformed lexical forms for constrained datatypes (numeric, date, time,
/// date-time) surface as hard errors; everything downstream can rely on the parsed value.
#[derive(Clone, Debug)]
pub struct TypedValue {
    term: Term,
    kind: ValueKind,
}

impl TypedValue {
    /// Classifies `term` and wraps it.
    pub fn new(term: Term) -> Result<Self, TermParseError> {
        let kind = classify(&term)?;
        Ok(TypedValue { term, kind })
    }

    /// A plain literal without language tag or datatype.
    pub fn simple(value: impl Into<String>) -> Self {
        TypedValue {
            term: Literal::new_simple_literal(value).into(),
            kind: ValueKind::SimpleLiteral,
        }
    }

    /// A language-tagged string. The tag is lower-cased and validated.
    pub fn language_string(
        value: impl Into<String>,
        language: &str,
    ) -> Result<Self, TermParseError> {
        let literal = Literal::new_language_tagged_literal(value, language.to_lowercase())
            .map_err(|_| TermParseError::InvalidLanguageTag(language.to_owned()))?;
        Ok(TypedValue {
            term: literal.into(),
            kind: ValueKind::LanguageString,
        })
    }

    /// A literal with an explicit datatype. Runs full classification, so a constrained datatype
    /// with a malformed lexical form is rejected here.
    pub fn typed_literal(
        value: impl Into<String>,
        datatype: NamedNode,
    ) -> Result<Self, TermParseError> {
        Self::new(Literal::new_typed_literal(value, datatype).into())
    }

    pub fn string_literal(literal: OwnedStringLiteral) -> Result<Self, TermParseError> {
        match literal.1 {
            Some(language) => Self::language_string(literal.0, &language),
            None => Ok(Self::simple(literal.0)),
        }
    }

    pub fn iri(iri: NamedNode) -> Self {
        TypedValue {
            term: iri.into(),
            kind: ValueKind::NamedNode,
        }
    }

    pub fn blank(node: BlankNode) -> Self {
        TypedValue {
            term: node.into(),
            kind: ValueKind::BlankNode,
        }
    }

    pub fn boolean(value: bool) -> Self {
        TypedValue {
            term: Literal::new_typed_literal(if value { "true" } else { "false" }, xsd::BOOLEAN)
                .into(),
            kind: ValueKind::Boolean(value),
        }
    }

    /// A numeric literal rendered with its canonical lexical form.
    pub fn numeric(value: Numeric) -> Self {
        TypedValue {
            term: Literal::new_typed_literal(value.to_string(), value.datatype()).into(),
            kind: ValueKind::Numeric(value),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::numeric(Numeric::from(value))
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn into_term(self) -> Term {
        self.term
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn category(&self) -> TermCategory {
        match self.kind {
            ValueKind::NamedNode => TermCategory::Iri,
            ValueKind::BlankNode => TermCategory::Blank,
            ValueKind::SimpleLiteral => TermCategory::StringLike,
            ValueKind::LanguageString => TermCategory::LanguageString,
            ValueKind::Boolean(_) => TermCategory::Boolean,
            ValueKind::Numeric(_) => TermCategory::Numeric,
            ValueKind::DateTime(_) => TermCategory::DateTime,
            ValueKind::Date(_) => TermCategory::Date,
            ValueKind::Time(_) => TermCategory::Time,
            ValueKind::Duration(_) => TermCategory::Duration,
            ValueKind::OtherLiteral => TermCategory::Other,
        }
    }

    /// The lexical value: the content of a literal, the text of an IRI or the label of a blank
    /// node.
    pub fn lexical(&self) -> &str {
        match &self.term {
            Term::NamedNode(node) => node.as_str(),
            Term::BlankNode(node) => node.as_str(),
            Term::Literal(literal) => literal.value(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        match &self.term {
            Term::Literal(literal) => literal.language(),
            _ => None,
        }
    }

    /// The datatype of a literal, or `None` for IRIs and blank nodes. Plain literals report
    /// `xsd:string`, as SPARQL's `DATATYPE` does.
    pub fn datatype(&self) -> Option<NamedNodeRef<'_>> {
        match &self.term {
            Term::Literal(literal) => Some(literal.datatype()),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<Numeric> {
        match self.kind {
            ValueKind::Numeric(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.term.is_literal()
    }

    pub fn is_iri(&self) -> bool {
        self.term.is_named_node()
    }

    pub fn is_blank(&self) -> bool {
        self.term.is_blank_node()
    }
}

impl PartialEq for TypedValue {
    /// Syntactic identity of the underlying term. Value-based SPARQL equality lives in
    /// [crate::effective_eq].
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.term.fmt(f)
    }
}

fn classify(term: &Term) -> Result<ValueKind, TermParseError> {
    let literal = match term {
        Term::NamedNode(_) => return Ok(ValueKind::NamedNode),
        Term::BlankNode(_) => return Ok(ValueKind::BlankNode),
        Term::Literal(literal) => literal,
    };

    if literal.language().is_some() {
        return Ok(ValueKind::LanguageString);
    }

    let datatype = literal.datatype();
    let lexical = literal.value();
    if datatype == xsd::STRING {
        Ok(ValueKind::SimpleLiteral)
    } else if datatype == rdf::LANG_STRING {
        // Not constructible through oxrdf without a tag, but the wire may claim it.
        Ok(ValueKind::OtherLiteral)
    } else if is_numeric_datatype(datatype) {
        Ok(ValueKind::Numeric(Numeric::parse(datatype, lexical)?))
    } else if datatype == xsd::BOOLEAN {
        match lexical.trim() {
            "true" | "1" => Ok(ValueKind::Boolean(true)),
            "false" | "0" => Ok(ValueKind::Boolean(false)),
            _ => Ok(ValueKind::OtherLiteral),
        }
    } else if datatype == xsd::DATE_TIME {
        DateTime::from_str(lexical)
            .map(ValueKind::DateTime)
            .map_err(|_| TermParseError::invalid_lexical(datatype.as_str(), lexical))
    } else if datatype == xsd::DATE {
        Date::from_str(lexical)
            .map(ValueKind::Date)
            .map_err(|_| TermParseError::invalid_lexical(datatype.as_str(), lexical))
    } else if datatype == xsd::TIME {
        Time::from_str(lexical)
            .map(ValueKind::Time)
            .map_err(|_| TermParseError::invalid_lexical(datatype.as_str(), lexical))
    } else if datatype == xsd::DURATION
        || datatype == xsd::YEAR_MONTH_DURATION
        || datatype == xsd::DAY_TIME_DURATION
    {
        // Durations are not a constrained datatype here: unparsable ones degrade to opaque
        // literals instead of failing construction.
        Ok(Duration::from_str(lexical)
            .map(ValueKind::Duration)
            .unwrap_or(ValueKind::OtherLiteral))
    } else {
        Ok(ValueKind::OtherLiteral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_classification_requires_valid_lexical() {
        TypedValue::typed_literal("42", xsd::INTEGER.into_owned()).unwrap();
        TypedValue::typed_literal("forty-two", xsd::INTEGER.into_owned()).unwrap_err();
    }

    #[test]
    fn date_time_classification() {
        let value =
            TypedValue::typed_literal("2024-01-01T10:00:00Z", xsd::DATE_TIME.into_owned())
                .unwrap();
        assert_eq!(value.category(), TermCategory::DateTime);
        TypedValue::typed_literal("not-a-date", xsd::DATE_TIME.into_owned()).unwrap_err();
    }

    #[test]
    fn unknown_datatype_is_other() {
        let value = TypedValue::typed_literal(
            "anything",
            NamedNode::new("http://example.com/dt").unwrap(),
        )
        .unwrap();
        assert_eq!(value.category(), TermCategory::Other);
    }

    #[test]
    fn language_tag_is_lowercased() {
        let value = TypedValue::language_string("hello", "EN").unwrap();
        assert_eq!(value.language(), Some("en"));
        assert_eq!(value.category(), TermCategory::LanguageString);
    }

    #[test]
    fn boolean_with_bad_lexical_degrades() {
        let value = TypedValue::typed_literal("maybe", xsd::BOOLEAN.into_owned()).unwrap();
        assert_eq!(value.category(), TermCategory::Other);
    }

    #[test]
    fn datatype_of_simple_literal_is_xsd_string() {
        assert_eq!(TypedValue::simple("x").datatype(), Some(xsd::STRING));
    }
}
