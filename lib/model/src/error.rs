use std::fmt::{Display, Formatter};
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use thiserror::Error;

/// A light-weight result, mainly used for SPARQL operations.
pub type ThinResult<T> = Result<T, ThinError>;

/// A thin error type that indicates an *expected* failure without any reason.
///
/// In SPARQL, many operations can fail. For example, because the input value had a different data
/// type. These errors are expected and are part of regular query evaluation. As all of these
/// "expected" errors are treated equally, we do not need to store a reason.
#[derive(Clone, Copy, Debug, Default, Error, PartialEq, Eq)]
pub struct ThinError {}

impl ThinError {
    /// Creates a result with a [ThinError].
    pub fn expected<T>() -> ThinResult<T> {
        Err(ThinError::default())
    }
}

impl Display for ThinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("An expected error occurred.")
    }
}

macro_rules! implement_from {
    ($t:ty) => {
        impl From<$t> for ThinError {
            fn from(_: $t) -> Self {
                ThinError::default()
            }
        }
    };
}

implement_from!(ParseIntError);
implement_from!(ParseFloatError);
implement_from!(TryFromIntError);
implement_from!(oxrdf::IriParseError);
implement_from!(oxrdf::BlankNodeIdParseError);

impl From<TermParseError> for ThinError {
    fn from(_: TermParseError) -> Self {
        ThinError::default()
    }
}

/// A hard error raised while constructing a term from its wire form.
///
/// Soft translation failures never surface through this type. It is reserved for inputs that are
/// structurally broken (an unterminated literal) or that violate the lexical space of a
/// constrained datatype (e.g. `"abc"^^xsd:integer`).
#[derive(Debug, Error)]
pub enum TermParseError {
    #[error("unterminated literal: {0}")]
    UnterminatedLiteral(String),
    #[error("invalid lexical form {value:?} for datatype <{datatype}>")]
    InvalidLexicalForm { datatype: String, value: String },
    #[error("invalid language tag: {0}")]
    InvalidLanguageTag(String),
    #[error("invalid datatype IRI: {0}")]
    InvalidDatatype(String),
    #[error("invalid IRI: {0}")]
    InvalidIri(String),
    #[error("invalid blank node label: {0}")]
    InvalidBlankNode(String),
}

impl TermParseError {
    pub(crate) fn invalid_lexical(datatype: impl Into<String>, value: impl Into<String>) -> Self {
        TermParseError::InvalidLexicalForm {
            datatype: datatype.into(),
            value: value.into(),
        }
    }
}

/// A hard error raised when two terms are compared with a relative operator (`<`, `<=`, `>`,
/// `>=`) although their categories make them incomparable.
///
/// Note that this is intentionally asymmetric with equality: `=` across incompatible categories
/// is defined as `false` and never raises.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("terms of categories {lhs:?} and {rhs:?} are not comparable")]
    IncompatibleCategories {
        lhs: crate::TermCategory,
        rhs: crate::TermCategory,
    },
    #[error("language-tagged literals do not support relative comparison")]
    LanguageTaggedOperand,
}
