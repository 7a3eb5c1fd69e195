use crate::{ThinError, ThinResult, TypedValue, ValueKind};
use std::cmp::Ordering;

/// A reference to a string literal, consisting of a value and an optional language tag.
///
/// Plain literals and `xsd:string` literals are indistinguishable at this level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StringLiteralRef<'value>(pub &'value str, pub Option<&'value str>);

impl StringLiteralRef<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl PartialOrd for StringLiteralRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StringLiteralRef<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(other.0)
    }
}

impl<'a> TryFrom<&'a TypedValue> for StringLiteralRef<'a> {
    type Error = ThinError;

    fn try_from(value: &'a TypedValue) -> Result<Self, Self::Error> {
        match value.kind() {
            ValueKind::SimpleLiteral => Ok(Self(value.lexical(), None)),
            ValueKind::LanguageString => Ok(Self(value.lexical(), value.language())),
            _ => ThinError::expected(),
        }
    }
}

/// An owned string literal, consisting of a value and an optional language tag.
#[derive(PartialEq, Eq, Debug)]
pub struct OwnedStringLiteral(pub String, pub Option<String>);

impl OwnedStringLiteral {
    pub fn new(value: String, language: Option<String>) -> OwnedStringLiteral {
        OwnedStringLiteral(value, language)
    }
}

/// The argument pair of a binary string operation after the compatibility check.
pub struct CompatibleStringArgs<'data> {
    pub lhs: &'data str,
    pub rhs: &'data str,
    pub language: Option<&'data str>,
}

impl<'data> CompatibleStringArgs<'data> {
    /// Checks whether two [StringLiteralRef] are compatible and if they are returns a new
    /// [CompatibleStringArgs].
    ///
    /// Relevant Resources:
    /// - [SPARQL 1.1 - Argument Compatibility Rules](https://www.w3.org/TR/2013/REC-sparql11-query-20130321/#func-arg-compatibility)
    pub fn try_from(
        lhs: StringLiteralRef<'data>,
        rhs: StringLiteralRef<'data>,
    ) -> ThinResult<CompatibleStringArgs<'data>> {
        let is_compatible = rhs.1.is_none() || lhs.1 == rhs.1;

        if !is_compatible {
            return ThinError::expected();
        }

        Ok(CompatibleStringArgs {
            lhs: lhs.0,
            rhs: rhs.0,
            language: lhs.1,
        })
    }
}
