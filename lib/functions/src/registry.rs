use std::fmt::{Display, Formatter};

/// Identifier for a SPARQL builtin the compiler may emit or evaluate.
///
/// [Display] renders the SPARQL spelling used when the builtin appears inside a generated
/// `FILTER`. The [BuiltinName::from_sql_name] table is the only place where host (SQL) function
/// names are recognized: an unknown name means the whole function call is not pushable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinName {
    Str,
    Lang,
    Datatype,
    Iri,
    BNode,
    StrDt,
    StrLang,
    StrStarts,
    StrEnds,
    StrBefore,
    StrAfter,
    Contains,
    SubStr,
    Replace,
    StrLen,
    UCase,
    LCase,
    Concat,
    EncodeForUri,
    Regex,
    Bound,
}

impl BuiltinName {
    /// Resolves a host-side function name to a builtin.
    pub fn from_sql_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "str" => BuiltinName::Str,
            "lang" => BuiltinName::Lang,
            "datatype" => BuiltinName::Datatype,
            "iri" | "uri" => BuiltinName::Iri,
            "bnode" => BuiltinName::BNode,
            "strdt" => BuiltinName::StrDt,
            "strlang" => BuiltinName::StrLang,
            "strstarts" | "starts_with" => BuiltinName::StrStarts,
            "strends" | "ends_with" => BuiltinName::StrEnds,
            "strbefore" => BuiltinName::StrBefore,
            "strafter" => BuiltinName::StrAfter,
            "contains" => BuiltinName::Contains,
            "replace" => BuiltinName::Replace,
            "substr" | "substring" => BuiltinName::SubStr,
            "strlen" | "length" | "char_length" => BuiltinName::StrLen,
            "ucase" | "upper" => BuiltinName::UCase,
            "lcase" | "lower" => BuiltinName::LCase,
            "concat" => BuiltinName::Concat,
            "encode_for_uri" => BuiltinName::EncodeForUri,
            "regex" => BuiltinName::Regex,
            _ => return None,
        })
    }

    /// Whether the builtin accepts `arity` arguments.
    pub fn accepts_arity(self, arity: usize) -> bool {
        match self {
            BuiltinName::Str
            | BuiltinName::Lang
            | BuiltinName::Datatype
            | BuiltinName::Iri
            | BuiltinName::BNode
            | BuiltinName::StrLen
            | BuiltinName::UCase
            | BuiltinName::LCase
            | BuiltinName::EncodeForUri
            | BuiltinName::Bound => arity == 1,
            BuiltinName::StrDt
            | BuiltinName::StrLang
            | BuiltinName::StrStarts
            | BuiltinName::StrEnds
            | BuiltinName::StrBefore
            | BuiltinName::StrAfter
            | BuiltinName::Contains => arity == 2,
            BuiltinName::SubStr => arity == 2 || arity == 3,
            BuiltinName::Regex => arity == 2 || arity == 3,
            BuiltinName::Replace => arity == 3 || arity == 4,
            BuiltinName::Concat => arity >= 1,
        }
    }
}

impl Display for BuiltinName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BuiltinName::Str => "STR",
            BuiltinName::Lang => "LANG",
            BuiltinName::Datatype => "DATATYPE",
            BuiltinName::Iri => "IRI",
            BuiltinName::BNode => "BNODE",
            BuiltinName::StrDt => "STRDT",
            BuiltinName::StrLang => "STRLANG",
            BuiltinName::StrStarts => "STRSTARTS",
            BuiltinName::StrEnds => "STRENDS",
            BuiltinName::StrBefore => "STRBEFORE",
            BuiltinName::StrAfter => "STRAFTER",
            BuiltinName::Contains => "CONTAINS",
            BuiltinName::Replace => "REPLACE",
            BuiltinName::SubStr => "SUBSTR",
            BuiltinName::StrLen => "STRLEN",
            BuiltinName::UCase => "UCASE",
            BuiltinName::LCase => "LCASE",
            BuiltinName::Concat => "CONCAT",
            BuiltinName::EncodeForUri => "ENCODE_FOR_URI",
            BuiltinName::Regex => "REGEX",
            BuiltinName::Bound => "BOUND",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_names_resolve_case_insensitively() {
        assert_eq!(
            BuiltinName::from_sql_name("UPPER"),
            Some(BuiltinName::UCase)
        );
        assert_eq!(
            BuiltinName::from_sql_name("starts_with"),
            Some(BuiltinName::StrStarts)
        );
        assert_eq!(BuiltinName::from_sql_name("now"), None);
    }

    #[test]
    fn arities() {
        assert!(BuiltinName::SubStr.accepts_arity(2));
        assert!(BuiltinName::SubStr.accepts_arity(3));
        assert!(!BuiltinName::SubStr.accepts_arity(1));
        assert!(BuiltinName::Concat.accepts_arity(5));
    }
}
