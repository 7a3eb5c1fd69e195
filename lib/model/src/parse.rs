use crate::{TermParseError, TypedValue};
use oxrdf::{BlankNode, Literal, NamedNode};

/// The base expanded for the `xsd:` datatype shorthand.
pub const XSD_BASE: &str = "http://www.w3.org/2001/XMLSchema#";

const REPLACEMENT: char = '\u{FFFD}';

/// Parses a term from its wire form.
///
/// Accepted forms: `"lexical"`, `'lexical'`, `"lexical"@lang`, `"lexical"^^<iri>`,
/// `"lexical"^^xsd:name`, `<iri>`, `_:label`. Anything else is taken as the lexical form of a
/// plain literal. Literal bodies may escape quotes by backslash or by doubling, and support
/// `\uXXXX` / `\UXXXXXXXX` escapes including UTF-16 surrogate pairs; malformed surrogates map to
/// U+FFFD.
pub fn parse_term(input: &str) -> Result<TypedValue, TermParseError> {
    let input = input.trim();

    if let Some(rest) = input.strip_prefix('<') {
        let Some(iri) = rest.strip_suffix('>') else {
            return Err(TermParseError::InvalidIri(input.to_owned()));
        };
        return Ok(TypedValue::iri(NamedNode::new_unchecked(iri)));
    }

    if let Some(label) = input.strip_prefix("_:") {
        let node = BlankNode::new(label)
            .map_err(|_| TermParseError::InvalidBlankNode(label.to_owned()))?;
        return Ok(TypedValue::blank(node));
    }

    if input.starts_with('"') || input.starts_with('\'') {
        return parse_literal(input);
    }

    // Bare text is taken verbatim as a plain literal.
    Ok(TypedValue::simple(input))
}

fn parse_literal(input: &str) -> Result<TypedValue, TermParseError> {
    let mut chars = input.char_indices();
    let Some((_, quote)) = chars.next() else {
        return Err(TermParseError::UnterminatedLiteral(input.to_owned()));
    };

    // Find the closing quote, honoring backslash escapes and doubled quotes.
    let mut body_end = None;
    while let Some((pos, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            match chars.clone().next() {
                Some((_, next)) if next == quote => {
                    chars.next();
                }
                _ => {
                    body_end = Some(pos);
                    break;
                }
            }
        }
    }
    let Some(body_end) = body_end else {
        return Err(TermParseError::UnterminatedLiteral(input.to_owned()));
    };

    let lexical = unescape(&input[1..body_end], quote);
    let suffix = input[body_end + quote.len_utf8()..].trim();

    if suffix.is_empty() {
        return Ok(TypedValue::simple(lexical));
    }

    if let Some(language) = suffix.strip_prefix('@') {
        if language.is_empty() {
            return Err(TermParseError::InvalidLanguageTag(suffix.to_owned()));
        }
        return TypedValue::language_string(lexical, language);
    }

    if let Some(datatype) = suffix.strip_prefix("^^") {
        let datatype = expand_datatype(datatype.trim())?;
        return TypedValue::new(Literal::new_typed_literal(lexical, datatype).into());
    }

    Err(TermParseError::UnterminatedLiteral(input.to_owned()))
}

/// Expands a datatype reference to an absolute IRI. Only the `xsd:` shorthand is known; other
/// prefixed names are rejected.
pub fn expand_datatype(datatype: &str) -> Result<NamedNode, TermParseError> {
    if let Some(iri) = datatype.strip_prefix('<') {
        let Some(iri) = iri.strip_suffix('>') else {
            return Err(TermParseError::InvalidDatatype(datatype.to_owned()));
        };
        return NamedNode::new(iri).map_err(|_| TermParseError::InvalidDatatype(iri.to_owned()));
    }
    if let Some(local) = datatype.strip_prefix("xsd:") {
        return NamedNode::new(format!("{XSD_BASE}{local}"))
            .map_err(|_| TermParseError::InvalidDatatype(datatype.to_owned()));
    }
    NamedNode::new(datatype).map_err(|_| TermParseError::InvalidDatatype(datatype.to_owned()))
}

/// Resolves backslash and doubled-quote escapes in a literal body.
fn unescape(raw: &str, quote: char) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == quote && chars.peek() == Some(&quote) {
            chars.next();
            result.push(quote);
            continue;
        }
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('b') => result.push('\u{8}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('f') => result.push('\u{C}'),
            Some('u') => result.push(read_unicode_escape(&mut chars, 4)),
            Some('U') => result.push(read_unicode_escape(&mut chars, 8)),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

/// Reads a `\uXXXX` or `\UXXXXXXXX` escape value (the introducing characters are already
/// consumed). Surrogate pairs are collapsed into one code point; anything malformed yields the
/// replacement character.
fn read_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
) -> char {
    let Some(value) = read_hex(chars, digits) else {
        return REPLACEMENT;
    };

    if (0xD800..=0xDBFF).contains(&value) {
        // High surrogate: only valid when followed by a low surrogate escape.
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_hex(&mut lookahead, 4) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    *chars = lookahead;
                    let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined).unwrap_or(REPLACEMENT);
                }
            }
        }
        return REPLACEMENT;
    }
    if (0xDC00..=0xDFFF).contains(&value) {
        // Lone low surrogate.
        return REPLACEMENT;
    }
    char::from_u32(value).unwrap_or(REPLACEMENT)
}

fn read_hex(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars.next()?.to_digit(16)?;
        value = value.checked_mul(16)?.checked_add(digit)?;
    }
    Some(value)
}
