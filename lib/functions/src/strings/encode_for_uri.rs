use crate::UnaryTermOp;
use sparql_bridge_model::{StringLiteralRef, ThinResult, TypedValue};

/// [SPARQL 1.1 - ENCODE_FOR_URI](https://www.w3.org/TR/sparql11-query/#func-encode)
///
/// Percent-encodes everything outside the unreserved set. The result is always a plain literal,
/// regardless of the input's language tag.
#[derive(Debug, Default)]
pub struct EncodeForUriTermOp;

impl EncodeForUriTermOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl UnaryTermOp for EncodeForUriTermOp {
    fn evaluate(&self, arg: &TypedValue) -> ThinResult<TypedValue> {
        let arg = StringLiteralRef::try_from(arg)?;
        let mut result = String::with_capacity(arg.0.len());
        for c in arg.0.bytes() {
            match c {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    result.push(char::from(c))
                }
                _ => {
                    result.push('%');
                    for digit in [c / 16, c % 16] {
                        result.push(
                            char::from_digit(u32::from(digit), 16)
                                .unwrap_or('0')
                                .to_ascii_uppercase(),
                        );
                    }
                }
            }
        }

        Ok(TypedValue::simple(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        let result = EncodeForUriTermOp::new()
            .evaluate(&TypedValue::simple("Los Angeles/CA"))
            .unwrap();
        assert_eq!(result.lexical(), "Los%20Angeles%2FCA");
    }

    #[test]
    fn multi_byte_characters_encode_per_byte() {
        let result = EncodeForUriTermOp::new()
            .evaluate(&TypedValue::simple("é"))
            .unwrap();
        assert_eq!(result.lexical(), "%C3%A9");
    }
}
