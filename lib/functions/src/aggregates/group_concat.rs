use crate::aggregates::TermAccumulator;
use sparql_bridge_model::TypedValue;

pub const DEFAULT_SEPARATOR: &str = " ";

/// [SPARQL 1.1 - GroupConcat](https://www.w3.org/TR/sparql11-query/#defn_aggGroupConcat)
///
/// Joins the lexical forms of the group with a separator. Unlike the numeric aggregates, the
/// result is always bound: an empty group yields the empty string literal.
#[derive(Debug)]
pub struct GroupConcatAccumulator {
    separator: String,
    concatenated: Option<String>,
}

impl GroupConcatAccumulator {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            concatenated: None,
        }
    }
}

impl Default for GroupConcatAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl TermAccumulator for GroupConcatAccumulator {
    fn step(&mut self, value: Option<&TypedValue>) {
        let Some(value) = value else {
            return;
        };
        self.concatenated = Some(match self.concatenated.take() {
            None => value.lexical().to_owned(),
            Some(mut concatenated) => {
                concatenated.push_str(&self.separator);
                concatenated.push_str(value.lexical());
                concatenated
            }
        });
    }

    fn finish(self) -> Option<TypedValue> {
        Some(TypedValue::simple(self.concatenated.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_is_the_empty_string() {
        assert_eq!(
            GroupConcatAccumulator::default().finish(),
            Some(TypedValue::simple(""))
        );
    }

    #[test]
    fn joins_with_a_custom_separator() {
        let mut acc = GroupConcatAccumulator::new("-");
        acc.step(Some(&TypedValue::simple("a")));
        acc.step(Some(&TypedValue::simple("b")));
        acc.step(Some(&TypedValue::integer(3)));
        assert_eq!(acc.finish(), Some(TypedValue::simple("a-b-3")));
    }

    #[test]
    fn unbound_inputs_are_skipped() {
        let mut acc = GroupConcatAccumulator::default();
        acc.step(Some(&TypedValue::simple("a")));
        acc.step(None);
        acc.step(Some(&TypedValue::simple("b")));
        assert_eq!(acc.finish(), Some(TypedValue::simple("a b")));
    }
}
