use crate::aggregates::TermAccumulator;
use sparql_bridge_model::TypedValue;

/// [SPARQL 1.1 - Sample](https://www.w3.org/TR/sparql11-query/#defn_aggSample)
///
/// Keeps the first bound value of the group, which makes the result deterministic for a fixed
/// input order.
#[derive(Debug, Default)]
pub struct SampleAccumulator {
    value: Option<TypedValue>,
}

impl SampleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TermAccumulator for SampleAccumulator {
    fn step(&mut self, value: Option<&TypedValue>) {
        if self.value.is_none() {
            self.value = value.cloned();
        }
    }

    fn finish(self) -> Option<TypedValue> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_first_bound_value() {
        let mut acc = SampleAccumulator::new();
        acc.step(None);
        acc.step(Some(&TypedValue::simple("a")));
        acc.step(Some(&TypedValue::simple("b")));
        assert_eq!(acc.finish(), Some(TypedValue::simple("a")));
    }

    #[test]
    fn empty_group_is_unbound() {
        assert_eq!(SampleAccumulator::new().finish(), None);
    }
}
