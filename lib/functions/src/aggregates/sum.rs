use crate::aggregates::TermAccumulator;
use sparql_bridge_model::{Numeric, TypedValue};

/// [SPARQL 1.1 - Sum](https://www.w3.org/TR/sparql11-query/#defn_aggSum)
///
/// The result is unbound for an empty group and for any group that contains an unbound or
/// non-numeric value. The result type is promoted to the highest rank seen in the group.
#[derive(Debug, Default)]
pub struct SumAccumulator {
    sum: Option<Numeric>,
    failed: bool,
}

impl SumAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TermAccumulator for SumAccumulator {
    fn step(&mut self, value: Option<&TypedValue>) {
        if self.failed {
            return;
        }
        let Some(value) = value.and_then(TypedValue::as_numeric) else {
            self.failed = true;
            return;
        };
        self.sum = match self.sum {
            None => Some(value),
            Some(sum) => match sum.checked_add(value) {
                Ok(sum) => Some(sum),
                Err(_) => {
                    self.failed = true;
                    None
                }
            },
        };
    }

    fn finish(self) -> Option<TypedValue> {
        if self.failed {
            return None;
        }
        self.sum.map(TypedValue::numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_is_unbound() {
        assert_eq!(SumAccumulator::new().finish(), None);
    }

    #[test]
    fn sums_integers() {
        let mut acc = SumAccumulator::new();
        for i in [1, 2, 3] {
            acc.step(Some(&TypedValue::integer(i)));
        }
        assert_eq!(acc.finish(), Some(TypedValue::integer(6)));
    }

    #[test]
    fn non_numeric_value_poisons_the_group() {
        let mut acc = SumAccumulator::new();
        acc.step(Some(&TypedValue::integer(1)));
        acc.step(Some(&TypedValue::simple("x")));
        acc.step(Some(&TypedValue::integer(2)));
        assert_eq!(acc.finish(), None);
    }

    #[test]
    fn unbound_value_poisons_the_group() {
        let mut acc = SumAccumulator::new();
        acc.step(Some(&TypedValue::integer(1)));
        acc.step(None);
        assert_eq!(acc.finish(), None);
    }
}
