use crate::aggregates::TermAccumulator;
use sparql_bridge_model::{aggregate_rank, category_cmp_or_lexical, TypedValue};
use std::cmp::Ordering;

fn compare_for_aggregation(lhs: &TypedValue, rhs: &TypedValue) -> Ordering {
    aggregate_rank(lhs.category())
        .cmp(&aggregate_rank(rhs.category()))
        .then_with(|| category_cmp_or_lexical(lhs, rhs))
}

/// [SPARQL 1.1 - Min](https://www.w3.org/TR/sparql11-query/#defn_aggMin)
///
/// Unbound inputs are skipped. Mixed-category groups are decided by the aggregation ranking
/// first, so string-like values win over numerics. Ties keep the first value seen.
#[derive(Debug, Default)]
pub struct MinAccumulator {
    best: Option<TypedValue>,
}

impl MinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TermAccumulator for MinAccumulator {
    fn step(&mut self, value: Option<&TypedValue>) {
        let Some(value) = value else {
            return;
        };
        match &self.best {
            Some(best) if compare_for_aggregation(value, best) != Ordering::Less => {}
            _ => self.best = Some(value.clone()),
        }
    }

    fn finish(self) -> Option<TypedValue> {
        self.best
    }
}

/// [SPARQL 1.1 - Max](https://www.w3.org/TR/sparql11-query/#defn_aggMax)
#[derive(Debug, Default)]
pub struct MaxAccumulator {
    best: Option<TypedValue>,
}

impl MaxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TermAccumulator for MaxAccumulator {
    fn step(&mut self, value: Option<&TypedValue>) {
        let Some(value) = value else {
            return;
        };
        match &self.best {
            Some(best) if compare_for_aggregation(value, best) != Ordering::Greater => {}
            _ => self.best = Some(value.clone()),
        }
    }

    fn finish(self) -> Option<TypedValue> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_is_unbound() {
        assert_eq!(MinAccumulator::new().finish(), None);
        assert_eq!(MaxAccumulator::new().finish(), None);
    }

    #[test]
    fn min_of_numbers() {
        let mut acc = MinAccumulator::new();
        for i in [3, 1, 2] {
            acc.step(Some(&TypedValue::integer(i)));
        }
        assert_eq!(acc.finish(), Some(TypedValue::integer(1)));
    }

    #[test]
    fn strings_rank_below_numerics() {
        let values = [
            TypedValue::simple("zebra"),
            TypedValue::simple("mango"),
            TypedValue::integer(42),
        ];
        let mut min = MinAccumulator::new();
        let mut max = MaxAccumulator::new();
        for value in &values {
            min.step(Some(value));
            max.step(Some(value));
        }
        assert_eq!(min.finish(), Some(TypedValue::simple("mango")));
        assert_eq!(max.finish(), Some(TypedValue::integer(42)));
    }

    #[test]
    fn unbound_inputs_are_skipped() {
        let mut acc = MaxAccumulator::new();
        acc.step(None);
        acc.step(Some(&TypedValue::integer(5)));
        acc.step(None);
        assert_eq!(acc.finish(), Some(TypedValue::integer(5)));
    }
}
