use crate::aggregates::TermAccumulator;
use sparql_bridge_model::vocab::xsd;
use sparql_bridge_model::{Numeric, NumericRank, TypedValue};

/// [SPARQL 1.1 - Avg](https://www.w3.org/TR/sparql11-query/#defn_aggAvg)
///
/// Unbound under the same conditions as SUM. Integer groups divide as decimals, and a decimal
/// result is always rendered with a fractional part, so the average of 2 and 4 reads `3.0`.
#[derive(Debug, Default)]
pub struct AvgAccumulator {
    sum: Option<Numeric>,
    count: i64,
    failed: bool,
}

impl AvgAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TermAccumulator for AvgAccumulator {
    fn step(&mut self, value: Option<&TypedValue>) {
        if self.failed {
            return;
        }
        let Some(value) = value.and_then(TypedValue::as_numeric) else {
            self.failed = true;
            return;
        };
        self.count += 1;
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
        let sum = self.sum?;
        let quotient = sum.checked_div(Numeric::from(self.count)).ok()?;
        match quotient.rank() {
            NumericRank::Integer | NumericRank::Decimal => {
                let mut lexical = quotient.to_string();
                if !lexical.contains('.') {
                    lexical.push_str(".0");
                }
                TypedValue::typed_literal(lexical, xsd::DECIMAL.into_owned()).ok()
            }
            NumericRank::Float | NumericRank::Double => Some(TypedValue::numeric(quotient)),
        }
    }
}
