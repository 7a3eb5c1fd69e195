use crate::{TermParseError, ThinError, ThinResult};
use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;
use oxsdatatypes::{Decimal, Double, Float, Integer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Checks if the datatype is a numeric datatype.
pub fn is_numeric_datatype(datatype: NamedNodeRef<'_>) -> bool {
    static NUMERIC_DATATYPES: &[NamedNodeRef<'_>; 16] = &[
        xsd::INTEGER,
        xsd::DECIMAL,
        xsd::FLOAT,
        xsd::DOUBLE,
        xsd::BYTE,
        xsd::SHORT,
        xsd::INT,
        xsd::LONG,
        xsd::UNSIGNED_BYTE,
        xsd::UNSIGNED_SHORT,
        xsd::UNSIGNED_INT,
        xsd::UNSIGNED_LONG,
        xsd::POSITIVE_INTEGER,
        xsd::NEGATIVE_INTEGER,
        xsd::NON_POSITIVE_INTEGER,
        xsd::NON_NEGATIVE_INTEGER,
    ];
    NUMERIC_DATATYPES.contains(&datatype)
}

/// The promotion rank of a numeric type.
///
/// SUM and AVG promote their result type to the highest rank seen in the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericRank {
    Integer,
    Decimal,
    Float,
    Double,
}

impl NumericRank {
    /// The datatype a value of this rank is rendered with.
    pub fn datatype(self) -> NamedNodeRef<'static> {
        match self {
            NumericRank::Integer => xsd::INTEGER,
            NumericRank::Decimal => xsd::DECIMAL,
            NumericRank::Float => xsd::FLOAT,
            NumericRank::Double => xsd::DOUBLE,
        }
    }
}

/// A numeric literal value, one of the four XSD numeric primitives.
///
/// All integer-family datatypes (`xsd:byte`, `xsd:long`, ...) collapse to [Integer]. Comparison
/// and arithmetic promote both operands to the higher [NumericRank] first, so `"1"^^xsd:int`
/// equals `"1.0"^^xsd:decimal`.
#[derive(Clone, Copy, Debug)]
pub enum Numeric {
    Integer(Integer),
    Decimal(Decimal),
    Float(Float),
    Double(Double),
}

impl Numeric {
    /// Parses a numeric literal from its lexical form.
    ///
    /// Returns a hard error when `datatype` is numeric but `lexical` is outside its lexical
    /// space. Callers must ensure `datatype` passes [is_numeric_datatype].
    pub fn parse(datatype: NamedNodeRef<'_>, lexical: &str) -> Result<Self, TermParseError> {
        let lexical = lexical.trim();
        let invalid = || TermParseError::invalid_lexical(datatype.as_str(), lexical);
        if datatype == xsd::DECIMAL {
            Ok(Numeric::Decimal(
                Decimal::from_str(lexical).map_err(|_| invalid())?,
            ))
        } else if datatype == xsd::FLOAT {
            Ok(Numeric::Float(
                Float::from_str(lexical).map_err(|_| invalid())?,
            ))
        } else if datatype == xsd::DOUBLE {
            Ok(Numeric::Double(
                Double::from_str(lexical).map_err(|_| invalid())?,
            ))
        } else {
            Ok(Numeric::Integer(
                Integer::from_str(lexical).map_err(|_| invalid())?,
            ))
        }
    }

    pub fn rank(self) -> NumericRank {
        match self {
            Numeric::Integer(_) => NumericRank::Integer,
            Numeric::Decimal(_) => NumericRank::Decimal,
            Numeric::Float(_) => NumericRank::Float,
            Numeric::Double(_) => NumericRank::Double,
        }
    }

    pub fn is_nan(self) -> bool {
        match self {
            Numeric::Integer(_) | Numeric::Decimal(_) => false,
            Numeric::Float(value) => f32::from(value).is_nan(),
            Numeric::Double(value) => f64::from(value).is_nan(),
        }
    }

    fn to_f32(self) -> f32 {
        match self {
            Numeric::Integer(value) => i64::from(value) as f32,
            Numeric::Decimal(value) => value.to_string().parse().unwrap_or(f32::NAN),
            Numeric::Float(value) => f32::from(value),
            Numeric::Double(value) => f64::from(value) as f32,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Numeric::Integer(value) => i64::from(value) as f64,
            Numeric::Decimal(value) => value.to_string().parse().unwrap_or(f64::NAN),
            Numeric::Float(value) => f64::from(f32::from(value)),
            Numeric::Double(value) => f64::from(value),
        }
    }

    fn to_decimal(self) -> ThinResult<Decimal> {
        match self {
            Numeric::Integer(value) => Ok(Decimal::from(value)),
            Numeric::Decimal(value) => Ok(value),
            Numeric::Float(_) | Numeric::Double(_) => ThinError::expected(),
        }
    }

    /// [op:numeric-add](https://www.w3.org/TR/xpath-functions-31/#func-numeric-add) with type
    /// promotion. Returns `Err` on overflow.
    pub fn checked_add(self, rhs: Numeric) -> ThinResult<Numeric> {
        match self.rank().max(rhs.rank()) {
            NumericRank::Integer => match (self, rhs) {
                (Numeric::Integer(a), Numeric::Integer(b)) => a
                    .checked_add(b)
                    .map(Numeric::Integer)
                    .ok_or(ThinError::default()),
                _ => ThinError::expected(),
            },
            NumericRank::Decimal => self
                .to_decimal()?
                .checked_add(rhs.to_decimal()?)
                .map(Numeric::Decimal)
                .ok_or(ThinError::default()),
            NumericRank::Float => Ok(Numeric::Float(Float::from(self.to_f32() + rhs.to_f32()))),
            NumericRank::Double => {
                Ok(Numeric::Double(Double::from(self.to_f64() + rhs.to_f64())))
            }
        }
    }

    /// [op:numeric-multiply](https://www.w3.org/TR/xpath-functions-31/#func-numeric-multiply)
    /// with type promotion. Returns `Err` on overflow.
    pub fn checked_mul(self, rhs: Numeric) -> ThinResult<Numeric> {
        match self.rank().max(rhs.rank()) {
            NumericRank::Integer => match (self, rhs) {
                (Numeric::Integer(a), Numeric::Integer(b)) => a
                    .checked_mul(b)
                    .map(Numeric::Integer)
                    .ok_or(ThinError::default()),
                _ => ThinError::expected(),
            },
            NumericRank::Decimal => self
                .to_decimal()?
                .checked_mul(rhs.to_decimal()?)
                .map(Numeric::Decimal)
                .ok_or(ThinError::default()),
            NumericRank::Float => Ok(Numeric::Float(Float::from(self.to_f32() * rhs.to_f32()))),
            NumericRank::Double => {
                Ok(Numeric::Double(Double::from(self.to_f64() * rhs.to_f64())))
            }
        }
    }

    /// [op:numeric-divide](https://www.w3.org/TR/xpath-functions-31/#func-numeric-divide) with
    /// type promotion. Dividing two integers yields a decimal. Returns `Err` on division by an
    /// exact zero.
    pub fn checked_div(self, rhs: Numeric) -> ThinResult<Numeric> {
        match self.rank().max(rhs.rank()) {
            NumericRank::Integer | NumericRank::Decimal => self
                .to_decimal()?
                .checked_div(rhs.to_decimal()?)
                .map(Numeric::Decimal)
                .ok_or(ThinError::default()),
            NumericRank::Float => Ok(Numeric::Float(Float::from(self.to_f32() / rhs.to_f32()))),
            NumericRank::Double => {
                Ok(Numeric::Double(Double::from(self.to_f64() / rhs.to_f64())))
            }
        }
    }

    /// The datatype the value is rendered with.
    pub fn datatype(self) -> NamedNodeRef<'static> {
        self.rank().datatype()
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(Integer::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Double(Double::from(value))
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    /// Compares by true numeric value, not lexically. NaN never compares, not even with itself.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.rank().max(other.rank()) {
            NumericRank::Integer => match (self, other) {
                (Numeric::Integer(a), Numeric::Integer(b)) => Some(a.cmp(b)),
                _ => None,
            },
            NumericRank::Decimal => Some(self.to_decimal().ok()?.cmp(&other.to_decimal().ok()?)),
            NumericRank::Float | NumericRank::Double => {
                self.to_f64().partial_cmp(&other.to_f64())
            }
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => value.fmt(f),
            Numeric::Decimal(value) => value.fmt(f),
            Numeric::Float(value) => value.fmt(f),
            Numeric::Double(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Numeric {
        Numeric::from(value)
    }

    fn dec(value: &str) -> Numeric {
        Numeric::Decimal(Decimal::from_str(value).unwrap())
    }

    #[test]
    fn cross_rank_equality() {
        assert_eq!(int(1), dec("1.0"));
        assert_eq!(dec("2.5"), Numeric::from(2.5));
        assert_ne!(int(1), int(2));
    }

    #[test]
    fn cross_rank_ordering() {
        assert_eq!(int(1).partial_cmp(&dec("1.5")), Some(Ordering::Less));
        assert_eq!(
            Numeric::from(2.0).partial_cmp(&int(1)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn nan_never_compares() {
        let nan = Numeric::from(f64::NAN);
        assert_eq!(nan.partial_cmp(&nan), None);
        assert_eq!(nan.partial_cmp(&int(1)), None);
        assert_ne!(nan, nan);
    }

    #[test]
    fn addition_promotes() {
        let result = int(1).checked_add(dec("0.5")).unwrap();
        assert_eq!(result.rank(), NumericRank::Decimal);
        assert_eq!(result, dec("1.5"));
    }

    #[test]
    fn integer_division_yields_decimal() {
        let result = int(6).checked_div(int(4)).unwrap();
        assert_eq!(result.rank(), NumericRank::Decimal);
        assert_eq!(result, dec("1.5"));
        assert!(int(1).checked_div(int(0)).is_err());
    }

    #[test]
    fn integer_overflow_is_expected_error() {
        let max = Numeric::Integer(Integer::MAX);
        assert_eq!(max.checked_add(int(1)), ThinError::expected());
    }

    #[test]
    fn parse_validates_lexical_space() {
        assert!(Numeric::parse(xsd::INTEGER, "12").is_ok());
        assert!(Numeric::parse(xsd::INTEGER, "12.5").is_err());
        assert!(Numeric::parse(xsd::DOUBLE, "NaN").is_ok());
        assert!(Numeric::parse(xsd::DECIMAL, "abc").is_err());
    }
}
