use rust_decimal::Decimal;
use std::fmt;

/// A single bound of an interval: numeric or symbolic
///
/// Bounds are converted to text exactly once, at the point where a
/// combinator interpolates them. Numeric bounds render through `Decimal`;
/// symbolic bounds render verbatim (including the empty string).
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Number(Decimal),
    Symbol(String),
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundValue::Number(n) => write!(f, "{}", n),
            BoundValue::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for BoundValue {
    fn from(value: i64) -> Self {
        BoundValue::Number(Decimal::from(value))
    }
}

impl From<Decimal> for BoundValue {
    fn from(value: Decimal) -> Self {
        BoundValue::Number(value)
    }
}

impl From<&str> for BoundValue {
    fn from(value: &str) -> Self {
        BoundValue::Symbol(value.to_string())
    }
}

impl From<String> for BoundValue {
    fn from(value: String) -> Self {
        BoundValue::Symbol(value)
    }
}

/// A closed interval `[start, last]` consumed by the bounded-operator
/// combinators
///
/// The library checks shape, not semantics: no ordering between `start` and
/// `last` is enforced, and both are exposed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub start: BoundValue,
    pub last: BoundValue,
}

impl Range {
    /// Create a new range from two bound values
    pub fn new(start: impl Into<BoundValue>, last: impl Into<BoundValue>) -> Self {
        Self {
            start: start.into(),
            last: last.into(),
        }
    }
}

/// The bound shapes a caller can hand to a bounded-operator combinator
///
/// `sigma` and `integral` require the `Range` variant; a `Region` carries
/// only an area label and is rejected by both with an invalid-argument
/// error. `area_integral` works from the label directly and takes no
/// `Bound` at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Range(Range),
    Region(String),
}

impl Bound {
    /// Create a range bound
    pub fn range(start: impl Into<BoundValue>, last: impl Into<BoundValue>) -> Self {
        Bound::Range(Range::new(start, last))
    }

    /// Create a region bound from an area label
    pub fn region(label: impl Into<String>) -> Self {
        Bound::Region(label.into())
    }
}

impl From<Range> for Bound {
    fn from(range: Range) -> Self {
        Bound::Range(range)
    }
}
