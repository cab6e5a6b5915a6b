use crate::bound::{Bound, BoundValue, Range};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_numeric_bound_renders_digits() {
    assert_eq!(BoundValue::from(1).to_string(), "1");
    assert_eq!(BoundValue::from(-7).to_string(), "-7");
    assert_eq!(
        BoundValue::from(Decimal::from_str("2.5").unwrap()).to_string(),
        "2.5"
    );
}

#[test]
fn test_symbolic_bound_renders_verbatim() {
    assert_eq!(BoundValue::from("n-1").to_string(), "n-1");
    assert_eq!(BoundValue::from(String::from("a")).to_string(), "a");
    assert_eq!(BoundValue::from("").to_string(), "");
}

#[test]
fn test_range_exposes_bounds_verbatim() {
    let range = Range::new(1, "n-1");
    assert_eq!(range.start, BoundValue::from(1));
    assert_eq!(range.last, BoundValue::from("n-1"));
}

#[test]
fn test_range_does_not_enforce_ordering() {
    let range = Range::new(10, 1);
    assert_eq!(range.start.to_string(), "10");
    assert_eq!(range.last.to_string(), "1");
}

#[test]
fn test_bound_constructors() {
    assert_eq!(Bound::range("a", "b"), Bound::Range(Range::new("a", "b")));
    assert_eq!(Bound::region("G"), Bound::Region("G".to_string()));
    assert_eq!(Bound::from(Range::new(0, 1)), Bound::range(0, 1));
}
