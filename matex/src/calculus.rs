//! Higher-order combinators: bounded sums, integrals, limits, and area
//! integrals over a region label.

use crate::bound::{Bound, Range};
use crate::error::MatexError;
use crate::operators::low;
use crate::symbols::{SPACE_M, SPACE_NEG_L, SPACE_S};
use crate::MatexResult;

fn require_range<'a>(bound: &'a Bound, combinator: &str) -> MatexResult<&'a Range> {
    match bound {
        Bound::Range(range) => Ok(range),
        Bound::Region(label) => Err(MatexError::invalid_argument(format!(
            "{} requires a range bound, got region '{}'",
            combinator, label
        ))),
    }
}

/// Bounded sum over `variable` running from the range start to its last
/// value
///
/// Fails with [`MatexError::InvalidArgument`] when `bound` is not a range;
/// no partial output is produced.
pub fn sigma(variable: &str, bound: &Bound, body: &str) -> MatexResult<String> {
    let range = require_range(bound, "sigma")?;
    Ok(format!(
        "\\sum^{{{}}}_{{{}={}}} {} ",
        range.last, variable, range.start, body
    ))
}

/// Definite integral of `body` in `variable` over the range
///
/// Fails with [`MatexError::InvalidArgument`] when `bound` is not a range;
/// no partial output is produced.
pub fn integral(variable: &str, bound: &Bound, body: &str) -> MatexResult<String> {
    let range = require_range(bound, "integral")?;
    Ok(format!(
        "\\int^{{{}}}_{{{}}} {} d{} ",
        range.last, range.start, body, variable
    ))
}

/// Limit of `body` as `variable` approaches `dest`
pub fn limit(variable: &str, dest: &str, body: &str) -> String {
    format!("\\lim_{{{} \\to {}}} {} ", variable, dest, body)
}

/// Iterated integral over a labelled region
///
/// Emits one integral sign per variable, pulled together with negative
/// spacing, then the subscripted area label, the body, and the
/// differential of each variable. The bound here is the region label, not
/// a start/end pair, so no [`Bound`] is involved.
pub fn area_integral(variables: &[&str], area: &str, body: &str) -> String {
    let signs = vec!["\\int"; variables.len()].join(SPACE_NEG_L);
    let differentials = variables
        .iter()
        .map(|letter| format!("d{}", letter))
        .collect::<Vec<_>>()
        .join(SPACE_S);
    format!(
        "{}{}{} {}{}",
        signs,
        low(area),
        body,
        SPACE_M,
        differentials
    )
}
