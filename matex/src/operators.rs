//! N-ary operator combinators and basic forms: joins over expression lists
//! and the sub/superscript, fraction, root, and logarithm templates.

use crate::layout::wrap;
use crate::symbols::SPACE_L;

/// Textual length above which [`pow`] parenthesizes its base
const POW_WRAP_THRESHOLD: usize = 4;

/// Chain expressions with `=`
pub fn equal(exprs: &[&str]) -> String {
    exprs.join(&format!("{SPACE_L}={SPACE_L}"))
}

/// Chain expressions with `\iff`
pub fn iff(exprs: &[&str]) -> String {
    exprs.join(&format!("{SPACE_L}\\iff{SPACE_L}"))
}

/// Join expressions with `+`
pub fn sum(exprs: &[&str]) -> String {
    exprs.join(" + ")
}

/// Subscript
pub fn low(expr: &str) -> String {
    format!("_{{{}}} ", expr)
}

/// Superscript
pub fn high(expr: &str) -> String {
    format!("^{{{}}} ", expr)
}

/// Attach an exponent, parenthesizing long bases
///
/// A base longer than four characters is wrapped in `\left( .. \right)`
/// before the exponent is attached. The measure is textual length, not
/// syntactic complexity, so a short compound base like `x+y` stays bare
/// while a long single identifier gets wrapped. Downstream output depends
/// on this exact thresholding.
pub fn pow(base: &str, expo: &str) -> String {
    if base.chars().count() > POW_WRAP_THRESHOLD {
        return format!("{}{}", wrap(base), high(expo));
    }
    format!("{}{}", base, high(expo))
}

/// Second power of `base`, with [`pow`]'s wrapping rule
pub fn square(base: &str) -> String {
    pow(base, "2")
}

pub fn frac(top: &str, bottom: &str) -> String {
    format!("\\frac{{{}}}{{{}}} ", top, bottom)
}

/// Product written with a centered dot
pub fn cdot(a: &str, b: &str) -> String {
    format!("{}\\cdot {} ", a, b)
}

/// Product written with a multiplication cross
pub fn times(a: &str, b: &str) -> String {
    format!("{}\\times {} ", a, b)
}

pub fn sqrt(base: &str) -> String {
    format!("\\sqrt{{{}}}", base)
}

/// `index`-th root, e.g. `root("27", "3")` for the cubic root of 27
pub fn root(base: &str, index: &str) -> String {
    format!("\\sqrt[{}]{{{}}}", index, base)
}

pub fn log(expr: &str) -> String {
    format!("\\log {} ", expr)
}

pub fn log_base(base: &str, expr: &str) -> String {
    format!("\\log{}{} ", low(base), expr)
}
