use crate::decoration::{
    acute, bar, breve, ceil, check, ddot, delta, dot, floor, grave, hat, not, triangle,
    vec_many, vec_single,
};
use crate::symbols::EQUIV;

#[test]
fn test_diacritics() {
    assert_eq!(bar("x"), "\\bar{x} ");
    assert_eq!(hat("x"), "\\hat{x} ");
    assert_eq!(dot("x"), "\\dot{x} ");
    assert_eq!(ddot("x"), "\\ddot{x} ");
    assert_eq!(acute("x"), "\\acute{x} ");
    assert_eq!(grave("x"), "\\grave{x} ");
    assert_eq!(check("x"), "\\check{x} ");
    assert_eq!(breve("x"), "\\breve{x} ");
}

#[test]
fn test_vec_single_hugs_the_letter() {
    assert_eq!(vec_single("a"), "\\vec{a} ");
}

#[test]
fn test_vec_many_returns_one_fragment_per_symbol() {
    let fragments = vec_many(&["a", "b", "c"]);
    assert_eq!(
        fragments,
        vec![
            "\\vec{\\mathstrut a} ",
            "\\vec{\\mathstrut b} ",
            "\\vec{\\mathstrut c} ",
        ]
    );
    assert!(vec_many(&[]).is_empty());
}

#[test]
fn test_triangle_keeps_double_space() {
    assert_eq!(triangle("A"), "\\triangle  A");
}

#[test]
fn test_delta() {
    assert_eq!(delta("x"), "\\Delta x");
}

#[test]
fn test_not_negates_a_relation() {
    assert_eq!(not(EQUIV), "\\not \\equiv");
}

#[test]
fn test_floor_and_ceil() {
    assert_eq!(floor("x"), "\\lfloor x \\rfloor ");
    assert_eq!(ceil("x"), "\\lceil x \\rceil ");
}
