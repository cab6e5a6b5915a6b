//! Primitive tokens: named constants for spacing units, symbols, and
//! operators.
//!
//! Most tokens carry a trailing space so they can be interpolated directly
//! between other fragments; the exceptions (`EQUIV`, `LDOTS` and friends,
//! `INT`) are noted inline.

// Spacing
pub const SPACE_L: &str = "\\; ";
pub const SPACE_M: &str = "\\: ";
pub const SPACE_S: &str = "\\, ";
pub const SPACE_NEG: &str = "\\! ";
pub const SPACE_NEG_L: &str = "\\!\\!\\! ";

pub const INF: &str = "\\infty ";

// Ellipses, no trailing space
pub const LDOTS: &str = "\\ldots";
pub const VDOTS: &str = "\\vdots";
pub const CDOTS: &str = "\\cdots";
pub const DDOTS: &str = "\\ddots";

// Relations
pub const EQ: &str = "= ";
pub const NEQ: &str = "\\neq ";
/// Triple bar, no trailing space
pub const EQUIV: &str = "\\equiv";
pub const LT: &str = "< ";
pub const LTE: &str = "\\leq ";
pub const GT: &str = "> ";
pub const GTE: &str = "\\geq ";
pub const LL: &str = "\\ll ";
pub const GG: &str = "\\gg ";

// Binary operators
pub const AST: &str = "\\ast ";
pub const STAR: &str = "\\star ";
pub const SETMINUS: &str = "\\setminus ";
pub const WR: &str = "\\wr ";

// Set and logic symbols
pub const CAP: &str = "\\cap ";
pub const CUP: &str = "\\cup ";
pub const AND: &str = "\\wedge ";
pub const OR: &str = "\\vee ";
pub const SUBSET: &str = "\\subset ";
pub const SUBSETEQ: &str = "\\subseteq ";
pub const SUPSET: &str = "\\supset ";
pub const SUPSETEQ: &str = "\\supseteq ";
pub const EMPTYSET: &str = "\\emptyset ";
pub const IN: &str = "\\in ";
pub const CONTAINS: &str = "\\ni ";
pub const LAMBDA: &str = "\\lambda ";

/// Bare integral sign, no trailing space. For bounded integrals prefer
/// [`integral`](crate::integral) and [`area_integral`](crate::area_integral).
pub const INT: &str = "\\int";

/// Every token with its name, in table order
pub const ALL: &[(&str, &str)] = &[
    ("SPACE_L", SPACE_L),
    ("SPACE_M", SPACE_M),
    ("SPACE_S", SPACE_S),
    ("SPACE_NEG", SPACE_NEG),
    ("SPACE_NEG_L", SPACE_NEG_L),
    ("INF", INF),
    ("LDOTS", LDOTS),
    ("VDOTS", VDOTS),
    ("CDOTS", CDOTS),
    ("DDOTS", DDOTS),
    ("EQ", EQ),
    ("NEQ", NEQ),
    ("EQUIV", EQUIV),
    ("LT", LT),
    ("LTE", LTE),
    ("GT", GT),
    ("GTE", GTE),
    ("LL", LL),
    ("GG", GG),
    ("AST", AST),
    ("STAR", STAR),
    ("SETMINUS", SETMINUS),
    ("WR", WR),
    ("CAP", CAP),
    ("CUP", CUP),
    ("AND", AND),
    ("OR", OR),
    ("SUBSET", SUBSET),
    ("SUBSETEQ", SUBSETEQ),
    ("SUPSET", SUPSET),
    ("SUPSETEQ", SUPSETEQ),
    ("EMPTYSET", EMPTYSET),
    ("IN", IN),
    ("CONTAINS", CONTAINS),
    ("LAMBDA", LAMBDA),
    ("INT", INT),
];
