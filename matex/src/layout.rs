//! Structural wrappers: embed expression text into a rendering context.
//!
//! Expressions must sit inside either an inline or a display block before
//! the surrounding document renders.

/// Inline math context
pub fn inline(expr: &str) -> String {
    format!("\\begin{{math}} {}\\end{{math}}", expr)
}

/// Display math context; expressions are stacked one per line
pub fn display(exprs: &[&str]) -> String {
    format!("\\begin{{displaymath}}\n{}\n\\end{{displaymath}} ", exprs.join("\n"))
}

/// Numbered equation context
pub fn ordered(exprs: &[&str]) -> String {
    format!("\\begin{{equation}} {}\n\\end{{equation}} ", exprs.join("\n"))
}

/// Verbatim text
pub fn verb(text: &str) -> String {
    format!("\\verb+{}+", text)
}

/// Parenthetical grouping with sized delimiters
pub fn wrap(expr: &str) -> String {
    format!("\\left( {} \\right)", expr)
}

/// Parenthesized array with the fixed `rrcr` column layout
pub fn matrix(rows: &[Vec<String>]) -> String {
    let body = rows
        .iter()
        .map(|row| row.join("&"))
        .collect::<Vec<_>>()
        .join("\\\\\n");
    format!(
        "\\left( \\begin{{array}}{{rrcr}}\n{}\n\\end{{array}} \\right)",
        body
    )
}
