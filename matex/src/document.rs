//! Document assembler: the fixed preamble/footer shell around top-level
//! blocks.

/// Assemble a full document from rendered top-level blocks
///
/// Blocks are joined with blank lines and interpolated into the fixed
/// template. Block content is not validated; zero blocks yield the shell
/// with an empty body region.
pub fn document(blocks: &[&str]) -> String {
    format!(
        "\n      \\documentclass{{article}}\n      \\usepackage[utf8]{{inputenc}}\n      \\title{{Sample Project}}\n      \\author{{Matex}}\n      \\date{{April 2021}}\n      \\begin{{document}}\n      {}\n      \\end{{document}}\n",
        blocks.join("\n\n")
    )
}
