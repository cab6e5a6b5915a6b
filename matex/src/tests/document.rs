use crate::document::document;
use crate::layout::{display, inline};

#[test]
fn test_empty_document_is_a_well_formed_shell() {
    let shell = document(&[]);
    assert!(shell.starts_with("\n      \\documentclass{article}"));
    assert!(shell.contains("\\usepackage[utf8]{inputenc}"));
    assert!(shell.contains("\\begin{document}\n      \n      \\end{document}"));
    assert!(shell.ends_with("\\end{document}\n"));
}

#[test]
fn test_blocks_are_joined_with_blank_lines() {
    let first = inline("x = a");
    let second = display(&["y = b"]);
    let doc = document(&[first.as_str(), second.as_str()]);
    assert!(doc.contains(&format!("{}\n\n{}", first, second)));
}

#[test]
fn test_document_preserves_block_order() {
    let doc = document(&["first", "second", "third"]);
    let first = doc.find("first").unwrap();
    let second = doc.find("second").unwrap();
    let third = doc.find("third").unwrap();
    assert!(first < second && second < third);
}
