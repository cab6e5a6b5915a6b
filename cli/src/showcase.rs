//! The showcase document: one block per notational construct the engine
//! supports, assembled into a complete LaTeX source file.

use matex::symbols::{CDOTS, DDOTS, EQUIV, INF, INT, SPACE_L, VDOTS};
use matex::{Bound, MatexResult};

/// Render the full showcase document
pub fn render() -> MatexResult<String> {
    let blocks = vec![
        integral_as_limit()?,
        fraction_showcase(),
        root_showcase()?,
        integral_showcase()?,
        matrix_showcase(),
        strut_comparison(),
        negation_showcase(),
        spacing_showcase()?,
        sum_identity()?,
    ];
    let refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
    Ok(matex::document(&refs))
}

fn integral_as_limit() -> MatexResult<String> {
    let term = format!("f(x{}){}", matex::low("i"), matex::delta("x"));
    let riemann = matex::sigma("i", &Bound::range(1, "n-1"), &term)?;
    let as_limit = matex::limit("n", INF, &riemann);
    let as_integral = matex::integral("x", &Bound::range("a", "b"), "f(x)")?;
    let identity = matex::equal(&[as_integral.as_str(), as_limit.as_str()]);
    Ok(format!(
        "The integral of {} from {} to {} can be read as a limit of Riemann sums:\n{}",
        matex::inline("f(x)"),
        matex::inline("x = a"),
        matex::inline("x = b"),
        matex::display(&[identity.as_str()])
    ))
}

fn fraction_showcase() -> String {
    let identity = matex::equal(&["y", matex::frac("1", "x + 1").as_str()]);
    format!(
        "Fractions use the {} command. Inline math renders them as {}, while display math gives\n{}",
        matex::verb("\\frac"),
        matex::inline(&identity),
        matex::display(&[identity.as_str()])
    )
}

fn root_showcase() -> MatexResult<String> {
    let dx = matex::square(&matex::frac("dx", "dt"));
    let dy = matex::square(&matex::frac("dy", "dt"));
    let arc = matex::sqrt(&matex::sum(&[dx.as_str(), dy.as_str()]));
    let arc_integral = matex::integral("t", &Bound::range("a", "b"), &arc)?;
    let cubic = matex::equal(&[matex::root("27", "3").as_str(), "3"]);
    Ok(format!(
        "Roots use the {} command: inline {} versus display\n{}\nWith an index argument the same command gives {}.",
        matex::verb("\\sqrt"),
        matex::inline(&arc_integral),
        matex::display(&[arc_integral.as_str()]),
        matex::inline(&cubic)
    ))
}

fn integral_showcase() -> MatexResult<String> {
    let bounded = matex::integral("x", &Bound::range("a", "b"), "f(x)")?;
    Ok(format!(
        "Integral signs use the {} command: inline {} versus display\n{}",
        matex::verb("\\int"),
        matex::inline(&bounded),
        matex::display(&[bounded.as_str()])
    ))
}

fn matrix_showcase() -> String {
    let rows = vec![
        vec![
            "1".to_string(),
            "2".to_string(),
            CDOTS.to_string(),
            "n".to_string(),
        ],
        vec![
            "2".to_string(),
            "4".to_string(),
            CDOTS.to_string(),
            "2n".to_string(),
        ],
        vec![
            VDOTS.to_string(),
            VDOTS.to_string(),
            DDOTS.to_string(),
            VDOTS.to_string(),
        ],
        vec![
            "m".to_string(),
            matex::times("m", "2"),
            CDOTS.to_string(),
            matex::times("m", "n"),
        ],
    ];
    matex::display(&[matex::matrix(&rows).as_str()])
}

fn strut_comparison() -> String {
    let letters = ["a", "b", "c", "d", "e", "f"];
    let plain: Vec<String> = letters.iter().map(|l| matex::vec_single(l)).collect();
    let plain_refs: Vec<&str> = plain.iter().map(String::as_str).collect();
    let strutted = matex::vec_many(&letters);
    let strutted_refs: Vec<&str> = strutted.iter().map(String::as_str).collect();
    let gap = SPACE_L.repeat(6);
    format!(
        "Plain arrows on the left, {} arrows on the right:\n{}",
        matex::verb("\\mathstrut"),
        matex::display(&[
            matex::sum(&plain_refs).as_str(),
            gap.as_str(),
            matex::sum(&strutted_refs).as_str(),
        ])
    )
}

fn negation_showcase() -> String {
    format!(
        "A relation is negated by putting {} directly before its symbol:\n{}",
        matex::verb("\\not"),
        matex::display(&[
            matex::triangle("A").as_str(),
            matex::not(EQUIV).as_str(),
            matex::triangle("B").as_str(),
        ])
    )
}

fn spacing_showcase() -> MatexResult<String> {
    let manual = format!(
        "{}{}dy",
        INT,
        matex::integral("x", &Bound::range("G", ""), "f(x, y)")?
    );
    let spaced = matex::area_integral(&["x", "y"], "G", "f(x, y)");
    Ok(format!(
        "Negative spacing pulls repeated integral signs together:\n{}\n{}",
        matex::display(&[manual.as_str()]),
        matex::display(&[spaced.as_str()])
    ))
}

fn sum_identity() -> MatexResult<String> {
    let identity = matex::equal(&[
        matex::sigma("k", &Bound::range(1, "n"), "k")?.as_str(),
        matex::frac("n(n + 1)", "2").as_str(),
    ]);
    Ok(matex::display(&[identity.as_str()]))
}
