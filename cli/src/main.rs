mod showcase;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matex")]
#[command(about = "Compositional LaTeX math markup generation.")]
#[command(
    long_about = "Matex composes LaTeX mathematics source text from small pure functions.\nThe CLI renders the showcase document built with the engine and lists the primitive symbol tokens."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the showcase document
    ///
    /// Assembles a document exercising fractions, roots, bounded sums and
    /// integrals, matrices, decorations, and spacing control, then writes
    /// the LaTeX source to stdout or to a file.
    Render {
        /// File to write the document to (stdout when omitted)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the primitive symbol tokens
    ///
    /// Shows every named token with the LaTeX text it expands to.
    Symbols,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { output } => {
            let doc = showcase::render()?;
            match output {
                Some(path) => fs::write(&path, &doc)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{doc}"),
            }
        }
        Commands::Symbols => print_symbols(),
    }

    Ok(())
}

fn print_symbols() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(Row::from(vec![
        Cell::new("Token").set_alignment(CellAlignment::Left),
        Cell::new("LaTeX").set_alignment(CellAlignment::Left),
    ]));

    for (name, token) in matex::symbols::ALL {
        table.add_row(Row::from(vec![Cell::new(name), Cell::new(token)]));
    }

    println!("{table}");
}
