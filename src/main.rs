//! CLI entry point for the `rainbow-brackets` tool.
//!
//! Parses a source file written in the demo language and prints the nesting
//! level of every structural bracket as `line:column<TAB>bracket<TAB>level`.
//! Parser recovery errors go to stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rainbow_brackets::{BracketLanguage, brackets::bracket_levels, parse};

/// Print the rainbow nesting level of every bracket in a source file
#[derive(Parser, Debug)]
#[command(name = "rainbow-brackets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to colour
    path: PathBuf,
}

/// One-based line and column of a byte offset.
fn line_col(src: &str, offset: usize) -> (usize, usize) {
    let before = src.get(..offset).unwrap_or(src);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before, |nl| before.get(nl + 1..).unwrap_or(""))
        .chars()
        .count()
        + 1;
    (line, column)
}

fn run(path: &Path) -> io::Result<()> {
    let src = std::fs::read_to_string(path)?;
    let parsed = parse(&src);
    let pairs = BracketLanguage::bracket_pairs();

    let mut out = io::stdout().lock();
    for bracket in bracket_levels(&parsed.syntax(), &pairs) {
        let start = usize::from(bracket.range.start());
        let (line, column) = line_col(&src, start);
        let text = src.get(start..usize::from(bracket.range.end())).unwrap_or("");
        writeln!(out, "{line}:{column}\t{text}\t{}", bracket.level)?;
    }

    let mut err = io::stderr().lock();
    for error in parsed.errors() {
        let (line, column) = line_col(&src, error.span().start);
        writeln!(err, "{}:{line}:{column}: {error}", path.display())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(
                io::stderr(),
                "rainbow-brackets: {}: {err}",
                cli.path.display()
            );
            ExitCode::FAILURE
        }
    }
}
