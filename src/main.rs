//! Command-line front end: reads a bibliography, writes the HTML reference
//! list, and optionally runs the citation-rewrite pass over a paired HTML
//! document. All of the actual work lives in the library.

use bibhtml::{BibtexParser, HtmlRenderer, cite, fields};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// BibTeX-style bibliography to HTML converter.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input bibliography file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output HTML file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML document whose ${identifier} citations should be rewritten
    #[arg(long, requires = "html_output")]
    html_input: Option<PathBuf>,

    /// Where to write the rewritten HTML document
    #[arg(long, requires = "html_input")]
    html_output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> bibhtml::Result<()> {
    let bib_text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut entries = BibtexParser::new().parse(&bib_text);
    fields::normalize_entries(&mut entries);
    let html = HtmlRenderer::new().render(&entries)?;

    match &cli.output {
        Some(path) => fs::write(path, &html)?,
        None => io::stdout().write_all(html.as_bytes())?,
    }

    // Optional citation-rewrite pass; clap enforces the pairing.
    if let (Some(html_input), Some(html_output)) = (&cli.html_input, &cli.html_output) {
        let document = fs::read_to_string(html_input)?;
        let rewritten = cite::rewrite_citations(&document, &entries);
        fs::write(html_output, rewritten)?;
    }

    Ok(())
}
