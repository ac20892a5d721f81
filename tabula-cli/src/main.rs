//! Tabula CLI
//!
//! Extracts the qualifying cells of an HTML table and writes a
//! spreadsheet-ready `ValueRange` payload as JSON.
//!
//! - tabula page.html                  # payload to stdout
//! - tabula -o out.json --pretty URL   # fetch, then write to a file

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tabula_common::load_source;
use tabula_common::warning::clear_warnings;
use tabula_html::{HTMLTokenizer, Token};
use tabula_table::marker::{DEFAULT_MARKER_ATTRIBUTE, DEFAULT_MARKER_VALUE};
use tabula_table::{
    CellMarker, ExportOptions, Exporter, Extraction, JsonExporter, MarkerMatch, Table, TableParser,
    ValueRange, export::DEFAULT_SHEET,
};

/// Tabula: pull an HTML table into a column-major spreadsheet payload
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "tabula")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Extract from a local file
    tabula ./export.html

    # Extract from a URL into a pretty-printed file
    tabula -o table.json --pretty https://wiki.example.com/page

    # Parse inline HTML into a named sheet, without the header row
    tabula --sheet Sheet1 --no-headers --html '<table>...</table>'

    # Select cells by a different attribute
    tabula --marker-attribute data-role --marker-value cell ./page.html
"#)]
struct Cli {
    /// Path to HTML file or URL to extract from
    #[arg(value_name = "FILE|URL", required_unless_present = "html", conflicts_with = "html")]
    source: Option<String>,

    /// Parse HTML string directly instead of file/URL
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Destination sheet name used in the range descriptor
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SHEET)]
    sheet: String,

    /// Leave column names out of the payload
    #[arg(long)]
    no_headers: bool,

    /// Attribute that marks a qualifying data cell
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MARKER_ATTRIBUTE)]
    marker_attribute: String,

    /// Value the marker attribute must carry
    #[arg(long, value_name = "VALUE", default_value = DEFAULT_MARKER_VALUE)]
    marker_value: String,

    /// Match the marker as literal `attr="value"` text in the raw tag
    #[arg(long)]
    raw_marker: bool,

    /// Export whatever was extracted even if the input was cut short
    #[arg(long)]
    allow_truncated: bool,

    /// Write the payload to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Indent the JSON payload
    #[arg(long)]
    pretty: bool,

    /// Dump the token stream to stderr
    #[arg(long)]
    tokens: bool,
}

impl Cli {
    fn marker(&self) -> CellMarker {
        let marker = CellMarker::new(&self.marker_attribute, &self.marker_value);
        if self.raw_marker {
            marker.with_mode(MarkerMatch::RawMarkup)
        } else {
            marker
        }
    }

    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            sheet: self.sheet.clone(),
            include_headers: !self.no_headers,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let html = load_html(&cli)?;

    let mut tokenizer = HTMLTokenizer::new(html);
    tokenizer.run();
    let parse_errors = tokenizer.parse_errors().len();
    let tokens = tokenizer.into_tokens();
    if cli.tokens {
        print_tokens(&tokens);
    }

    let extraction = TableParser::new(tokens, cli.marker()).run();
    report_extraction(&extraction, parse_errors);

    let table = accept_table(extraction, cli.allow_truncated)?;
    let payload = ValueRange::from_table(&table, &cli.export_options())
        .context("failed to compute the sheet range")?;

    if let Some(ref path) = cli.output {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut exporter = JsonExporter::new(BufWriter::new(file)).pretty(cli.pretty);
        exporter
            .export(&payload)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!(
            "{} {} to {}",
            "Wrote".green().bold(),
            payload.range,
            path.display()
        );
    } else {
        let mut exporter = JsonExporter::new(io::stdout().lock()).pretty(cli.pretty);
        exporter
            .export(&payload)
            .context("failed to write payload to stdout")?;
    }

    Ok(())
}

/// Load markup from CLI arguments
fn load_html(cli: &Cli) -> Result<String> {
    if let Some(ref html_string) = cli.html {
        Ok(html_string.clone())
    } else if let Some(ref source) = cli.source {
        load_source(source).with_context(|| format!("failed to load {source}"))
    } else {
        anyhow::bail!("a file path, URL, or --html is required")
    }
}

/// Print one token per line to stderr
fn print_tokens(tokens: &[Token]) {
    let mut stderr = io::stderr().lock();
    for (index, token) in tokens.iter().enumerate() {
        // Stop quietly once stderr is closed.
        if writeln!(stderr, "{:>5} {token}", index.dimmed()).is_err() {
            break;
        }
    }
}

/// Print a summary of the extraction to stderr
fn report_extraction(extraction: &Extraction, parse_errors: usize) {
    let table = &extraction.table;
    eprintln!(
        "{} {} columns, {} rows",
        "Extracted".cyan().bold(),
        table.column_count(),
        table.row_count()
    );
    if parse_errors > 0 {
        eprintln!("  {parse_errors} markup parse errors");
    }
    for issue in &extraction.issues {
        eprintln!("  - token {}: {}", issue.token_index, issue.message);
    }
}

/// Turn an extraction into an exportable table, honouring --allow-truncated
fn accept_table(extraction: Extraction, allow_truncated: bool) -> Result<Table> {
    if allow_truncated {
        if !extraction.is_clean() {
            eprintln!(
                "{} input was truncated; exporting the partial table",
                "Warning:".yellow().bold()
            );
        }
        extraction
            .into_partial_table()
            .context("extracted table is not rectangular")
    } else {
        extraction
            .into_table()
            .context("extraction did not produce a complete table")
    }
}
