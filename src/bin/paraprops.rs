//! Command-line front end for paragraph property extraction.
//!
//! # Usage
//!
//! ```sh
//! paraprops report.docx > report.xml
//! paraprops report.docx -o report.json --json
//! RUST_LOG=debug paraprops report.docx --include-table-cells --cdata ParaCleanedContent
//! ```

use clap::Parser;
use paraprops::{ExtractOptions, OutputFormat, extract_docx_properties};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Extract the effective formatting of every paragraph in a Word document
#[derive(Parser, Debug)]
#[command(name = "paraprops", version)]
struct Args {
    /// Input .docx file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file; standard output when omitted
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Emit JSON instead of XML
    #[arg(long)]
    json: bool,

    /// Do not indent JSON output
    #[arg(long, requires = "json")]
    compact: bool,

    /// Also emit the paragraphs of table cells
    #[arg(long)]
    include_table_cells: bool,

    /// Field written as a CDATA section (repeatable; defaults to ParaContent)
    #[arg(long = "cdata", value_name = "FIELD")]
    cdata: Vec<String>,
}

impl Args {
    fn options(&self) -> ExtractOptions {
        let output = if self.json {
            OutputFormat::Json {
                pretty: !self.compact,
            }
        } else {
            OutputFormat::Xml
        };
        let mut options = ExtractOptions::new()
            .with_table_cells(self.include_table_cells)
            .with_output(output);
        if !self.cdata.is_empty() {
            options = options.with_cdata_fields(self.cdata.clone());
        }
        options
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}: {}", args.input.display(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = extract_docx_properties(&args.input, &args.options())?;

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.is_empty() {
                stdout.write_all(b"\n")?;
            }
        },
    }
    Ok(())
}
