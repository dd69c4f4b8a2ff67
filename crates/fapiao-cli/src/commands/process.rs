//! Process command - extract line items from a single invoice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use fapiao_core::{extract_document, has_invoice_number, DocumentText};

use super::output::{format_records, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file: extracted page text, pages separated by form feeds
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Skip the invoice-number pre-check
    #[arg(long)]
    pub no_precheck: bool,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    info!("processing {}", args.input.display());
    let document = DocumentText::from_path(&args.input)?;
    debug!("{} pages", document.page_count());

    if !args.no_precheck && !has_invoice_number(document.pages()) {
        anyhow::bail!(
            "not an invoice: no invoice number on the first two pages of {}",
            args.input.display()
        );
    }

    let result = extract_document(&document);
    if result.is_empty() {
        anyhow::bail!(
            "zero rows: no goods table found in {}",
            args.input.display()
        );
    }

    let rendered = format_records(&result.items, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} {} rows written to {}",
            style("✓").green(),
            result.len(),
            output_path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
