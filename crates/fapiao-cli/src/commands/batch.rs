//! Batch command - export line items from a folder of invoice files.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, warn};

use fapiao_core::{extract_document, has_invoice_number, DocumentText, LineItemRecord};

use super::output::{format_records, renumber, OutputFormat};

/// How the batch result is laid out on disk.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ExportMode {
    /// All invoices merged into one table with continuous numbering
    Merge,
    /// One output file per invoice
    Separate,
}

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory or glob pattern of invoice text files
    #[arg(required = true)]
    pub input: String,

    /// Output directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Export layout
    #[arg(short, long, value_enum, default_value = "merge")]
    pub mode: ExportMode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Skip the invoice-number pre-check
    #[arg(long)]
    pub no_precheck: bool,
}

/// Outcome of one file, mirrored in the status column of the summary.
enum FileStatus {
    Extracted(usize),
    NotInvoice,
    ZeroRows,
    Failed(String),
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let files = collect_files(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("no text files matched {}", args.input);
    }

    fs::create_dir_all(&args.output_dir)?;

    let mut merged: Vec<LineItemRecord> = Vec::new();
    let mut extracted = 0usize;
    let mut failed = 0usize;

    for path in &files {
        let status = process_one(path, &args, &mut merged);
        match &status {
            FileStatus::Extracted(rows) => {
                extracted += 1;
                println!(
                    "{} {}  {} rows",
                    style("✓").green(),
                    path.display(),
                    rows
                );
            }
            FileStatus::NotInvoice => {
                failed += 1;
                println!("{} {}  not an invoice", style("✗").yellow(), path.display());
            }
            FileStatus::ZeroRows => {
                failed += 1;
                println!("{} {}  0 rows", style("✗").yellow(), path.display());
            }
            FileStatus::Failed(reason) => {
                failed += 1;
                warn!("{}: {}", path.display(), reason);
                println!("{} {}  error: {}", style("✗").red(), path.display(), reason);
            }
        }
    }

    if matches!(args.mode, ExportMode::Merge) && !merged.is_empty() {
        renumber(&mut merged);
        let filename = format!(
            "发票明细_{}.{}",
            Local::now().format("%Y%m%d_%H%M%S"),
            extension(args.format)
        );
        let path = args.output_dir.join(filename);
        fs::write(&path, format_records(&merged, args.format)?)?;
        println!(
            "{} merged export: {} rows -> {}",
            style("✓").green(),
            merged.len(),
            path.display()
        );
    }

    println!(
        "{} processed {} files: {} extracted, {} failed or skipped",
        style("ℹ").blue(),
        files.len(),
        extracted,
        failed
    );

    Ok(())
}

fn process_one(path: &PathBuf, args: &BatchArgs, merged: &mut Vec<LineItemRecord>) -> FileStatus {
    let document = match DocumentText::from_path(path) {
        Ok(document) => document,
        Err(e) => return FileStatus::Failed(e.to_string()),
    };
    debug!("{}: {} pages", path.display(), document.page_count());

    if !args.no_precheck && !has_invoice_number(document.pages()) {
        return FileStatus::NotInvoice;
    }

    let result = extract_document(&document);
    if result.is_empty() {
        return FileStatus::ZeroRows;
    }
    let rows = result.len();

    match args.mode {
        ExportMode::Merge => merged.extend(result.items),
        ExportMode::Separate => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "invoice".to_string());
            let out = args
                .output_dir
                .join(format!("{stem}.{}", extension(args.format)));
            let rendered = match format_records(&result.items, args.format) {
                Ok(rendered) => rendered,
                Err(e) => return FileStatus::Failed(e.to_string()),
            };
            if let Err(e) = fs::write(&out, rendered) {
                return FileStatus::Failed(e.to_string());
            }
        }
    }

    FileStatus::Extracted(rows)
}

/// Expand the input argument: a directory means every `.txt` inside
/// it, anything else is treated as a glob pattern.
fn collect_files(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let path = PathBuf::from(input);
    let mut files = Vec::new();

    if path.is_dir() {
        for entry in fs::read_dir(&path)? {
            let entry = entry?.path();
            if entry.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt")) {
                files.push(entry);
            }
        }
    } else {
        for entry in glob(input)? {
            files.push(entry?);
        }
    }

    files.sort();
    Ok(files)
}

fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    }
}
