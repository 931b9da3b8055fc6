//! Command-line interface.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::parse_pages;
use crate::error::{Result, SearchError};
use crate::numbers::{TranslateOptions, Translator, UnknownWordPolicy, UnmatchedSentencePolicy};
use crate::report::{render_report, save_report, ReportFormat};
use crate::search::{list_documents, search_document};
use crate::types::DocumentReport;

/// Find numbers written out in words and rewrite them as numerals.
#[derive(Parser)]
#[command(name = "number-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate text given on the command line or on stdin.
    Text {
        /// Text to translate (default: read stdin)
        text: Option<String>,

        #[command(flatten)]
        translate: TranslateArgs,
    },

    /// Search a single PDF or text document.
    File {
        /// Document to search
        path: PathBuf,

        /// Zero-based page indices, e.g. 0,2,4-6 (default: all pages)
        #[arg(short, long)]
        pages: Option<String>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        translate: TranslateArgs,
    },

    /// Search every PDF and text document in a directory.
    Dir {
        /// Directory to search (not recursive)
        dir: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        translate: TranslateArgs,
    },
}

/// Options controlling how sentences are translated.
#[derive(Args, Debug, Clone, Copy)]
pub struct TranslateArgs {
    /// What to do with a number span containing an unknown word
    #[arg(long, value_enum, default_value_t = UnknownWordPolicy::Abort)]
    pub on_unknown: UnknownWordPolicy,

    /// Also print sentences without numbers, unchanged
    #[arg(long)]
    pub keep_unmatched: bool,
}

impl TranslateArgs {
    fn options(self) -> TranslateOptions {
        TranslateOptions {
            unknown_word: self.on_unknown,
            unmatched: if self.keep_unmatched {
                UnmatchedSentencePolicy::PassThrough
            } else {
                UnmatchedSentencePolicy::Drop
            },
        }
    }
}

/// Options controlling where reports go.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory to save reports in (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Text { text, translate } => text_command(text, translate),
        Commands::File {
            path,
            pages,
            output,
            translate,
        } => file_command(&path, pages.as_deref(), &output, translate),
        Commands::Dir {
            dir,
            output,
            translate,
        } => dir_command(&dir, &output, translate),
    }
}

/// Execute the text command.
fn text_command(text: Option<String>, args: TranslateArgs) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let translator = Translator::default().with_options(args.options());
    for sentence in translator.translate(&text)? {
        println!("{sentence}");
    }
    Ok(())
}

/// Execute the file command.
fn file_command(
    path: &Path,
    pages: Option<&str>,
    output: &OutputArgs,
    args: TranslateArgs,
) -> Result<()> {
    // Validate inputs before reading the document
    let pages = pages.map(parse_pages).transpose()?;
    validate_output_dir(output.output.as_deref())?;

    let translator = Translator::default().with_options(args.options());
    let report = search_document(path, pages.as_ref(), &translator)?;

    emit_report(&report, output)?;
    print_warnings(&report);
    Ok(())
}

/// Execute the dir command.
fn dir_command(dir: &Path, output: &OutputArgs, args: TranslateArgs) -> Result<()> {
    validate_output_dir(output.output.as_deref())?;

    let documents = list_documents(dir)?;
    if documents.is_empty() {
        eprintln!(
            "{} no PDF or text documents in {}",
            style("Nothing to do:").yellow().bold(),
            dir.display()
        );
        return Ok(());
    }

    let translator = Translator::default().with_options(args.options());

    let pb = ProgressBar::new(documents.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut failures: Vec<(PathBuf, SearchError)> = Vec::new();
    let mut sentence_total = 0;

    for path in &documents {
        pb.set_message(display_name(path));

        match search_document(path, None, &translator) {
            Ok(report) => {
                sentence_total += report.sentence_count();
                pb.suspend(|| {
                    if let Err(e) = emit_report(&report, output) {
                        failures.push((path.clone(), e));
                    }
                    print_warnings(&report);
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to search document");
                failures.push((path.clone(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    eprintln!(
        "{} {} documents, {} sentences with numbers",
        style("Searched").green().bold(),
        documents.len(),
        sentence_total
    );

    if failures.is_empty() {
        return Ok(());
    }

    for (path, e) in &failures {
        eprintln!("  {} {}: {e}", style("failed").red(), path.display());
    }
    Err(SearchError::BatchFailed {
        failed: failures.len(),
        total: documents.len(),
    })
}

/// Print a report, or save it when an output directory is set.
fn emit_report(report: &DocumentReport, output: &OutputArgs) -> Result<()> {
    match output.output.as_deref() {
        Some(dir) => {
            let path = save_report(report, output.format, dir)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render_report(report, output.format)?),
    }
    Ok(())
}

fn print_warnings(report: &DocumentReport) {
    if report.warnings.is_empty() {
        return;
    }
    eprintln!(
        "{} {} in {}",
        style("Warnings:").yellow().bold(),
        report.warnings.len(),
        report.source.display()
    );
    for warning in &report.warnings {
        eprintln!("  {warning}");
    }
}

/// Output directories are created on demand, but must not be existing files.
fn validate_output_dir(output: Option<&Path>) -> Result<()> {
    if let Some(dir) = output {
        if dir.exists() && !dir.is_dir() {
            return Err(SearchError::InvalidInput(format!(
                "Output path is not a directory: {}",
                dir.display()
            )));
        }
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
