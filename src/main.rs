use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use tf_idf_corpus::{
    pipeline::{self, StageReport},
    Config, Tokenizer,
};

/// Corpus TF-IDF vectors, year-over-year similarity and document lengths.
#[derive(Parser)]
#[command(name = "tf-idf-corpus", version, about)]
struct Cli {
    /// File naming regex with `entity` and `year` groups
    #[arg(long, global = true)]
    name_pattern: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PDF files into plain text
    Extract {
        #[arg(long)]
        pdf_dir: Option<PathBuf>,
        #[arg(long)]
        text_dir: Option<PathBuf>,
    },

    /// Write term, document and TF-IDF frequency files
    Frequency {
        #[arg(long)]
        input_dir: Option<PathBuf>,
        #[arg(long)]
        freq_dir: Option<PathBuf>,
        #[arg(long)]
        tfidf_dir: Option<PathBuf>,
    },

    /// Cosine similarity of consecutive-year documents
    Similarity {
        #[arg(long)]
        tfidf_dir: Option<PathBuf>,
        #[arg(long)]
        result_dir: Option<PathBuf>,
    },

    /// Sum of TF-IDF weights per document
    Lengths {
        /// Directory of vector files (default: the TF-IDF directory)
        #[arg(long)]
        vector_dir: Option<PathBuf>,
        #[arg(long)]
        result_dir: Option<PathBuf>,
    },

    /// frequency, similarity and lengths in sequence
    Run,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tf_idf_corpus=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load();
    if cli.name_pattern.is_some() {
        config.name_pattern = cli.name_pattern;
    }
    let scheme = config.naming_scheme().context("Invalid file naming pattern")?;
    let tokenizer = Tokenizer::new();

    match cli.command {
        Commands::Extract { pdf_dir, text_dir } => {
            let pdf_dir = pdf_dir.unwrap_or(config.pdf_dir);
            let text_dir = text_dir.unwrap_or(config.text_dir);
            extract(&pdf_dir, &text_dir)?;
        }
        Commands::Frequency { input_dir, freq_dir, tfidf_dir } => {
            let input_dir = input_dir.unwrap_or(config.text_dir);
            let freq_dir = freq_dir.unwrap_or(config.freq_dir);
            let tfidf_dir = tfidf_dir.unwrap_or(config.tfidf_dir);
            let out = pipeline::run_frequency(&tokenizer, &input_dir, &freq_dir, &tfidf_dir)
                .context("Frequency pass failed")?;
            summarize(&out.report);
        }
        Commands::Similarity { tfidf_dir, result_dir } => {
            let tfidf_dir = tfidf_dir.unwrap_or(config.tfidf_dir);
            let result_dir = result_dir.unwrap_or(config.result_dir);
            let out = pipeline::run_similarity(&scheme, &tfidf_dir, &result_dir)
                .context("Similarity scoring failed")?;
            summarize(&out.report);
        }
        Commands::Lengths { vector_dir, result_dir } => {
            let vector_dir = vector_dir.unwrap_or(config.tfidf_dir);
            let result_dir = result_dir.unwrap_or(config.result_dir);
            let out = pipeline::run_lengths(&scheme, &vector_dir, &result_dir)
                .context("Length computation failed")?;
            summarize(&out.report);
        }
        Commands::Run => {
            let out = pipeline::run_frequency(&tokenizer, &config.text_dir, &config.freq_dir, &config.tfidf_dir)
                .context("Frequency pass failed")?;
            summarize(&out.report);
            let out = pipeline::run_similarity(&scheme, &config.tfidf_dir, &config.result_dir)
                .context("Similarity scoring failed")?;
            summarize(&out.report);
            let out = pipeline::run_lengths(&scheme, &config.tfidf_dir, &config.result_dir)
                .context("Length computation failed")?;
            summarize(&out.report);
        }
    }

    Ok(())
}

#[cfg(feature = "pdf")]
fn extract(pdf_dir: &std::path::Path, text_dir: &std::path::Path) -> Result<()> {
    let report = pipeline::run_extract(&pipeline::extract::PdfExtractor, pdf_dir, text_dir)
        .context("PDF extraction failed")?;
    summarize(&report);
    Ok(())
}

#[cfg(not(feature = "pdf"))]
fn extract(_pdf_dir: &std::path::Path, _text_dir: &std::path::Path) -> Result<()> {
    anyhow::bail!("Built without the `pdf` feature; rebuild with `--features pdf` to extract PDFs")
}

fn summarize(report: &StageReport) {
    if report.is_clean() {
        info!(stage = report.stage, processed = report.processed, "stage finished");
    } else {
        warn!(
            stage = report.stage,
            processed = report.processed,
            failed = report.failures.len(),
            "stage finished with skipped items"
        );
    }
}
