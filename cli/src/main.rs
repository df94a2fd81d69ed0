//! restitch CLI - table stitching and context extraction for layout output

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use restitch::{ContextExtractor, ExtractOptions, LayoutResult, StitchOptions, TableStitcher};

#[derive(Parser)]
#[command(name = "restitch")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Stitch cross-page tables and extract keyword contexts", long_about = None)]
struct Cli {
    /// Input layout-analysis JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge cross-page table fragments in a layout result
    Stitch {
        /// Input layout-analysis JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the merge report as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Maximum characters allowed between vertical fragments
        #[arg(long, default_value = "2")]
        max_gap: usize,
    },

    /// Extract keyword context windows from markdown content
    #[command(alias = "ctx")]
    Context {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Keywords to search for (literal, case-insensitive, whole-word)
        #[arg(short, long, value_name = "WORD", required = true, num_args = 1..)]
        keyword: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Words of context before each hit
        #[arg(long, default_value = "100")]
        pre_words: usize,

        /// Words of context after each hit
        #[arg(long, default_value = "200")]
        post_words: usize,
    },

    /// Split markdown content into per-page files
    Pages {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Stitch {
            input,
            output,
            report,
            max_gap,
        }) => cmd_stitch(&input, output.as_deref(), report.as_deref(), max_gap),
        Some(Commands::Context {
            input,
            keyword,
            output,
            pre_words,
            post_words,
        }) => cmd_context(&input, &keyword, output.as_deref(), pre_words, post_words),
        Some(Commands::Pages { input, output }) => cmd_pages(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: stitch if input is provided
            if let Some(input) = cli.input {
                cmd_stitch(&input, cli.output.as_deref(), None, 2)
            } else {
                println!("{}", "Usage: restitch <FILE> [OUTPUT]".yellow());
                println!("       restitch --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_stitch(
    input: &Path,
    output: Option<&Path>,
    report_path: Option<&Path>,
    max_gap: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let layout = LayoutResult::from_json(&json)?;

    let stitcher =
        TableStitcher::with_options(StitchOptions::new().with_max_vertical_gap(max_gap));
    let report = stitcher.stitch_with_report(&layout);

    write_output(output, &report.content)?;

    if let Some(path) = report_path {
        fs::write(path, serde_json::to_string_pretty(&report.groups)?)?;
    }

    if report.changed() {
        eprintln!(
            "{} merged {} table group(s), skipped {}",
            "Stitched:".green().bold(),
            report.groups.len(),
            report.skipped.len()
        );
    } else {
        eprintln!("{} no adjacent table fragments found", "Unchanged:".yellow());
    }
    Ok(())
}

fn cmd_context(
    input: &Path,
    keywords: &[String],
    output: Option<&Path>,
    pre_words: usize,
    post_words: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;

    let options = ExtractOptions::new()
        .with_pre_words(pre_words)
        .with_post_words(post_words);
    let contexts = ContextExtractor::with_options(keywords, options).extract(&content);

    eprintln!(
        "{} {} context(s) for {} keyword(s)",
        "Extracted:".green().bold(),
        contexts.len(),
        keywords.len()
    );
    write_output(output, &contexts.join("\n\n---\n\n"))?;
    Ok(())
}

fn cmd_pages(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let pages = restitch::split_into_pages(&content);

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_pages", stem))
    });
    fs::create_dir_all(&output_dir)?;

    for (number, text) in &pages {
        fs::write(output_dir.join(format!("page_{number:04}.md")), text)?;
    }

    println!(
        "{} wrote {} page(s) to {}",
        "Split:".green().bold(),
        pages.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_version() {
    println!("restitch {}", env!("CARGO_PKG_VERSION"));
}

fn write_output(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
