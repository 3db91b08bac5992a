//! Command-line interface for texsheet.
//!
//! Walks the snippet tree (`code` by default) and writes the LaTeX cheat
//! sheet to the single required output path.

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::process::exit;
use texsheet::{ListingPolicy, TexsheetBuilder, TexsheetOptions, generate_to_file};

/// texsheet — typeset a tree of code snippets into one LaTeX document
#[derive(Parser)]
#[command(name = "texsheet", version, about, long_about = None)]
struct Cli {
    /// Path of the .tex file to write
    output: PathBuf,

    /// Directory holding the snippets
    #[arg(long)]
    root: Option<PathBuf>,

    /// JSON file overriding the default tables and preamble
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only list C++, Java and Python files (Markdown keeps its section heading)
    #[arg(long)]
    code_only: bool,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> Result<(TexsheetOptions, PathBuf, u8), texsheet::TexsheetError> {
        let base = match &self.config {
            Some(path) => TexsheetOptions::from_json_file(path)?,
            None => TexsheetOptions::default(),
        };
        let mut builder = TexsheetBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if self.code_only {
            builder = builder.listing_policy(ListingPolicy::CodeOnly);
        }
        if !self.ignore_patterns.is_empty() {
            builder = builder.ignore_patterns(self.ignore_patterns);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        if self.no_hidden {
            builder = builder.include_hidden(false);
        }
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        Ok((builder.build(), self.output, self.verbose))
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            exit(1);
        }
    };
    let (options, output, verbose) = match cli.into_options() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    #[cfg(feature = "logging")]
    init_tracing(verbose);
    #[cfg(not(feature = "logging"))]
    let _ = verbose;

    run(&options, &output);
}

fn run(options: &TexsheetOptions, output: &Path) {
    if let Err(e) = generate_to_file(options, output) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

#[cfg(feature = "logging")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "texsheet=info",
        1 => "texsheet=debug",
        _ => "texsheet=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
