/*!
 * Configuration handling for chettu
 */

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::patterns::PatternSource;

/// Pattern files consulted when none are named on the command line
pub const DEFAULT_IGNORE_FILES: &[&str] = &[".gitignore", ".chettuignore"];

/// Default maximum document size copied to the clipboard, in bytes
pub const DEFAULT_MAX_CLIPBOARD_SIZE: usize = 500_000;

/// Command-line arguments for chettu
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "chettu",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serialize directory trees and file contents into a single document for LLM context",
    long_about = "Walks one or more directory trees, drops entries matching gitignore-style \
                  patterns, and renders the surviving tree plus full file contents as a single \
                  <documents> block for pasting into an LLM prompt."
)]
pub struct Args {
    /// Directories to process (repeatable)
    #[clap(short = 'd', long = "dir", value_name = "PATH")]
    pub directories: Vec<PathBuf>,

    /// Ignore patterns in gitignore syntax (repeatable)
    #[clap(short = 'i', long = "ignore", value_name = "PATTERN")]
    pub ignore_patterns: Vec<String>,

    /// Files containing ignore patterns (repeatable, default: .gitignore and
    /// .chettuignore). Pass an empty value to load no pattern files at all.
    #[clap(
        long = "ignore-file",
        value_name = "FILE",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub ignore_files: Vec<PathBuf>,

    /// Copy output to clipboard, optionally overriding the maximum size in
    /// bytes (use --clip=SIZE)
    #[clap(
        short = 'c',
        long = "clip",
        value_name = "MAX_SIZE",
        num_args = 0..=1,
        default_missing_value = "500000"
    )]
    pub clip: Option<usize>,

    /// Write the document to this file instead of standard output
    #[clap(short = 'o', long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Replace an existing output file without prompting
    #[clap(long = "force-replace-output", requires = "output_file")]
    pub force_replace_output: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,
}

/// Application configuration, built once and read-only afterwards
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directories to traverse, in order
    pub directories: Vec<PathBuf>,

    /// Pattern files to load, in order
    pub ignore_files: Vec<PathBuf>,

    /// Literal patterns appended after all pattern files
    pub ignore_patterns: Vec<String>,

    /// File sink, if requested
    pub output_file: Option<PathBuf>,

    /// Replace an existing output file without prompting
    pub force_replace_output: bool,

    /// Clipboard sink with its maximum document size, if requested
    pub clipboard_max_size: Option<usize>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let directories = if args.directories.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.directories
        };

        // No --ignore-file means the defaults; an explicit empty value
        // suppresses pattern files entirely.
        let ignore_files = if args.ignore_files.is_empty() {
            DEFAULT_IGNORE_FILES.iter().map(PathBuf::from).collect()
        } else {
            args.ignore_files
                .into_iter()
                .filter(|f| !f.as_os_str().is_empty())
                .collect()
        };

        Self {
            directories,
            ignore_files,
            ignore_patterns: args.ignore_patterns,
            output_file: args.output_file,
            force_replace_output: args.force_replace_output,
            clipboard_max_size: args.clip,
        }
    }

    /// Validate the configuration before any traversal starts
    pub fn validate(&self) -> Result<()> {
        for dir in &self.directories {
            ensure!(
                dir.is_dir(),
                Config,
                "target directory not found: {}",
                dir.display()
            );
        }

        if let Some(parent) = self.output_file.as_deref().and_then(|f| f.parent()) {
            ensure!(
                parent.as_os_str().is_empty() || parent.exists(),
                Config,
                "output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }

    /// The ordered pattern sources: every pattern file first, then every
    /// literal pattern.
    pub fn pattern_sources(&self) -> Vec<PatternSource> {
        self.ignore_files
            .iter()
            .cloned()
            .map(PatternSource::File)
            .chain(
                self.ignore_patterns
                    .iter()
                    .cloned()
                    .map(PatternSource::Literal),
            )
            .collect()
    }
}
