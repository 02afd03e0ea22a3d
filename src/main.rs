/*!
 * Command-line interface for chettu
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use chettu::config::{Args, Config};
use chettu::document;
use chettu::error::Result;
use chettu::output;
use chettu::patterns::PatternSet;
use chettu::walker::TreeWalker;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);
    config.validate()?;

    let patterns = PatternSet::build(&config.pattern_sources())?;
    let walker = TreeWalker::new(&patterns);

    // Roots are processed one after another into a single cumulative list.
    let mut entries = Vec::new();
    for root in &config.directories {
        entries.extend(walker.walk(root)?);
    }

    let doc = document::render(&entries, |path| std::fs::read(path));
    output::deliver(&doc, &config)
}
