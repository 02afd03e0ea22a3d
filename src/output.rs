/*!
 * Output sinks: standard output, file, clipboard
 *
 * Sinks are independent: each failure is reported on its own, and the run
 * only counts as failed when every requested sink failed.
 */

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::clipboard;
use crate::config::Config;
use crate::ensure;
use crate::error::Result;

/// Deliver the rendered document to every requested sink.
///
/// With no file or clipboard sink requested, the document goes to
/// standard output.
pub fn deliver(document: &str, config: &Config) -> Result<()> {
    let mut attempted = 0;
    let mut failed = 0;

    if let Some(path) = &config.output_file {
        attempted += 1;
        if let Err(err) = write_file(document, path, config.force_replace_output) {
            eprintln!("Error: {}", err);
            failed += 1;
        }
    }

    if let Some(max_size) = config.clipboard_max_size {
        attempted += 1;
        if let Err(err) = copy_to_clipboard(document, max_size) {
            eprintln!("Error: {}", err);
            failed += 1;
        }
    }

    if attempted == 0 {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
    }

    ensure!(
        attempted == 0 || failed < attempted,
        Output,
        "all requested output sinks failed"
    );
    Ok(())
}

/// Write the document to `path`, prompting before replacing an existing
/// file unless `force` is set. Declining the prompt cancels the sink
/// without failing it.
pub fn write_file(document: &str, path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() && !confirm_replace(path)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    fs::write(path, document)?;
    println!("Output written to {}", path.display());
    Ok(())
}

/// Copy the document to the system clipboard, refusing without touching
/// the clipboard when it exceeds `max_size` bytes.
pub fn copy_to_clipboard(document: &str, max_size: usize) -> Result<()> {
    ensure!(
        document.len() <= max_size,
        Output,
        "output size ({}) exceeds the maximum clipboard size ({})",
        document.len(),
        max_size
    );

    clipboard::copy(document)?;
    println!(
        "Output ({} characters) has been copied to clipboard.",
        document.len()
    );
    Ok(())
}

fn confirm_replace(path: &Path) -> Result<bool> {
    print!("File {} already exists. Replace? (y/N): ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
