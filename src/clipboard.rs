/*!
 * System clipboard support
 *
 * Copies text to the clipboard by piping it through whichever clipboard
 * command is available on the running system, preferring tmux inside a
 * tmux session.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard command is available on this system
    #[error("no clipboard command available")]
    NoBackend,

    /// The backend command failed
    #[error("{command}: {message}")]
    Backend {
        command: &'static str,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Clipboard backends, tried in candidate order.
#[derive(Debug, Clone, Copy)]
enum Backend {
    Tmux,
    Wayland,
    Xsel,
    Xclip,
    MacOs,
    Windows,
    Termux,
}

impl Backend {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Windows => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    fn available(self) -> bool {
        match self {
            // Only useful from inside a tmux session
            Self::Tmux => env::var("TMUX").is_ok() && command_exists("tmux"),
            other => command_exists(other.command().0),
        }
    }
}

/// Backends worth probing on the current platform, in preference order.
fn candidates() -> &'static [Backend] {
    if cfg!(target_os = "macos") {
        &[Backend::Tmux, Backend::MacOs]
    } else if cfg!(target_os = "windows") {
        &[Backend::Windows]
    } else if cfg!(target_os = "android") {
        &[Backend::Termux]
    } else {
        // clip.exe last: present under WSL only
        &[
            Backend::Tmux,
            Backend::Wayland,
            Backend::Xsel,
            Backend::Xclip,
            Backend::Windows,
        ]
    }
}

/// Copy text to the system clipboard using the first available backend.
pub fn copy(text: &str) -> Result<()> {
    let backend = candidates()
        .iter()
        .copied()
        .find(|b| b.available())
        .ok_or(ClipboardError::NoBackend)?;

    let (cmd, args) = backend.command();
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|err| ClipboardError::Backend {
            command: cmd,
            message: format!("failed to spawn: {}", err),
        })?;

    child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::Backend {
            command: cmd,
            message: "failed to open stdin".to_string(),
        })?
        .write_all(text.as_bytes())
        .map_err(|err| ClipboardError::Backend {
            command: cmd,
            message: format!("failed to write: {}", err),
        })?;

    let status = child.wait().map_err(|err| ClipboardError::Backend {
        command: cmd,
        message: format!("failed to wait: {}", err),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Backend {
            command: cmd,
            message: format!("exited with status {}", status),
        })
    }
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for path in paths.split(':') {
            if Path::new(path).join(command).exists() {
                return true;
            }
        }
    }

    // Fallback for shells with unusual PATH handling
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(command_exists("echo"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }

    #[test]
    fn test_candidates_not_empty() {
        assert!(!candidates().is_empty());
    }

    #[test]
    #[ignore] // Requires a running tmux session
    fn test_tmux_copy() {
        if env::var("TMUX").is_err() || !command_exists("tmux") {
            return;
        }

        copy("chettu clipboard test").expect("copy failed");

        let output = Command::new("tmux")
            .args(["show-buffer"])
            .output()
            .expect("tmux show-buffer failed");
        let content = String::from_utf8_lossy(&output.stdout);
        assert_eq!(content.trim_end(), "chettu clipboard test");
    }
}
