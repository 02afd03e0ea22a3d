/*!
 * chettu - Serialize directory trees into a single document for LLM context
 *
 * Walks one or more directory trees, drops entries matching gitignore-style
 * ignore patterns (pruning ignored directories without descending), and
 * renders the surviving tree plus full file contents as one `<documents>`
 * block suitable for pasting into an LLM prompt.
 */

pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod patterns;
pub mod walker;


// Re-export main components for easier access
pub use config::Config;
pub use error::{ChettuError, Result};
pub use patterns::{IgnoreRule, PatternSet, PatternSource};
pub use walker::{TreeEntry, TreeWalker};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
