/*!
 * Directory traversal with ignore-pattern pruning
 */

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::patterns::PatternSet;

/// One filesystem node surviving the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Manifest path: the root's base name joined with the root-relative
    /// path, `/`-separated. Bare relative path for roots like `.` that
    /// carry no base name.
    pub path: String,
    /// On-disk path used for content reading
    pub abs_path: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Walks directory trees, consulting a [`PatternSet`] per entry.
pub struct TreeWalker<'a> {
    patterns: &'a PatternSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Walk `root` depth-first and return the surviving entries in visit
    /// order, parents before children, children in sorted name order.
    ///
    /// Every entry except the root itself is tested against the pattern
    /// set with its root-relative path. A matched directory is pruned:
    /// none of its descendants are visited, so no nested negation can
    /// re-include them. A matched file is skipped. The root is never
    /// tested and never emitted.
    ///
    /// An unreadable root is fatal; any other unreadable entry prints a
    /// warning and the walk continues with its siblings.
    pub fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>> {
        let abs_root = fs::canonicalize(root)
            .map_err(|err| crate::error!(Walk, "cannot open root {}: {}", root.display(), err))?;
        let prefix = root.file_name().map(|n| n.to_string_lossy().into_owned());

        let walker = WalkDir::new(&abs_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || {
                    let rel = entry
                        .path()
                        .strip_prefix(&abs_root)
                        .unwrap_or_else(|_| entry.path());
                    !self.patterns.matches(rel, entry.file_type().is_dir())
                }
            });

        let mut entries = Vec::new();
        for item in walker {
            match item {
                Ok(entry) => {
                    let rel = entry
                        .path()
                        .strip_prefix(&abs_root)
                        .unwrap_or_else(|_| entry.path())
                        .to_string_lossy()
                        .into_owned();
                    let path = match &prefix {
                        Some(name) => format!("{}/{}", name, rel),
                        None => rel,
                    };
                    let is_dir = entry.file_type().is_dir();
                    entries.push(TreeEntry {
                        path,
                        abs_path: entry.into_path(),
                        is_dir,
                    });
                }
                Err(err) if err.depth() == 0 => {
                    crate::bail!(Walk, "cannot walk {}: {}", root.display(), err)
                }
                Err(err) => {
                    let location = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    eprintln!("Warning: skipping {}: {}", location, err);
                }
            }
        }

        Ok(entries)
    }
}
