/*!
 * Ignore-pattern compilation and matching
 *
 * Builds one ordered matcher out of pattern files and ad-hoc pattern
 * strings, then answers whether a relative path is excluded. Matching
 * follows the gitignore convention: later rules override earlier ones
 * and a `!` rule re-includes a previously excluded path.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// One parsed ignore-pattern line.
///
/// Blank lines and comment lines never become rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// Pattern text as written, whitespace-trimmed
    pub raw: String,
    /// `!` prefix: the rule re-includes matching paths
    pub negated: bool,
    /// Trailing `/`: the rule matches directories only
    pub dir_only: bool,
    /// Leading `/`: the rule is anchored at the traversal root
    pub anchored: bool,
    /// Non-trailing `/` in the body: the rule matches a specific path
    /// instead of a base name at any depth
    pub has_separator: bool,
}

impl IgnoreRule {
    /// Parse a single pattern line. Returns `None` for blank lines and
    /// lines whose first non-whitespace character is `#`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let body = line.strip_prefix('!').unwrap_or(line);
        let negated = body.len() != line.len();
        let dir_only = body.ends_with('/');
        let anchored = body.starts_with('/');
        let has_separator = body
            .trim_start_matches('/')
            .trim_end_matches('/')
            .contains('/');

        Some(Self {
            raw: line.to_string(),
            negated,
            dir_only,
            anchored,
            has_separator,
        })
    }
}

/// A source of ignore-pattern lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    /// A file of newline-separated patterns. Missing files are skipped;
    /// an existing file that cannot be read is a fatal error.
    File(PathBuf),
    /// A single pattern supplied directly by the caller.
    Literal(String),
}

/// An ordered set of ignore rules compiled into one matcher.
pub struct PatternSet {
    rules: Vec<IgnoreRule>,
    matcher: Gitignore,
}

impl PatternSet {
    /// Compile all sources, in order, into one pattern set.
    pub fn build(sources: &[PatternSource]) -> Result<Self> {
        let mut lines = Vec::new();

        for source in sources {
            match source {
                PatternSource::File(path) => match fs::read_to_string(path) {
                    Ok(contents) => lines.extend(contents.lines().map(str::to_string)),
                    Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                    Err(err) => {
                        crate::bail!(IgnoreFile, "cannot read {}: {}", path.display(), err)
                    }
                },
                PatternSource::Literal(pattern) => lines.push(pattern.clone()),
            }
        }

        Self::from_lines(lines.iter().map(String::as_str))
    }

    /// Compile an ordered sequence of pattern lines.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = GitignoreBuilder::new("");
        let mut rules = Vec::new();

        for line in lines {
            if let Some(rule) = IgnoreRule::parse(line) {
                builder.add_line(None, &rule.raw)?;
                rules.push(rule);
            }
        }

        Ok(Self {
            rules,
            matcher: builder.build()?,
        })
    }

    /// Whether `path`, relative to the traversal root, is excluded.
    ///
    /// Rules are evaluated in order; the last matching rule decides, so a
    /// later `!` rule overrides an earlier exclusion.
    pub fn matches<P: AsRef<Path>>(&self, path: P, is_dir: bool) -> bool {
        self.matcher.matched(path, is_dir).is_ignore()
    }

    /// The compiled rules, in evaluation order.
    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[&str]) -> PatternSet {
        PatternSet::from_lines(lines.iter().copied()).unwrap()
    }

    #[test]
    fn parse_extracts_rule_flags() {
        let rule = IgnoreRule::parse("!build/").unwrap();
        assert!(rule.negated);
        assert!(rule.dir_only);
        assert!(!rule.anchored);
        assert!(!rule.has_separator);

        let rule = IgnoreRule::parse("/src/lib.rs").unwrap();
        assert!(!rule.negated);
        assert!(!rule.dir_only);
        assert!(rule.anchored);
        assert!(rule.has_separator);

        let rule = IgnoreRule::parse("  *.log  ").unwrap();
        assert_eq!(rule.raw, "*.log");
        assert!(!rule.negated && !rule.dir_only && !rule.anchored && !rule.has_separator);
    }

    #[test]
    fn parse_skips_blanks_and_comments() {
        assert_eq!(IgnoreRule::parse(""), None);
        assert_eq!(IgnoreRule::parse("   "), None);
        assert_eq!(IgnoreRule::parse("# comment"), None);
        assert_eq!(IgnoreRule::parse("  # indented comment"), None);
    }

    #[test]
    fn empty_set_matches_nothing() {
        let patterns = set(&[]);
        assert!(patterns.is_empty());
        assert!(!patterns.matches("anything.txt", false));
        assert!(!patterns.matches("deep/nested/dir", true));
    }

    #[test]
    fn bare_name_matches_at_any_depth() {
        let patterns = set(&["target"]);
        assert!(patterns.matches("target", true));
        assert!(patterns.matches("a/b/target", true));
        assert!(patterns.matches("a/target", false));
        assert!(!patterns.matches("target2", true));
    }

    #[test]
    fn anchored_pattern_matches_root_only() {
        let patterns = set(&["/top.txt"]);
        assert!(patterns.matches("top.txt", false));
        assert!(!patterns.matches("sub/top.txt", false));
    }

    #[test]
    fn pattern_with_separator_is_anchored() {
        let patterns = set(&["src/main.rs"]);
        assert!(patterns.matches("src/main.rs", false));
        assert!(!patterns.matches("other/src/main.rs", false));
    }

    #[test]
    fn trailing_slash_matches_directories_only() {
        let patterns = set(&["build/"]);
        assert!(patterns.matches("build", true));
        assert!(!patterns.matches("build", false));
        assert!(patterns.matches("x/build", true));
    }

    #[test]
    fn glob_wildcards() {
        let patterns = set(&["*.log", "cache-?", "[ab].txt"]);
        assert!(patterns.matches("debug.log", false));
        assert!(patterns.matches("sub/dir/trace.log", false));
        assert!(patterns.matches("cache-1", true));
        assert!(!patterns.matches("cache-12", true));
        assert!(patterns.matches("a.txt", false));
        assert!(!patterns.matches("c.txt", false));
    }

    #[test]
    fn double_star_crosses_separators() {
        let patterns = set(&["docs/**"]);
        assert!(patterns.matches("docs/readme.md", false));
        assert!(patterns.matches("docs/a/b/c.md", false));
        assert!(!patterns.matches("src/readme.md", false));
    }

    #[test]
    fn later_negation_reincludes() {
        let patterns = set(&["*.txt", "!keep.txt"]);
        assert!(patterns.matches("drop.txt", false));
        assert!(!patterns.matches("keep.txt", false));
        assert!(!patterns.matches("sub/keep.txt", false));
    }

    #[test]
    fn negation_order_matters() {
        // The negation comes first, so the later exclusion wins.
        let patterns = set(&["!keep.txt", "*.txt"]);
        assert!(patterns.matches("keep.txt", false));
    }

    #[test]
    fn comments_and_blanks_are_not_rules() {
        let patterns = set(&["# header", "", "*.tmp", "   "]);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns.rules()[0].raw, "*.tmp");
        assert!(patterns.matches("a.tmp", false));
    }

    #[test]
    fn build_skips_missing_file_source() {
        let sources = [
            PatternSource::File(PathBuf::from("/nonexistent/chettu-ignore-file")),
            PatternSource::Literal("*.bak".to_string()),
        ];
        let patterns = PatternSet::build(&sources).unwrap();
        assert_eq!(patterns.len(), 1);
        assert!(patterns.matches("old.bak", false));
    }

    #[test]
    fn build_reads_file_sources_in_order() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let ignore_file = dir.path().join(".gitignore");
        let mut f = fs::File::create(&ignore_file).unwrap();
        writeln!(f, "# generated files").unwrap();
        writeln!(f, "*.txt").unwrap();

        let sources = [
            PatternSource::File(ignore_file),
            PatternSource::Literal("!keep.txt".to_string()),
        ];
        let patterns = PatternSet::build(&sources).unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns.matches("notes.txt", false));
        assert!(!patterns.matches("keep.txt", false));
    }
}
