/*!
 * Document rendering
 *
 * Serializes a walked entry list into the final `<documents>` block: a
 * manifest of every visited path followed by one content block per file,
 * in the same order. The framing is byte-for-byte fixed, so content is
 * embedded verbatim rather than escaped.
 */

use std::io;
use std::path::Path;

use crate::walker::TreeEntry;

/// Render the entry list into the final document.
///
/// `read_content` is handed each file's on-disk path and returns its
/// bytes. A read failure (file vanished, permission lost since the walk)
/// prints a warning and omits that content block; the manifest line
/// stays.
pub fn render<F>(entries: &[TreeEntry], mut read_content: F) -> String
where
    F: FnMut(&Path) -> io::Result<Vec<u8>>,
{
    let mut out = String::new();
    out.push_str("<documents>\n");

    for entry in entries {
        out.push_str(&entry.path);
        out.push('\n');
    }
    out.push('\n');

    for entry in entries.iter().filter(|e| !e.is_dir) {
        match read_content(&entry.abs_path) {
            Ok(content) => push_file_block(&mut out, &entry.path, &content),
            Err(err) => eprintln!("Warning: cannot read {}: {}", entry.path, err),
        }
    }

    out.push_str("</documents>\n");
    out
}

/// Append one `<document>` block. Every non-empty content line is
/// indented by two tab stops; empty lines stay empty so the content is
/// recoverable byte-for-byte modulo the indent.
fn push_file_block(out: &mut String, path: &str, content: &[u8]) {
    let content = String::from_utf8_lossy(content);

    out.push_str("\t<document>\n");
    out.push_str("\t\t<source>");
    out.push_str(path);
    out.push_str("</source>\n");
    out.push_str("\t\t<document_content>\n");
    for line in content.split('\n') {
        if !line.is_empty() {
            out.push_str("\t\t");
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str("\t\t</document_content>\n");
    out.push_str("\t</document>\n");
}
