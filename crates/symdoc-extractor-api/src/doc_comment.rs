//! Doc-comment scanner.
//!
//! Locates the documentation block immediately preceding a declaration:
//! either a block comment (`/* … */`, including `/** … */` doc blocks with
//! `*`-margin continuation lines) or a contiguous run of line comments
//! (`//`, and `#` for PHP). A blank line between the comment and the
//! declaration detaches it. Pure function of `(text, offset)`.

/// Scan for the doc comment attached to the declaration starting at
/// `decl_start` (a byte offset into `text`).
///
/// Returns `None` when no adjacent comment exists, when a blank line
/// separates the nearest comment from the declaration, or when the offset
/// is out of bounds / not a char boundary.
pub fn scan(text: &str, decl_start: usize) -> Option<String> {
    let head = text.get(..decl_start)?;
    let trimmed = head.trim_end();
    if trimmed.is_empty() {
        return None;
    }

    // Gap between the comment and the declaration must not contain a
    // blank line.
    let gap = &head[trimmed.len()..];
    if gap.matches('\n').count() >= 2 {
        return None;
    }

    if trimmed.ends_with("*/") {
        let start = trimmed.rfind("/*")?;
        clean_block(&trimmed[start..])
    } else {
        scan_line_run(trimmed)
    }
}

/// Strip delimiters and `*`-margin markers from a block comment
fn clean_block(comment: &str) -> Option<String> {
    let inner = comment
        .strip_prefix("/**")
        .or_else(|| comment.strip_prefix("/*"))
        .unwrap_or(comment);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    let mut lines = Vec::new();
    for line in inner.lines() {
        let line = line.trim_start();
        let line = match line.strip_prefix('*') {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        };
        lines.push(line.trim_end());
    }

    let doc = lines.join("\n").trim().to_string();
    if doc.is_empty() {
        None
    } else {
        Some(doc)
    }
}

/// Collect a contiguous run of whole-line comments directly above the
/// declaration
fn scan_line_run(head: &str) -> Option<String> {
    let mut run = Vec::new();
    for line in head.lines().rev() {
        match strip_line_marker(line.trim()) {
            Some(rest) => run.push(rest),
            None => break,
        }
    }
    if run.is_empty() {
        return None;
    }
    run.reverse();

    let doc = run.join("\n").trim().to_string();
    if doc.is_empty() {
        None
    } else {
        Some(doc)
    }
}

fn strip_line_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("//") {
        return Some(rest.strip_prefix(' ').unwrap_or(rest));
    }
    // PHP hash comments; `#[` is an attribute, not a comment
    if let Some(rest) = line.strip_prefix('#') {
        if !rest.starts_with('[') {
            return Some(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    None
}
