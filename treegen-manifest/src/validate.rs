//! Name validation and span lookup for catalog entries.

use miette::SourceSpan;

/// Find the span of a table key declared as `[table.name]`, `[table."name"]`
/// or as an inline `name = { ... }` entry under a `[table]` header.
///
/// Points at the name itself, not the surrounding brackets.
pub(crate) fn find_table_span(src: &str, table: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("[{}.{}]", table, name), table.len() + 2),
        (format!("[{}.\"{}\"]", table, name), table.len() + 3),
        (format!("[{}.'{}']", table, name), table.len() + 3),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    find_inline_span(src, table, name)
}

/// Inline entries only count inside their own `[table]` section.
fn find_inline_span(src: &str, table: &str, name: &str) -> Option<SourceSpan> {
    let header = format!("[{}]", table);
    let mut in_table = false;
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if trimmed.starts_with('[') {
            in_table = trimmed.starts_with(header.as_str());
        } else if in_table
            && let Some(rest) = trimmed.strip_prefix(name)
            && rest.trim_start().starts_with('=')
        {
            return Some(SourceSpan::from((offset + indent, name.len())));
        }

        offset += line.len();
    }

    None
}

/// Validate a scalar or enum name.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
