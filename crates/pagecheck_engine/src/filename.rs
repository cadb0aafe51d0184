use sha2::{Digest, Sha256};
use url::Url;

/// Filesystem-safe, deterministic name for an annotated page:
/// `{sanitized_title}--{short_hash(address)}.html`.
pub fn annotated_filename(title: Option<&str>, address: &Url) -> String {
    let stem = sanitize_stem(title.unwrap_or("untitled"));
    format!("{stem}--{}.html", short_hash(address.as_str()))
}

fn sanitize_stem(input: &str) -> String {
    let mut stem = String::with_capacity(input.len());
    for c in input.chars() {
        let c = if is_forbidden(c) || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' && stem.ends_with('_') {
            continue;
        }
        stem.push(c);
    }
    let mut stem: String = stem.trim_matches(['_', '.']).chars().take(80).collect();
    if stem.is_empty() {
        stem = "untitled".to_string();
    }
    if is_reserved_windows_name(&stem) {
        stem.push('_');
    }
    stem
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}')
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    Sha256::digest(input.as_bytes())
        .iter()
        .take(4)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Url {
        Url::parse("https://example.com/foo").unwrap()
    }

    #[test]
    fn name_is_deterministic_and_safe() {
        let name = annotated_filename(Some("My: Title?/Bad"), &address());
        assert!(name.starts_with("My_Title_Bad--"), "{name}");
        assert!(name.ends_with(".html"));
        assert_eq!(name, annotated_filename(Some("My: Title?/Bad"), &address()));
    }

    #[test]
    fn reserved_and_empty_titles_are_patched() {
        assert!(annotated_filename(Some("con"), &address()).starts_with("con_--"));
        assert!(annotated_filename(Some(" ?? "), &address()).starts_with("untitled--"));
        assert!(annotated_filename(None, &address()).starts_with("untitled--"));
    }
}
