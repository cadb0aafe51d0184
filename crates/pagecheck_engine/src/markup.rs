//! Tag-level scan of raw markup.
//!
//! Finds real start and end tags with their byte offsets so fragments can be
//! spliced into the text. Comments, doctypes, processing instructions, quoted
//! attribute values and the contents of raw-text elements are skipped, the
//! same places where the HTML tokenizer never emits tags.

/// Elements whose content the tokenizer treats as text up to the matching
/// end tag.
const RAW_TEXT: &[&str] = &[
    "script", "style", "textarea", "title", "xmp", "iframe", "noembed", "noframes", "noscript",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    /// Lower-cased element name.
    pub name: String,
    /// Offset of the opening `<`.
    pub start: usize,
    pub closing: bool,
    pub self_closing: bool,
}

pub(crate) fn scan_tags(markup: &str) -> Vec<Tag> {
    let bytes = markup.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(offset) = markup[pos..].find('<') {
        let start = pos + offset;
        let rest = &markup[start..];

        if rest.starts_with("<!--") {
            pos = match rest[4..].find("-->") {
                Some(end) => start + 4 + end + 3,
                None => markup.len(),
            };
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            pos = rest.find('>').map_or(markup.len(), |end| start + end + 1);
            continue;
        }

        let closing = bytes.get(start + 1) == Some(&b'/');
        let name_start = start + 1 + usize::from(closing);
        if !bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
            pos = start + 1;
            continue;
        }
        let name_end = markup[name_start..]
            .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
            .map_or(markup.len(), |len| name_start + len);
        let name = markup[name_start..name_end].to_ascii_lowercase();

        let Some(tag_end) = tag_close(bytes, name_end) else {
            break;
        };
        let self_closing = !closing && tag_end > name_end && bytes[tag_end - 1] == b'/';
        pos = tag_end + 1;

        if !closing && RAW_TEXT.contains(&name.as_str()) {
            pos = raw_text_end(markup, pos, &name);
        }
        tags.push(Tag {
            name,
            start,
            closing,
            self_closing,
        });
    }
    tags
}

/// Offset of the `>` ending a tag, skipping quoted attribute values.
fn tag_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut index = from;
    while index < bytes.len() {
        match bytes[index] {
            b'>' => return Some(index),
            quote @ (b'"' | b'\'') => {
                let close = bytes[index + 1..].iter().position(|&b| b == quote)?;
                index += close + 2;
            }
            _ => index += 1,
        }
    }
    None
}

/// Offset of `</name` that ends a raw-text element, or the end of input.
fn raw_text_end(markup: &str, from: usize, name: &str) -> usize {
    let lower = markup[from..].to_ascii_lowercase();
    let needle = format!("</{name}");
    let mut search = 0;
    while let Some(found) = lower[search..].find(&needle) {
        let at = search + found;
        let after = lower.as_bytes().get(at + needle.len()).copied();
        if matches!(
            after,
            None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
        ) {
            return from + at;
        }
        search = at + needle.len();
    }
    markup.len()
}

/// Byte offset just before the closing tag of the first `<footer>`.
///
/// `Some(None)` means the footer is never closed.
pub(crate) fn footer_close(tags: &[Tag]) -> Option<Option<usize>> {
    let open = tags
        .iter()
        .position(|tag| tag.name == "footer" && !tag.closing)?;
    let mut depth = 0usize;
    for tag in &tags[open..] {
        if tag.name != "footer" {
            continue;
        }
        if tag.closing {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(Some(tag.start));
            }
        } else if !tag.self_closing {
            depth += 1;
        }
    }
    Some(None)
}

/// Offset of the last real `</body>`, else `</html>`.
pub(crate) fn body_close(tags: &[Tag]) -> Option<usize> {
    let last_closing = |name: &str| {
        tags.iter()
            .rev()
            .find(|tag| tag.closing && tag.name == name)
            .map(|tag| tag.start)
    };
    last_closing("body").or_else(|| last_closing("html"))
}
