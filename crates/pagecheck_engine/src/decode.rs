use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMarkup {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode page as {encoding}")]
    Malformed { encoding: String },
}

/// Decodes page bytes to UTF-8.
///
/// Order: byte order mark, then the Content-Type charset, then a chardetng
/// guess hinted by the address's top-level domain.
pub fn decode_markup(
    bytes: &[u8],
    content_type: Option<&str>,
    address: Option<&Url>,
) -> Result<DecodedMarkup, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let tld = address.and_then(top_level_domain);
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(tld.as_deref().map(str::as_bytes), true);
    decode_with(bytes, encoding)
}

fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(['"', '\'']).to_string())
        } else {
            None
        }
    })
}

fn top_level_domain(address: &Url) -> Option<String> {
    let host = address.host_str()?;
    let tld = host.rsplit('.').next()?.to_ascii_lowercase();
    if !tld.is_empty() && tld.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(tld)
    } else {
        None
    }
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedMarkup, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedMarkup {
        html: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins_over_detection() {
        let decoded = decode_markup(b"caf\xe9", Some("text/html; Charset=\"ISO-8859-1\""), None)
            .unwrap();
        assert_eq!(decoded.html, "café");
        assert_eq!(decoded.encoding_label, "windows-1252");
    }

    #[test]
    fn bom_is_honoured() {
        let decoded = decode_markup(b"\xEF\xBB\xBF<p>hi</p>", Some("text/html"), None).unwrap();
        assert_eq!(decoded.html, "<p>hi</p>");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn invalid_utf8_with_explicit_charset_fails() {
        let err = decode_markup(b"\xc3\x28abc", Some("text/html; charset=utf-8"), None);
        assert!(matches!(err, Err(DecodeError::Malformed { .. })));
    }

    #[test]
    fn tld_hint_ignores_ip_hosts() {
        let ip = Url::parse("http://127.0.0.1/").unwrap();
        assert_eq!(top_level_domain(&ip), None);
        let named = Url::parse("https://example.de/").unwrap();
        assert_eq!(top_level_domain(&named).as_deref(), Some("de"));
    }
}
