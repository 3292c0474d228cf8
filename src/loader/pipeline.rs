use crate::loader::{
    errors::LoadError,
    types::{Charset, SourceDocument},
};
use encoding_rs::Encoding;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

const SNIFF_LEN: usize = 4096;

pub fn decode_document(path: PathBuf, bytes: &[u8]) -> Result<SourceDocument, LoadError> {
    // Valid UTF-8 needs no sniffing
    if let Ok(html) = std::str::from_utf8(bytes) {
        return Ok(SourceDocument {
            path,
            html: html.strip_prefix('\u{feff}').unwrap_or(html).to_string(),
            charset: Charset::Utf8,
        });
    }

    let charset = detect_charset(bytes);
    let html = decode_to_utf8(bytes, &charset)?;

    Ok(SourceDocument {
        path,
        html,
        charset,
    })
}

fn detect_charset(bytes: &[u8]) -> Charset {
    let search_bytes = &bytes[..bytes.len().min(SNIFF_LEN)];
    let search_str = String::from_utf8_lossy(search_bytes);

    // 1. <meta charset="...">
    if let Some(charset) = charset_from_captures(META_CHARSET_REGEX.captures(&search_str)) {
        return charset;
    }

    // 2. <meta http-equiv="Content-Type" content="...; charset=...">
    if let Some(charset) = charset_from_captures(META_HTTP_EQUIV_REGEX.captures(&search_str)) {
        return charset;
    }

    // 3. Heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, bytes.len() <= SNIFF_LEN);
    Charset::from_encoding(detector.guess(None, true))
}

fn charset_from_captures(captures: Option<regex::Captures<'_>>) -> Option<Charset> {
    let label = captures?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

fn decode_to_utf8(bytes: &[u8], charset: &Charset) -> Result<String, LoadError> {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(bytes);

    if had_errors {
        return Err(LoadError::Charset(format!(
            "Failed to decode content with encoding: {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}
