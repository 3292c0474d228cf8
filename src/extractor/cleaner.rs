use std::sync::LazyLock;

use htmd::HtmlToMarkdown;
use regex::Regex;
use scraper::{ElementRef, Node};
use tracing::warn;

use crate::extractor::model::normalize_whitespace;

pub const CONTENT_NOT_EXTRACTED: &str = "Content could not be extracted.";

static CONVERTER: LazyLock<HtmlToMarkdown> = LazyLock::new(|| {
    HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "noscript"])
        .build()
});

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static FENCED_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```[^`]*```").unwrap());
static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());

/// Markdown for a post body. Links stay inline, lines are never wrapped.
pub fn to_markdown(region: Option<ElementRef<'_>>) -> String {
    let Some(region) = region else {
        return CONTENT_NOT_EXTRACTED.to_string();
    };

    let markdown = match CONVERTER.convert(&region.html()) {
        Ok(markdown) => markdown,
        Err(err) => {
            warn!("Markdown conversion failed, falling back to plain text: {}", err);
            region.text().collect::<String>()
        }
    };

    collapse_blank_lines(&markdown)
}

/// Reduces every run of three or more newlines to a single blank line and trims.
pub fn collapse_blank_lines(markdown: &str) -> String {
    BLANK_RUN_REGEX
        .replace_all(markdown, "\n\n")
        .trim()
        .to_string()
}

/// Concatenated text of `region`, skipping every element `exclude` accepts and its subtree.
///
/// Walks the tree with an explicit stack, so nesting depth is bounded by memory only.
pub fn text_excluding<F>(region: ElementRef<'_>, exclude: F) -> String
where
    F: Fn(&scraper::node::Element) -> bool,
{
    let mut out = String::new();
    // Children are pushed in reverse so they pop in document order
    let mut stack: Vec<_> = region.children().rev().collect();
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(value) if !exclude(value) => stack.extend(node.children().rev()),
            _ => {}
        }
    }
    out
}

/// Single-line plain text for the search index with code spans removed.
pub fn clean_index_text(text: &str) -> String {
    let text = normalize_whitespace(text);
    // Fenced blocks first so their backticks are not read as inline spans
    let text = FENCED_CODE_REGEX.replace_all(&text, "");
    INLINE_CODE_REGEX.replace_all(&text, "").into_owned()
}
