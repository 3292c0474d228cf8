use chrono::{DateTime, NaiveDate, NaiveDateTime};
use scraper::{Html, Selector};

use crate::config::{SiteProfile, TitleSuffix};
use crate::extractor::model::DateSource;

pub const UNTITLED_POST: &str = "Untitled Post";

const ENTRY_DATE_SELECTOR: &str = "time.entry-date";
const PUBLISHED_TIME_SELECTOR: &str = "meta[property='article:published_time']";
const HUMAN_DATE_FORMAT: &str = "%B %d, %Y";

/// Text of the first `<title>`, trimmed, with the site's trailer removed from its end.
///
/// Returns `None` when there is no title element or nothing is left after cleaning.
pub fn extract_title(document: &Html, suffix: &TitleSuffix) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    let raw = element.text().collect::<String>();

    let title = suffix.strip(raw.trim());
    if title.is_empty() { None } else { Some(title) }
}

pub fn post_title(document: &Html, profile: &SiteProfile) -> String {
    extract_title(document, &profile.blog_title).unwrap_or_else(|| UNTITLED_POST.to_string())
}

pub fn page_title(document: &Html, file_name: &str, profile: &SiteProfile) -> String {
    extract_title(document, &profile.manual_title)
        .unwrap_or_else(|| title_from_file_name(file_name, profile))
}

/// `cha-getting-started.html` -> `Getting Started`.
pub fn title_from_file_name(file_name: &str, profile: &SiteProfile) -> String {
    let stem = file_name.replace(".html", "");
    let stem = if profile.chapter_prefix.is_empty() {
        stem
    } else {
        stem.replace(&profile.chapter_prefix, "")
    };
    let title = title_case(&stem.replace('-', " "));
    if title.trim().is_empty() {
        file_name.to_string()
    } else {
        title
    }
}

/// Upper-cases every letter that follows a non-letter and lower-cases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

/// Manual pages are identified by their file name, extension included.
pub fn page_id(file_name: &str) -> String {
    file_name.to_string()
}

pub fn is_excluded_page(file_name: &str, profile: &SiteProfile) -> bool {
    !profile.excluded_prefix.is_empty() && file_name.starts_with(&profile.excluded_prefix)
}

type DateStrategy = fn(&Html) -> Option<NaiveDate>;

const DATE_CHAIN: &[(DateSource, DateStrategy)] = &[
    (DateSource::EntryDateAttribute, entry_date_attribute),
    (DateSource::EntryDateText, entry_date_text),
    (DateSource::PublishedTimeMeta, published_time_meta),
];

/// Publication date of a post; first source that yields a parsable date wins.
pub fn publication_date(document: &Html) -> Option<(NaiveDate, DateSource)> {
    DATE_CHAIN
        .iter()
        .find_map(|(source, strategy)| strategy(document).map(|date| (date, *source)))
}

fn entry_date_attribute(document: &Html) -> Option<NaiveDate> {
    let selector = Selector::parse(ENTRY_DATE_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    parse_iso_date(element.value().attr("datetime")?)
}

fn entry_date_text(document: &Html) -> Option<NaiveDate> {
    let selector = Selector::parse(ENTRY_DATE_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    parse_human_date(&element.text().collect::<String>())
}

fn published_time_meta(document: &Html) -> Option<NaiveDate> {
    let selector = Selector::parse(PUBLISHED_TIME_SELECTOR).ok()?;
    document
        .select(&selector)
        .find_map(|element| element.value().attr("content").and_then(parse_iso_date))
}

/// Calendar date of an ISO-8601 timestamp, in the timestamp's own offset.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let with_offset = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&with_offset) {
        return Some(timestamp.date_naive());
    }
    // Basic-format offsets such as `+0000`, which RFC 3339 does not allow
    if let Ok(timestamp) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(timestamp.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses `December 21, 2024` and `December 1, 2024`.
pub fn parse_human_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), HUMAN_DATE_FORMAT).ok()
}
