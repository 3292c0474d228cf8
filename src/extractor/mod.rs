pub mod classify;
pub mod cleaner;
pub mod locator;
pub mod metadata;
pub mod model;

#[cfg(test)]
mod tests;

pub use model::{DateSource, ExtractedContent, ExtractedMetadata};

use scraper::Html;

use crate::config::SiteProfile;

/// Extracts a WordPress post: title, publication date, categories and markdown body.
pub fn extract_post(html: &str, profile: &SiteProfile) -> ExtractedContent {
    let document = Html::parse_document(html);

    // 1. Title and topical categories
    let title = metadata::post_title(&document, profile);
    let categories = classify::categorize(&title)
        .iter()
        .map(|category| category.to_string())
        .collect();

    // 2. Publication date, if the page carries one
    let dated = metadata::publication_date(&document);

    // 3. Locate and convert the post body
    let body = cleaner::to_markdown(locator::locate_post_content(&document));

    ExtractedContent {
        metadata: ExtractedMetadata {
            title,
            date: dated.map(|(date, _)| date),
            date_source: dated.map(|(_, source)| source),
            categories: Some(categories),
            page_id: None,
        },
        body,
    }
}

/// Extracts a manual page: file-name id, title and indexable plain text.
pub fn extract_page(file_name: &str, html: &str, profile: &SiteProfile) -> ExtractedContent {
    let document = Html::parse_document(html);

    let title = metadata::page_title(&document, file_name, profile);

    let region = locator::locate_page_content(&document);
    let body = match region.element() {
        Some(element) => {
            let text = cleaner::text_excluding(element, |el| region.excludes(el, profile));
            cleaner::clean_index_text(&text)
        }
        None => String::new(),
    };

    ExtractedContent {
        metadata: ExtractedMetadata {
            title,
            date: None,
            date_source: None,
            categories: None,
            page_id: Some(metadata::page_id(file_name)),
        },
        body,
    }
}
