//! Content locator: picks the subtree of a page that holds the prose.
//!
//! Each candidate is a [`Strategy`]; a chain is tried in order and the first
//! strategy that matches anything wins.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::SiteProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub name: &'static str,
    pub selector: &'static str,
}

impl Strategy {
    const fn new(name: &'static str, selector: &'static str) -> Self {
        Self { name, selector }
    }

    pub fn find<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        let selector = Selector::parse(self.selector).ok()?;
        document.select(&selector).next()
    }
}

/// WordPress post body, most specific container first.
pub const POST_CONTENT_CHAIN: &[Strategy] = &[
    Strategy::new("entry-content", ".entry-content"),
    Strategy::new("post-content", ".post-content"),
    Strategy::new("content", ".content"),
    Strategy::new("article-entry-content", "article .entry-content"),
    Strategy::new("text-widget", ".textwidget"),
    Strategy::new("main", "main"),
    Strategy::new("article", "article"),
];

const PAGE_CONTAINER: Strategy = Strategy::new("page-inner", "div.page-inner");
const PAGE_BODY: Strategy = Strategy::new("body", "body");

/// Tags never indexed, wherever they appear in a page region.
pub const NON_PROSE_TAGS: &[&str] = &["nav", "script", "style"];

/// Returns the first match of `chain` together with the strategy that found it.
pub fn first_match<'a>(
    document: &'a Html,
    chain: &[Strategy],
) -> Option<(&'static str, ElementRef<'a>)> {
    chain
        .iter()
        .find_map(|strategy| strategy.find(document).map(|element| (strategy.name, element)))
}

/// Body of a WordPress post, or `None` when no strategy in the chain matches.
pub fn locate_post_content(document: &Html) -> Option<ElementRef<'_>> {
    match first_match(document, POST_CONTENT_CHAIN) {
        Some((strategy, element)) => {
            debug!("Post content located via {}", strategy);
            Some(element)
        }
        None => {
            debug!("No post content region found");
            None
        }
    }
}

/// Content region of a manual page.
#[derive(Debug, Clone, Copy)]
pub enum PageRegion<'a> {
    /// The book's page container.
    Container(ElementRef<'a>),
    /// The whole `<body>`; sidebar and header chrome must be skipped.
    Body(ElementRef<'a>),
    Missing,
}

impl<'a> PageRegion<'a> {
    /// Whether `element` (a descendant of the region) should be left out of the text.
    pub fn excludes(&self, element: &scraper::node::Element, profile: &SiteProfile) -> bool {
        if NON_PROSE_TAGS.contains(&element.name()) {
            return true;
        }
        match self {
            PageRegion::Body(_) => {
                element.name() == "div"
                    && element
                        .classes()
                        .any(|class| profile.chrome_classes.iter().any(|c| c == class))
            }
            _ => false,
        }
    }

    pub fn element(&self) -> Option<ElementRef<'a>> {
        match self {
            PageRegion::Container(element) | PageRegion::Body(element) => Some(*element),
            PageRegion::Missing => None,
        }
    }
}

pub fn locate_page_content(document: &Html) -> PageRegion<'_> {
    if let Some(container) = PAGE_CONTAINER.find(document) {
        return PageRegion::Container(container);
    }
    match PAGE_BODY.find(document) {
        Some(body) => PageRegion::Body(body),
        None => PageRegion::Missing,
    }
}
