use chrono::NaiveDate;
use std::fs;

use crate::config::SiteProfile;
use crate::extractor::{DateSource, extract_page, extract_post};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_wordpress_post() {
    let html = fixture("wordpress_post.html");
    let post = extract_post(&html, &SiteProfile::nimble());

    assert_eq!(post.title(), "Version 1.3.0 of NIMBLE released");
    assert_eq!(post.categories(), ["release", "announcement"]);

    // The entry-date attribute beats the conflicting published_time meta
    assert_eq!(post.metadata.date, NaiveDate::from_ymd_opt(2024, 12, 21));
    assert_eq!(post.metadata.date_source, Some(DateSource::EntryDateAttribute));
    assert!(post.metadata.page_id.is_none());

    assert!(post.body.starts_with("We’ve released the newest version"));
    assert!(post.body.contains("[website](https://r-nimble.org/download)"));
    assert!(post.body.contains("[release notes](https://r-nimble.org/changelog)"));
    assert!(post.body.contains("nimbleList"));
    assert!(!post.body.contains("analytics"));
    assert!(!post.body.contains("Posted on"));
    assert!(!post.body.contains("Copyright"));
    assert!(!post.body.contains("\n\n\n"));
}

#[test]
fn test_post_without_content_region() {
    let html = fixture("no_content.html");
    let post = extract_post(&html, &SiteProfile::nimble());

    assert_eq!(post.title(), "Short course in Bayesian methods");
    assert_eq!(post.categories(), ["education", "announcement"]);
    assert_eq!(post.body, "Content could not be extracted.");
    assert_eq!(post.metadata.date, None);
}

#[test]
fn test_post_without_title() {
    let html = r#"<html><body><div class="post-content"><p>Body</p></div></body></html>"#;
    let post = extract_post(html, &SiteProfile::nimble());

    assert_eq!(post.title(), "Untitled Post");
    assert_eq!(post.categories(), ["announcement"]);
    assert_eq!(post.body, "Body");
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Bug fix – NIMBLE</title><body><main><p>Unclosed tags<div>More content";
    let post = extract_post(html, &SiteProfile::nimble());

    assert_eq!(post.title(), "Bug fix");
    assert_eq!(post.categories(), ["bugfix", "announcement"]);
    assert!(post.body.contains("Unclosed tags"));
    assert!(post.body.contains("More content"));
}

#[test]
fn test_extract_manual_page() {
    let html = fixture("manual_page.html");
    let page = extract_page("cha-more-introduction.html", &html, &SiteProfile::nimble());

    assert_eq!(page.metadata.page_id.as_deref(), Some("cha-more-introduction.html"));
    assert_eq!(page.metadata.title, "Chapter 3 More introduction");
    assert!(page.metadata.date.is_none());
    assert!(page.metadata.categories.is_none());

    assert!(page.body.starts_with("Chapter 3 More introduction Now that we have shown"));
    assert!(page.body.contains("high-level processing in R and low-level processing in C++."));
    assert!(!page.body.contains('\n'));
    assert!(!page.body.contains("buildMCMC"));
    assert!(!page.body.contains("compileNimble"));
    assert!(!page.body.contains("gitbook"));
    assert!(!page.body.contains("NIMBLE User Manual"));
}

#[test]
fn test_manual_page_without_container() {
    let html = fixture("manual_no_container.html");
    let page = extract_page("cha-installing.html", &html, &SiteProfile::nimble());

    assert_eq!(page.metadata.title, "Installing NIMBLE");
    assert_eq!(page.body, "NIMBLE requires a working C++ compiler.");
}

#[test]
fn test_manual_page_title_from_file_name() {
    let html = r#"<html><body><div class="page-inner"><p>Text</p></div></body></html>"#;
    let page = extract_page("cha-spatial-models.html", html, &SiteProfile::nimble());

    assert_eq!(page.metadata.title, "Spatial Models");
    assert_eq!(page.body, "Text");
}

#[test]
fn test_empty_manual_page() {
    let page = extract_page("cha-empty.html", "", &SiteProfile::nimble());
    assert_eq!(page.metadata.title, "Empty");
    assert_eq!(page.body, "");
}

#[test]
fn test_deeply_nested_manual_page() {
    let depth = 50_000;
    let html = format!(
        r#"<body><div class="page-inner">{}Nested chapter text{}</div></body>"#,
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let page = extract_page("cha-nested.html", &html, &SiteProfile::nimble());

    assert_eq!(page.metadata.title, "Nested");
    assert_eq!(page.body, "Nested chapter text");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::cleaner::collapse_blank_lines;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let profile = SiteProfile::nimble();
            let post = extract_post(&html, &profile);
            prop_assert!(!post.title().is_empty());
            let page = extract_page("cha-fuzz.html", &html, &profile);
            prop_assert!(!page.metadata.title.is_empty());
        }

        #[test]
        fn test_collapse_blank_lines_idempotent(text in "[a-z\n ]*") {
            let once = collapse_blank_lines(&text);
            prop_assert_eq!(collapse_blank_lines(&once), once.clone());
            prop_assert!(!once.contains("\n\n\n"));
        }
    }
}
