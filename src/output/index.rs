use serde::{Deserialize, Serialize};

use crate::extractor::ExtractedContent;

/// One search-index entry, serialized as `[page_id, title, body]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String, String)", from = "(String, String, String)")]
pub struct PageRecord {
    pub page_id: String,
    pub title: String,
    pub body: String,
}

impl PageRecord {
    /// Builds the record for a page produced by `extract_page`, which always sets the id.
    pub fn assemble(page: &ExtractedContent) -> Self {
        Self {
            page_id: page.metadata.page_id.clone().unwrap_or_default(),
            title: page.metadata.title.clone(),
            body: page.body.clone(),
        }
    }
}

impl From<PageRecord> for (String, String, String) {
    fn from(record: PageRecord) -> Self {
        (record.page_id, record.title, record.body)
    }
}

impl From<(String, String, String)> for PageRecord {
    fn from((page_id, title, body): (String, String, String)) -> Self {
        Self {
            page_id,
            title,
            body,
        }
    }
}

/// Records in insertion order, which is the sorted file-name order of the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    records: Vec<PageRecord>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PageRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Compact JSON array of 3-element arrays; non-ASCII text is left unescaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteProfile;
    use crate::extractor::extract_page;

    fn record(id: &str, title: &str, body: &str) -> PageRecord {
        PageRecord {
            page_id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_assemble_from_extracted_page() {
        let page = extract_page(
            "cha-intro.html",
            r#"<title>Introduction | NimbleUserManual.knit</title><div class="page-inner"><p>Welcome  to
            NIMBLE</p></div>"#,
            &SiteProfile::nimble(),
        );
        assert_eq!(
            PageRecord::assemble(&page),
            record("cha-intro.html", "Introduction", "Welcome to NIMBLE")
        );
    }

    #[test]
    fn test_serializes_compact_arrays() {
        let mut index = SearchIndex::new();
        index.push(record("cha-intro.html", "Introduction", "Welcome"));
        index.push(record("cha-setup.html", "Setup", "Install \"R\""));

        assert_eq!(
            index.to_json().unwrap(),
            r#"[["cha-intro.html","Introduction","Welcome"],["cha-setup.html","Setup","Install \"R\""]]"#
        );
    }

    #[test]
    fn test_keeps_non_ascii_unescaped() {
        let mut index = SearchIndex::new();
        index.push(record("a.html", "Modèles", "Größe – naïve"));
        let json = index.to_json().unwrap();
        assert!(json.contains("Modèles"));
        assert!(json.contains("Größe – naïve"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_empty_index() {
        let index = SearchIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_parses_back_in_order() {
        let json = r#"[["b.html","B",""],["a.html","A","text"]]"#;
        let index: SearchIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.records()[0], record("b.html", "B", ""));
        assert_eq!(index.records()[1].body, "text");
    }
}
