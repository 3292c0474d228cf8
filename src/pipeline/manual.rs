use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::config::{Config, SiteProfile};
use crate::extractor::{extract_page, metadata::is_excluded_page};
use crate::loader;
use crate::output::{PageRecord, SearchIndex, write_atomic};
use crate::pipeline::errors::IndexError;

const PREVIEW_CHARS: usize = 200;

/// Result of writing the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub output: PathBuf,
    pub pages: usize,
    /// Files that could not be read and were left out.
    pub skipped: Vec<String>,
}

/// HTML pages directly inside `dir`, excluded pages removed, sorted by name.
pub fn list_pages(dir: &Path, profile: &SiteProfile) -> Result<Vec<(String, PathBuf)>, IndexError> {
    let entries = fs::read_dir(dir).map_err(|source| IndexError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IndexError::ReadDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            warn!("Skipping non UTF-8 file name {}", path.display());
            continue;
        };
        if is_excluded_page(name, profile) {
            continue;
        }
        pages.push((name.to_string(), path));
    }

    pages.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pages)
}

/// Extracts every page of the manual into an in-memory index.
///
/// Returns the index together with the names of files that failed to load.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn build_search_index(
    dir: &Path,
    profile: &SiteProfile,
) -> Result<(SearchIndex, Vec<String>), IndexError> {
    let mut index = SearchIndex::new();
    let mut skipped = Vec::new();

    for (name, path) in list_pages(dir, profile)? {
        info!("Processing {}...", name);

        match loader::load(&path) {
            Ok(source) => {
                let page = extract_page(&name, &source.html, profile);
                index.push(PageRecord::assemble(&page));
            }
            Err(err) => {
                warn!("Error processing {}: {}", path.display(), err);
                skipped.push(name);
            }
        }
    }

    Ok((index, skipped))
}

/// Builds the index for the configured manual directory and writes it there.
pub fn write_search_index(config: &Config) -> Result<IndexSummary, IndexError> {
    info!("Generating search index for {}", config.manual_dir().display());

    let (index, skipped) = build_search_index(config.manual_dir(), config.profile())?;
    let json = index.to_json()?;

    let output = config.index_path();
    write_atomic(&output, json.as_bytes()).map_err(|source| IndexError::Write {
        path: output.clone(),
        source,
    })?;

    info!("Generated search index with {} pages.", index.len());
    info!("Search index saved to: {}", output.display());

    if let Some(first) = index.records().first() {
        let preview: String = first.body.chars().take(PREVIEW_CHARS).collect();
        info!(
            "Example entry: url={} title={} content={}...",
            first.page_id, first.title, preview
        );
    }

    Ok(IndexSummary {
        output,
        pages: index.len(),
        skipped,
    })
}
