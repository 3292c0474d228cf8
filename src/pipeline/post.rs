use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::config::Config;
use crate::extractor::extract_post;
use crate::loader;
use crate::output::{PostDocument, write_atomic};
use crate::pipeline::errors::ConvertError;

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedPost {
    pub output: PathBuf,
    pub title: String,
    pub date: NaiveDate,
    pub date_is_fallback: bool,
    pub categories: Vec<String>,
}

/// Converts one exported WordPress page into a frontmatter-prefixed markdown file.
///
/// `today` is written as the date when the page carries none. The output file
/// is replaced atomically; on error nothing is written.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_post(
    input: &Path,
    output: &Path,
    config: &Config,
    today: NaiveDate,
) -> Result<ConvertedPost, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }

    let source = loader::load(input)?;
    let post = extract_post(&source.html, config.profile());
    let document = PostDocument::assemble(&post, config.author(), today);

    write_atomic(output, document.render().as_bytes()).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "Successfully converted {} to {}",
        input.display(),
        output.display()
    );
    info!("Title: {}", document.title);
    if document.date_is_fallback {
        info!("Date: {} (no date found, using today)", document.date);
    } else {
        info!("Date: {} (from {:?})", document.date, post.metadata.date_source);
    }

    Ok(ConvertedPost {
        output: output.to_path_buf(),
        title: document.title,
        date: document.date,
        date_is_fallback: document.date_is_fallback,
        categories: document.categories,
    })
}
