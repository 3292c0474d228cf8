//! Configuration handling for the converters.
//!
//! Runtime values (where the manual lives, what the index file is called, who
//! authored the posts) come from environment variables with the historical
//! NIMBLE defaults. Site-specific literals used by the extractor (title
//! suffixes, file name prefixes, chrome classes) live in [`SiteProfile`].

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Environment variable names.
pub const ENV_MANUAL_DIR: &str = "SITEDOC_MANUAL_DIR";
pub const ENV_INDEX_FILE: &str = "SITEDOC_INDEX_FILE";
pub const ENV_AUTHOR: &str = "SITEDOC_AUTHOR";

/// Default values used when environment variables are absent.
const DEFAULT_MANUAL_DIR: &str = "/var/tmp/nimble-dev/website/manual";
const DEFAULT_INDEX_FILE: &str = "search_index.json";
const DEFAULT_AUTHOR: &str = "NIMBLE Development Team";

/// Converter runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    manual_dir: PathBuf,
    index_file_name: String,
    author: String,
    profile: SiteProfile,
}

impl Config {
    /// Create a new config explicitly, validating every field.
    pub fn new(
        manual_dir: impl Into<PathBuf>,
        index_file_name: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_manual_dir(manual_dir)?
            .with_index_file_name(index_file_name)?
            .with_author(author)
    }

    /// Load from environment variables, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let manual_dir = env::var(ENV_MANUAL_DIR).unwrap_or_else(|_| DEFAULT_MANUAL_DIR.to_string());
        let index_file_name =
            env::var(ENV_INDEX_FILE).unwrap_or_else(|_| DEFAULT_INDEX_FILE.to_string());
        let author = env::var(ENV_AUTHOR).unwrap_or_else(|_| DEFAULT_AUTHOR.to_string());
        Self::new(manual_dir, index_file_name, author)
    }

    /// Directory holding the rendered manual pages.
    pub fn manual_dir(&self) -> &Path {
        &self.manual_dir
    }
    /// File name of the search index, written inside `manual_dir`.
    pub fn index_file_name(&self) -> &str {
        &self.index_file_name
    }
    /// Full path of the search index file.
    pub fn index_path(&self) -> PathBuf {
        self.manual_dir.join(&self.index_file_name)
    }
    /// Author written into every post's frontmatter.
    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    pub fn with_manual_dir(mut self, manual_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let manual_dir = manual_dir.into();
        if manual_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "manual_dir",
                reason: "must not be empty".to_string(),
            });
        }
        self.manual_dir = manual_dir;
        Ok(self)
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Result<Self, ConfigError> {
        let author = author.into();
        if author.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "author",
                reason: "must not be empty".to_string(),
            });
        }
        self.author = author;
        Ok(self)
    }

    pub fn with_index_file_name(
        mut self,
        index_file_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let index_file_name = index_file_name.into();
        if index_file_name.trim().is_empty() || index_file_name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "index_file_name",
                reason: format!("'{index_file_name}' is not a plain file name"),
            });
        }
        self.index_file_name = index_file_name;
        Ok(self)
    }

    /// Built-in defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self {
            manual_dir: PathBuf::from(DEFAULT_MANUAL_DIR),
            index_file_name: DEFAULT_INDEX_FILE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            profile: SiteProfile::nimble(),
        }
    }
}

static NIMBLE_BLOG_TITLE: LazyLock<TitleSuffix> =
    LazyLock::new(|| TitleSuffix::new('–', "NIMBLE").unwrap());
static NIMBLE_MANUAL_TITLE: LazyLock<TitleSuffix> =
    LazyLock::new(|| TitleSuffix::new('|', "NimbleUserManual.knit").unwrap());

/// A `<separator> <suffix>` trailer that a site appends to every `<title>`.
///
/// The matching regex is compiled once, when the suffix is built.
#[derive(Debug, Clone)]
pub struct TitleSuffix {
    separator: char,
    suffix: String,
    pattern: Regex,
}

impl TitleSuffix {
    pub fn new(separator: char, suffix: &str) -> Result<Self, ConfigError> {
        let pattern = format!(
            r"\s*{}\s*{}\s*$",
            regex::escape(&separator.to_string()),
            regex::escape(suffix)
        );
        let pattern = Regex::new(&pattern).map_err(|err| ConfigError::InvalidValue {
            field: "title_suffix",
            reason: err.to_string(),
        })?;
        Ok(Self {
            separator,
            suffix: suffix.to_string(),
            pattern,
        })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Removes the trailer from the end of `title`; whitespace around the separator may vary.
    pub fn strip(&self, title: &str) -> String {
        self.pattern.replace(title, "").into_owned()
    }
}

impl PartialEq for TitleSuffix {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator && self.suffix == other.suffix
    }
}

impl Eq for TitleSuffix {}

/// Site-specific literals the extractor matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    /// Trailer of blog post titles, e.g. `Post – NIMBLE`.
    pub blog_title: TitleSuffix,
    /// Trailer of manual page titles, e.g. `Intro | NimbleUserManual.knit`.
    pub manual_title: TitleSuffix,
    /// Chapter prefix dropped when a page title is derived from its file name.
    pub chapter_prefix: String,
    /// Pages whose file name starts with this are left out of the index.
    pub excluded_prefix: String,
    /// Classes of the `div`s stripped from `<body>` when no page container exists.
    pub chrome_classes: Vec<String>,
}

impl SiteProfile {
    pub fn nimble() -> Self {
        Self {
            blog_title: NIMBLE_BLOG_TITLE.clone(),
            manual_title: NIMBLE_MANUAL_TITLE.clone(),
            chapter_prefix: "cha-".to_string(),
            excluded_prefix: "404".to_string(),
            chrome_classes: vec!["book-summary".to_string(), "book-header".to_string()],
        }
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::nimble()
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_MANUAL_DIR, ENV_INDEX_FILE, ENV_AUTHOR] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.manual_dir(), Path::new(super::DEFAULT_MANUAL_DIR));
        assert_eq!(cfg.index_file_name(), super::DEFAULT_INDEX_FILE);
        assert_eq!(cfg.author(), super::DEFAULT_AUTHOR);
        assert_eq!(
            cfg.index_path(),
            Path::new("/var/tmp/nimble-dev/website/manual/search_index.json")
        );
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_MANUAL_DIR, "/srv/manual");
            env::set_var(ENV_INDEX_FILE, "index.json");
            env::set_var(ENV_AUTHOR, "Docs Team");
        }
        let cfg = Config::from_env().unwrap();
        clear_env();
        assert_eq!(cfg.manual_dir(), Path::new("/srv/manual"));
        assert_eq!(cfg.index_path(), Path::new("/srv/manual/index.json"));
        assert_eq!(cfg.author(), "Docs Team");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            Config::new("", "search_index.json", "A"),
            Err(ConfigError::InvalidValue { field: "manual_dir", .. })
        ));
        assert!(matches!(
            Config::new("/tmp", "nested/index.json", "A"),
            Err(ConfigError::InvalidValue { field: "index_file_name", .. })
        ));
        assert!(matches!(
            Config::default().with_author("  "),
            Err(ConfigError::InvalidValue { field: "author", .. })
        ));
    }

    #[test]
    fn test_nimble_profile_literals() {
        let profile = SiteProfile::nimble();
        assert_eq!(profile.blog_title.suffix(), "NIMBLE");
        assert_eq!(profile.blog_title.separator(), '–');
        assert_eq!(profile.manual_title.suffix(), "NimbleUserManual.knit");
        assert_eq!(profile.manual_title.separator(), '|');
        assert_eq!(profile.chrome_classes, vec!["book-summary", "book-header"]);
    }
}
