use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("charset error: {0}")]
    Charset(String),
}
