use std::path::PathBuf;

use thiserror::Error;

use crate::loader::LoadError;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to list {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
