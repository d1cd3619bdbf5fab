//! Reading of JSON-encoded inputs.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadJsonError {
    #[error("cannot open {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, ReadJsonError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadJsonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ReadJsonError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub trait FromJsonFile: Sized {
    fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ReadJsonError>;
}

impl<D: DeserializeOwned> FromJsonFile for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, ReadJsonError> {
        read_json(path)
    }
}
