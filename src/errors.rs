use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Traversal reached a node that was never registered via `add_node`/`add_edge`.
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SortError {
    #[error("Index {index} out of range for slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type SortResult<T> = Result<T, SortError>;

#[derive(Error, Debug)]
pub enum LinesError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LinesError {
    /// Classifies an I/O error, keeping `NotFound` distinct from every other failure.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LinesError::FileNotFound(path)
        } else {
            LinesError::Io { path, source }
        }
    }
}

pub type LinesResult<T> = Result<T, LinesError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("environment override: {0}")]
    Environment(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
