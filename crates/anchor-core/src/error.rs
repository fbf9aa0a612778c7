use crate::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid or unreadable lexicon data
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("'neutral' is the fallback category and cannot carry keywords")]
    NeutralEntry,
    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(Category),
    #[error("category '{0}' contains an empty keyword")]
    EmptyKeyword(Category),
    #[error("category '{category}' has weight {weight}, expected 1..=100")]
    InvalidWeight { category: Category, weight: i32 },
    #[error("lexicon has no negation words")]
    NoNegations,
    #[error("failed to read lexicon file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse TOML lexicon: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot load/save failure
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("snapshot I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed snapshot: {0}")]
    Format(#[from] serde_json::Error),
}

/// Configuration load/save failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine local data directory")]
    NoDataDir,
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
