use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Failed to read results file {path}: {source}")]
    ResultsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse results file {path}: {detail}")]
    ResultsParse { path: PathBuf, detail: String },

    #[error("Failed to write results file {path}: {source}")]
    ResultsWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write chart {path}: {source}")]
    ChartWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No results found!")]
    NoResults,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("Repetition count must be at least 1")]
    InvalidRuns,
}
