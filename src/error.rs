use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected game configuration values.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("board {width_px}x{height_px} px is smaller than one {cell_size} px cell")]
    BoardTooSmall {
        width_px: u32,
        height_px: u32,
        cell_size: u32,
    },
    #[error("board {width_px}x{height_px} px exceeds the {max_px} px coordinate limit")]
    BoardTooLarge {
        width_px: u32,
        height_px: u32,
        max_px: u32,
    },
    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("minimum tick interval {min_ms} ms exceeds the initial interval {initial_ms} ms")]
    MinIntervalAboveInitial { min_ms: u64, initial_ms: u64 },
}

/// Failures at the application edges: config loading, logging, terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
