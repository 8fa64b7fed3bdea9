use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger; the terminal itself is owned by the game screen.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    let file = create_log_file(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;

    Ok(())
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    File::create(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{create_log_file, default_log_path};

    #[test]
    fn default_path_ends_with_log_file_name() {
        let path = default_log_path();

        assert!(path.ends_with("grid-snake/grid-snake.log"));
    }

    #[test]
    fn log_file_parent_directories_are_created() {
        let dir = std::env::temp_dir().join(format!("grid-snake-log-test-{}", std::process::id()));
        let path = dir.join("nested").join("game.log");

        create_log_file(&path).expect("log file should be creatable");

        assert!(path.exists());
        let _ = fs::remove_dir_all(dir);
    }
}
