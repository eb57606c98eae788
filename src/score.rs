use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{APP_DIR_NAME, HIGH_SCORE_FILE_NAME};
use crate::error::GameError;

/// On-disk form of the high score: a bare JSON integer such as `7`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
struct HighScoreFile(u32);

/// Returns the platform-correct high score path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(HIGH_SCORE_FILE_NAME);
    base
}

/// Loads the high score from `path`.
///
/// A missing, unreadable or malformed file yields `0`; the player never
/// sees a persistence failure.
#[must_use]
pub fn load_high_score_from_path(path: &Path) -> u32 {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            info!("no high score at {}, starting from 0", path.display());
            return 0;
        }
        Err(error) => {
            warn!("cannot read high score {}: {error}", path.display());
            return 0;
        }
    };

    match serde_json::from_str::<HighScoreFile>(&raw) {
        Ok(HighScoreFile(score)) => score,
        Err(error) => {
            warn!("ignoring malformed high score {}: {error}", path.display());
            0
        }
    }
}

/// Saves the high score to `path`, creating parent directories when needed.
pub fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), GameError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(&HighScoreFile(score))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_high_score_from_path, save_high_score_to_path};

    #[test]
    fn saved_score_is_a_bare_integer() {
        let path = unique_test_path("bare");

        save_high_score_to_path(&path, 7).expect("score save should succeed");

        let raw = fs::read_to_string(&path).expect("saved file should be readable");
        assert_eq!(raw.trim(), "7");
        assert_eq!(load_high_score_from_path(&path), 7);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let path = unique_test_path("missing");
        assert_eq!(load_high_score_from_path(&path), 0);
    }

    #[test]
    fn malformed_score_file_returns_zero() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert_eq!(load_high_score_from_path(&path), 0);
        cleanup_test_path(&path);
    }

    #[test]
    fn negative_score_is_treated_as_malformed() {
        let path = unique_test_path("negative");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "-3").expect("test file write should succeed");

        assert_eq!(load_high_score_from_path(&path), 0);
        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("toroid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
