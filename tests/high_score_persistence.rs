use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use toroid_snake::score::{load_high_score_from_path, save_high_score_to_path};
use toroid_snake::settings::SessionSettings;

fn scratch_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("toroid-snake-{label}-{nanos}"))
}

#[test]
fn saved_high_score_survives_a_restart() {
    let dir = scratch_dir("restart");
    let path = dir.join("nested").join("high_score.json");

    let mut settings = SessionSettings::default();
    settings.record_length(7);
    save_high_score_to_path(&path, settings.high_score()).expect("save should succeed");

    let reloaded = SessionSettings::with_high_score(load_high_score_from_path(&path));
    assert_eq!(reloaded.high_score(), 7);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_or_corrupt_file_loads_as_zero() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("high_score.json");

    save_high_score_to_path(&path, 7).expect("save should succeed");
    fs::remove_file(&path).expect("file should be removable");
    assert_eq!(load_high_score_from_path(&path), 0);

    fs::write(&path, "{\"high_score\": ").expect("write should succeed");
    assert_eq!(load_high_score_from_path(&path), 0);

    let _ = fs::remove_dir_all(&dir);
}
