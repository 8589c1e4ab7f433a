#![allow(dead_code)]

use std::sync::Mutex;

use assert_cmd::Command;
use course_builder::wizard::{
    DoubtChannel, LearningMode, SelectionRecord, TagSet, TestSeriesTier,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated configuration home for one test.
pub fn test_home() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// The binary with an isolated home and colors off.
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("course_builder_cli").expect("binary built");
    cmd.env("COURSE_BUILDER_HOME", test_home())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn script_cli() -> Command {
    let mut cmd = cli();
    cmd.env("COURSE_BUILDER_CLI_SCRIPT", "1");
    cmd
}

/// Focus areas qa+varc, live classes, one mentor `m1`, basic tests and
/// WhatsApp doubt support.
pub fn scenario_a() -> SelectionRecord {
    SelectionRecord {
        focus_areas: TagSet::from_iter(["qa", "varc"]),
        learning_mode: LearningMode::Live,
        mentors: TagSet::from_iter(["m1"]),
        test_series: TestSeriesTier::Basic,
        doubt_solving: DoubtChannel::Whatsapp,
        ..SelectionRecord::default()
    }
}
