#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use otrate::models::BellSchedule;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SCHOOL: &str = "Maple Grove";

pub const SCHEDULES_JSON: &str = r#"{
  "School Name": {
    "begin": "Begin", "recStart": "Recess Start", "recEnd": "Recess End",
    "lunchStart": "Lunch Start", "lunchEnd": "Lunch End", "dismiss": "Dismissal"
  },
  "Maple Grove": {
    "begin": "08:40", "recStart": "10:10", "recEnd": "10:25", "recLen": "15",
    "lunchStart": "12:05", "lunchEnd": "12:55", "dismiss": "15:05"
  },
  "Maple Leaf": {
    "begin": "08:15", "recStart": "09:55", "recEnd": "10:10",
    "lunchStart": "11:40", "lunchEnd": "12:40", "dismiss": "14:40"
  },
  "Red Maple": {
    "begin": "09:00", "recStart": "10:40", "recEnd": "11:00",
    "lunchStart": "12:20", "lunchEnd": "13:10", "dismiss": "15:30"
  },
  "Pine Grove": {
    "begin": "08:30", "recStart": "10:00", "recEnd": "10:15",
    "lunchStart": "11:50", "lunchEnd": "12:40", "dismiss": "14:55"
  }
}"#;

/// The school used by the worked examples: 08:40-15:05, recess 10:10-10:25,
/// lunch 12:05-12:55.
pub fn school() -> BellSchedule {
    BellSchedule::new("08:40", "10:10", "10:25", "12:05", "12:55", "15:05")
}

/// Isolated HOME so a developer's own config never leaks into tests
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_otrate_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

pub fn rti(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("otrate");
    cmd.env("HOME", test_home(name));
    cmd
}

/// Write the test schedule file inside the system temp dir
pub fn setup_schedules(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_school_times.json", name));
    fs::write(&path, SCHEDULES_JSON).expect("write schedules");
    path.to_string_lossy().to_string()
}
