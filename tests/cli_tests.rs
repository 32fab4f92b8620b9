use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{SCHOOL, rti, setup_schedules};

#[test]
fn test_calc_full_day_default() {
    let schedules = setup_schedules("calc_full_day");

    rti("calc_full_day")
        .args(["--schedules", &schedules, "calc", SCHOOL])
        .assert()
        .success()
        .stdout(contains("385 mins"))
        .stdout(contains("320 mins ÷ 300 = 1.0667"))
        .stdout(contains("305.47"))
        .stdout(contains("Minimum rule").not());
}

#[test]
fn test_calc_morning_applies_minimum() {
    let schedules = setup_schedules("calc_morning");

    rti("calc_morning")
        .args([
            "--schedules",
            &schedules,
            "calc",
            SCHOOL,
            "--in",
            "08:40",
            "--out",
            "10:00",
        ])
        .assert()
        .success()
        .stdout(contains("80 mins"))
        .stdout(contains("0.5 - Minimum for any assignment"))
        .stdout(contains("143.19"));
}

#[test]
fn test_calc_json_through_lunch() {
    let schedules = setup_schedules("calc_json");

    let out = rti("calc_json")
        .args([
            "--schedules",
            &schedules,
            "calc",
            SCHOOL,
            "--in",
            "11:50",
            "--out",
            "13:10",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["instructionalMinutes"], 30);
    assert_eq!(v["lunchMinutes"], 50);
    assert_eq!(v["minRuleApplied"], "through-lunch");
    assert!((v["payPoint"].as_f64().unwrap() - 0.7).abs() < 1e-9);
}

#[test]
fn test_calc_preset_pm_only_with_custom_rate() {
    let schedules = setup_schedules("calc_pm");

    // 12:55-15:05 = 130 mins → 0.4333 → floored to 0.5 → 100.00
    rti("calc_pm")
        .args([
            "--schedules",
            &schedules,
            "calc",
            SCHOOL,
            "--preset",
            "pm-only",
            "--rate",
            "200",
        ])
        .assert()
        .success()
        .stdout(contains("12:55 - 15:05"))
        .stdout(contains("130 mins"))
        .stdout(contains("$100.00"));
}

#[test]
fn test_calc_rejects_reversed_interval() {
    let schedules = setup_schedules("calc_reversed");

    rti("calc_reversed")
        .args([
            "--schedules",
            &schedules,
            "calc",
            SCHOOL,
            "--in",
            "14:00",
            "--out",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid interval"));
}

#[test]
fn test_calc_rejects_bad_time() {
    let schedules = setup_schedules("calc_bad_time");

    rti("calc_bad_time")
        .args([
            "--schedules",
            &schedules,
            "calc",
            SCHOOL,
            "--in",
            "nine",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_calc_unknown_school_suggests_names() {
    let schedules = setup_schedules("calc_unknown");

    rti("calc_unknown")
        .args(["--schedules", &schedules, "calc", "Grove"])
        .assert()
        .failure()
        .stdout(contains("Did you mean"))
        .stdout(contains("Maple Grove").and(contains("Pine Grove")))
        .stderr(contains("Unknown school: Grove"));
}

#[test]
fn test_school_lookup_ignores_case() {
    let schedules = setup_schedules("calc_case");

    rti("calc_case")
        .args(["--schedules", &schedules, "calc", "maple grove", "--json"])
        .assert()
        .success()
        .stdout(contains("\"instructionalMinutes\": 320"));
}

#[test]
fn test_schools_search_ranks_prefix_first() {
    let schedules = setup_schedules("schools_search");

    let out = rti("schools_search")
        .args(["--schedules", &schedules, "schools", "--search", "maple"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let leaf = text.find("Maple Leaf").expect("Maple Leaf listed");
    let grove = text.find("Maple Grove").expect("Maple Grove listed");
    let red = text.find("Red Maple").expect("Red Maple listed");
    assert!(leaf < grove, "shorter prefix match first");
    assert!(grove < red, "prefix matches before inner matches");
    assert!(!text.contains("Pine Grove"));
    assert!(!text.contains("School Name"));
}

#[test]
fn test_info_shows_schedule_and_timeline() {
    let schedules = setup_schedules("info");

    rti("info")
        .args(["--schedules", &schedules, "info", SCHOOL])
        .assert()
        .success()
        .stdout(contains("10:10 - 10:25"))
        .stdout(contains("12:05 - 12:55"))
        .stdout(contains("320 mins"))
        .stdout(contains("7:40"));
}

#[test]
fn test_timeline_reports_selection() {
    let schedules = setup_schedules("timeline");

    rti("timeline")
        .args([
            "--schedules",
            &schedules,
            "timeline",
            SCHOOL,
            "--in",
            "9:00",
            "--out",
            "11:30",
            "--width",
            "40",
        ])
        .assert()
        .success()
        .stdout(contains("Selection: 09:00 → 11:30"));
}

#[test]
fn test_missing_schedule_file() {
    rti("missing_schedules")
        .args(["--schedules", "/nonexistent/otrate.json", "schools"])
        .assert()
        .failure()
        .stderr(contains("schedule file not found"));
}

#[test]
fn test_init_writes_starter_schedules() {
    let mut path = std::env::temp_dir();
    path.push("init_starter_school_times.json");
    std::fs::remove_file(&path).ok();
    let p = path.to_string_lossy().to_string();

    rti("init")
        .args(["--schedules", &p, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("schools available"));

    assert!(path.exists());

    rti("init_then_list")
        .args(["--schedules", &p, "schools"])
        .assert()
        .success()
        .stdout(contains("Example Elementary"));
}

#[test]
fn test_calc_rejects_non_finite_rate() {
    let schedules = setup_schedules("calc_nan_rate");

    for rate in ["NaN", "inf"] {
        rti("calc_nan_rate")
            .args([
                "--schedules",
                &schedules,
                "calc",
                SCHOOL,
                "--rate",
                rate,
                "--json",
            ])
            .assert()
            .failure()
            .stdout(contains("payRate").not())
            .stderr(contains("base rate must be a positive number"));
    }
}

#[test]
fn test_timeline_rejects_reversed_selection() {
    let schedules = setup_schedules("timeline_reversed");

    rti("timeline_reversed")
        .args([
            "--schedules",
            &schedules,
            "timeline",
            SCHOOL,
            "--in",
            "13:00",
            "--out",
            "09:00",
        ])
        .assert()
        .failure()
        .stdout(contains("Selection").not())
        .stderr(contains("Invalid interval"));
}

#[test]
fn test_calc_header_uses_stored_name() {
    let schedules = setup_schedules("calc_header_name");

    rti("calc_header_name")
        .args(["--schedules", &schedules, "calc", "maple grove"])
        .assert()
        .success()
        .stdout(contains("=== Maple Grove 08:40 - 15:05 ==="))
        .stdout(contains("maple grove").not());
}
