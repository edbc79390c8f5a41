use predicates::str::contains;
use std::fs;

mod common;
use common::TestEnv;

fn env_with_entries(name: &str) -> TestEnv {
    let env = TestEnv::new(name);
    env.init();
    env.submit("John Smith", "2024-01-15", "Rose Garden", "3");
    env.submit("Jane Doe", "2024-02-10", "Meadow", "2.5");
    env
}

#[test]
fn export_csv_with_filter() {
    let env = env_with_entries("export_csv");
    let out = env.out("hours.csv");

    env.admin()
        .args(["export", "--format", "csv", "--file", &out, "--garden", "meadow"])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 1 entries, 2.5 h"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert!(lines.next().unwrap_or_default().starts_with("timestamp,volunteer_name,email"));
    let data: Vec<&str> = lines.collect();
    assert_eq!(data.len(), 1);
    assert!(data[0].contains("Jane Doe"));
    assert!(data[0].contains("2.5"));
}

#[test]
fn export_json_writes_envelope() {
    let env = env_with_entries("export_json");
    let out = env.out("hours.json");

    env.admin()
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json written")).expect("valid json");
    assert_eq!(json["success"], true);
    assert_eq!(json["summary"]["totalEntries"], 2);
    assert_eq!(json["data"].as_array().map(Vec::len), Some(2));
}

#[test]
fn export_xlsx_creates_workbook() {
    let env = env_with_entries("export_xlsx");
    let out = env.out("hours.xlsx");

    env.admin()
        .args(["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed: 2 entries, 5.5 h"));

    let bytes = fs::read(&out).expect("xlsx written");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_export_writes_nothing() {
    let env = env_with_entries("export_empty");
    let out = env.out("none.csv");

    env.admin()
        .args(["export", "--file", &out, "--name", "nobody"])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn existing_file_needs_force() {
    let env = env_with_entries("export_force");
    let out = env.out("hours.csv");
    fs::write(&out, "old").expect("seed file");

    env.admin()
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    env.admin()
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("John Smith"));
}

#[test]
fn relative_path_lands_in_working_dir() {
    let env = env_with_entries("export_relative");
    let dir = env.home.join("work");
    fs::create_dir_all(&dir).unwrap();

    env.admin()
        .current_dir(&dir)
        .args(["export", "--format", "json", "--file", "reports/out.json"])
        .assert()
        .success();

    assert!(dir.join("reports").join("out.json").exists());
}
