//! Job-file loading, application, and write-to-disk integration tests.

use assert_fs::prelude::*;
use launchplist_core::{
    job, read_plist, write_plist_at, write_plist_to, LaunchError, LaunchPlist,
};
use plist::Value;
use predicates::prelude::predicate;

const FULL_JOB: &str = r#"
Label: com.example.backup
UserName: backup
ProgramArguments:
  - /usr/local/bin/backup
  - --quiet
RunAtLoad: false
KeepAlive:
  SuccessfulExit: false
EnvironmentVariables:
  RESTIC_REPOSITORY: /Volumes/Backup
ProcessType: Background
LimitLoadToSessionType: Aqua
inetdCompatibility:
  Wait: true
Nice: "10"
StartCalendarInterval:
  - { Hour: 3, Minute: 30 }
  - { Weekday: Sunday, Hour: 12 }
StandardOutPath: /tmp/backup.log
StandardErrorPath: /tmp/backup.err
"#;

// ---------------------------------------------------------------------------
// 1. Loading
// ---------------------------------------------------------------------------

#[test]
fn load_missing_job_file_is_io_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = job::load_job(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, LaunchError::Io { .. }), "got: {err}");
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn load_corrupt_yaml_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("broken.yaml");
    file.write_str("Label: [unclosed\n").expect("write");

    let err = job::load_job(file.path()).unwrap_err();
    assert!(matches!(err, LaunchError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn json_job_files_parse_too() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("job.json");
    file.write_str(r#"{"Label": "com.example.json", "StartInterval": 60}"#)
        .expect("write");

    let plist = job::load_job(file.path())
        .expect("load")
        .to_plist()
        .expect("apply");
    assert_eq!(plist.label(), Some("com.example.json"));
    assert_eq!(
        plist.get("StartInterval").and_then(Value::as_signed_integer),
        Some(60)
    );
}

// ---------------------------------------------------------------------------
// 2. Applying
// ---------------------------------------------------------------------------

#[test]
fn full_job_produces_expected_record() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("backup.yaml");
    file.write_str(FULL_JOB).expect("write");

    let plist = job::load_job(file.path())
        .expect("load")
        .to_plist()
        .expect("apply");

    assert_eq!(plist.get("Nice").and_then(Value::as_signed_integer), Some(10));
    assert_eq!(
        plist
            .get("inetdCompatibility")
            .and_then(Value::as_dictionary)
            .and_then(|d| d.get("Wait"))
            .and_then(Value::as_boolean),
        Some(true)
    );
    assert!(matches!(plist.get("KeepAlive"), Some(Value::Dictionary(_))));

    let calendar = plist.calendar_intervals();
    let entries = calendar.entries();
    let field = |i: usize, key: &str| entries[i].get(key).and_then(Value::as_signed_integer);
    assert_eq!(entries.len(), 2);
    assert_eq!(field(0, "Hour"), Some(3));
    assert_eq!(field(0, "Minute"), Some(30));
    assert_eq!(field(1, "Weekday"), Some(0));
}

#[test]
fn apply_onto_seeded_record_appends_calendar() {
    let mut base = LaunchPlist::new();
    base.set_label("com.example.seeded")
        .unwrap()
        .add_calendar_interval(serde_json::json!({"Minute": 5}))
        .unwrap();

    let spec = job::parse_job(
        "StartCalendarInterval: { Minute: 35 }\n",
        std::path::Path::new("inline.yaml"),
    )
    .expect("parse");
    spec.apply(&mut base).expect("apply");

    assert_eq!(base.label(), Some("com.example.seeded"));
    assert_eq!(base.calendar_intervals().len(), 2);
}

// ---------------------------------------------------------------------------
// 3. Writing
// ---------------------------------------------------------------------------

#[test]
fn written_plist_contains_launchd_fields() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let plist = job::parse_job(FULL_JOB, std::path::Path::new("backup.yaml"))
        .expect("parse")
        .to_plist()
        .expect("apply");

    let agents = home.child("Library/LaunchAgents");
    let path = write_plist_at(agents.path(), &plist).expect("write");

    let file = agents.child("com.example.backup.plist");
    file.assert(predicate::path::exists());
    file.assert(predicate::str::contains("<key>ProgramArguments</key>"));
    file.assert(predicate::str::contains("<string>/usr/local/bin/backup</string>"));

    let back = read_plist(&path).expect("read back");
    assert_eq!(back.record(), plist.record());
}

#[test]
fn write_to_explicit_path_creates_parents() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let mut plist = LaunchPlist::new();
    plist.set_label("com.example.nested").unwrap();

    let target = dir.child("a/b/custom-name.plist");
    write_plist_to(target.path(), &plist).expect("write");
    target.assert(predicate::str::contains("com.example.nested"));
    dir.child("a/b/custom-name.plist.tmp")
        .assert(predicate::path::missing());
}

#[test]
fn build_job_wraps_validation_errors() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("bad.yaml");
    file.write_str("Umask: lots\n").expect("write");

    let err = job::build_job(file.path()).unwrap_err();
    match err {
        LaunchError::Validation(v) => assert_eq!(v.field, "Umask"),
        other => panic!("expected validation error, got {other:?}"),
    }
}
