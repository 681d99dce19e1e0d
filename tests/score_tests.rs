use std::fs;

use battleship_solo::{ScoreError, ScoreLedger, SCORE_TABLE_LIMIT};
use tempfile::{tempdir, NamedTempFile};

fn names(ledger: &ScoreLedger) -> Vec<&str> {
    ledger.records().iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_load_mixed_records_and_add() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"[{"name":"Ann","seconds":95},{"name":"Bo","time":"01:10"}]"#,
    )
    .unwrap();

    let mut ledger = ScoreLedger::load(file.path());
    assert_eq!(names(&ledger), vec!["Bo", "Ann"]);
    assert_eq!(ledger.records()[0].seconds, 70);
    assert_eq!(ledger.records()[0].time, "01:10");

    assert_eq!(ledger.add_record("Cid", 50).unwrap(), Some(0));
    assert_eq!(names(&ledger), vec!["Cid", "Bo", "Ann"]);

    let reloaded = ScoreLedger::load(file.path());
    assert_eq!(reloaded.records(), ledger.records());
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 3);
    assert_eq!(raw[0]["name"], "Cid");
    assert_eq!(raw[0]["seconds"], 50);
    assert_eq!(raw[0]["time"], "00:50");
}

#[test]
fn test_table_is_capped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    let mut ledger = ScoreLedger::load(&path);
    assert!(ledger.records().is_empty());

    for i in 0..SCORE_TABLE_LIMIT as u64 + 3 {
        ledger.add_record(&format!("p{i}"), 100 - i).unwrap();
    }
    assert_eq!(ledger.records().len(), SCORE_TABLE_LIMIT);
    assert_eq!(ledger.records()[0].seconds, 100 - (SCORE_TABLE_LIMIT as u64 + 2));
    // slower than everyone in a full table
    assert_eq!(ledger.add_record("slow", 5000).unwrap(), None);
    assert!(!names(&ledger).contains(&"slow"));
    assert_eq!(ScoreLedger::load(&path).records().len(), SCORE_TABLE_LIMIT);
}

#[test]
fn test_equal_times_keep_arrival_order() {
    let dir = tempdir().unwrap();
    let mut ledger = ScoreLedger::load(dir.path().join("records.json"));
    ledger.add_record("first", 60).unwrap();
    assert_eq!(ledger.add_record("second", 60).unwrap(), Some(1));
    assert_eq!(names(&ledger), vec!["first", "second"]);
}

#[test]
fn test_names_are_trimmed_and_required() {
    let dir = tempdir().unwrap();
    let mut ledger = ScoreLedger::load(dir.path().join("records.json"));
    assert!(matches!(ledger.add_record("   ", 10), Err(ScoreError::EmptyName)));
    ledger.add_record("  Dee ", 10).unwrap();
    assert_eq!(names(&ledger), vec!["Dee"]);
}

#[test]
fn test_bad_files_load_empty() {
    let dir = tempdir().unwrap();
    for (file, text) in [
        ("empty.json", ""),
        ("garbage.json", "{not json"),
        ("object.json", r#"{"name":"Ann","seconds":3}"#),
        ("junk.json", r#"[1, "x", {"name":""}, {"time":"00:01"}, {"name":"Eve","time":"soon"}]"#),
    ] {
        let path = dir.path().join(file);
        fs::write(&path, text).unwrap();
        assert!(ScoreLedger::load(&path).records().is_empty(), "{file}");
    }
    assert!(ScoreLedger::load(dir.path().join("missing.json")).records().is_empty());
}

#[test]
fn test_write_failure_is_swallowed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("records.json");
    let mut ledger = ScoreLedger::load(&path);
    assert_eq!(ledger.add_record("Fay", 42).unwrap(), Some(0));
    assert_eq!(names(&ledger), vec!["Fay"]);
    assert!(ledger.save().is_err());
    assert!(!path.exists());
}
