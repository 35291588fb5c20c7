use serde::{Deserialize, Serialize};

use jianji_storage::{delete_state, load_state, save_state};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Record {
    name: String,
    total: i64,
}

const KEY: &str = "test_record";

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let loaded: Option<Record> = load_state(dir.path(), KEY).unwrap();
    assert_eq!(loaded, None);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let record = Record {
        name: "张三".to_string(),
        total: 42,
    };
    save_state(dir.path(), KEY, &record).unwrap();
    let loaded: Option<Record> = load_state(dir.path(), KEY).unwrap();
    assert_eq!(loaded, Some(record));
}

#[test]
fn save_overwrites_previous_blob() {
    let dir = tempfile::tempdir().unwrap();
    save_state(dir.path(), KEY, &Record::default()).unwrap();
    let updated = Record {
        name: "updated".to_string(),
        total: 7,
    };
    save_state(dir.path(), KEY, &updated).unwrap();
    let loaded: Option<Record> = load_state(dir.path(), KEY).unwrap();
    assert_eq!(loaded, Some(updated));
}

#[test]
fn malformed_blob_loads_as_none_not_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{KEY}.json")), "{not valid json").unwrap();
    let loaded: Option<Record> = load_state(dir.path(), KEY).unwrap();
    assert_eq!(loaded, None);
}

#[test]
fn delete_removes_the_blob_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    save_state(dir.path(), KEY, &Record::default()).unwrap();
    delete_state(dir.path(), KEY).unwrap();
    let loaded: Option<Record> = load_state(dir.path(), KEY).unwrap();
    assert_eq!(loaded, None);
    delete_state(dir.path(), KEY).unwrap();
}

#[test]
fn no_temp_file_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    save_state(dir.path(), KEY, &Record::default()).unwrap();
    assert!(!dir.path().join(format!("{KEY}.json.tmp")).exists());
}
