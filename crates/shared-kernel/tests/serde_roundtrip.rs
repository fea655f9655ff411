// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use typed_read_shared_kernel::{Length, LockOperation, OpenMode, ScanValue};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    mode: OpenMode,
    length: Length,
    lock: LockOperation,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        mode: OpenMode::Read,
        length: Length::from(16),
        lock: LockOperation::Shared,
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"mode":"rb","length":16,"lock":"shared"}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn negative_length_is_rejected_on_deserialize() {
    let result: Result<Length, _> = serde_json::from_str("-1");
    assert!(result.is_err());
}

#[test]
fn scan_values_are_untagged() {
    let values = vec![
        Some(ScanValue::Int(7)),
        Some(ScanValue::Float(1.5)),
        Some(ScanValue::from("abc")),
        None,
    ];
    let json = serde_json::to_string(&values).expect("serializes");
    assert_eq!(json, r#"[7,1.5,"abc",null]"#);
}
