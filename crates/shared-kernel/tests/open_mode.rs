// crates/shared-kernel/tests/open_mode.rs
use typed_read_shared_kernel::{DomainError, OpenMode};

#[test]
fn parses_binary_and_bare_spellings() {
    assert_eq!("rb".parse::<OpenMode>().unwrap(), OpenMode::Read);
    assert_eq!("r".parse::<OpenMode>().unwrap(), OpenMode::Read);
    assert_eq!("r+b".parse::<OpenMode>().unwrap(), OpenMode::ReadWrite);
    assert_eq!("w+".parse::<OpenMode>().unwrap(), OpenMode::TruncateReadWrite);
    assert_eq!("c+b".parse::<OpenMode>().unwrap(), OpenMode::CreateOrOpenReadWrite);
}

#[test]
fn display_uses_binary_spelling() {
    for mode in OpenMode::ALL {
        let text = mode.to_string();
        assert!(text.ends_with('b'), "{text}");
        assert_eq!(text.parse::<OpenMode>().unwrap(), mode);
    }
}

#[test]
fn rejects_unknown_mode() {
    let err = "q".parse::<OpenMode>().unwrap_err();
    assert!(matches!(err, DomainError::UnsupportedMode { .. }));
}

#[test]
fn whitelist_message_lists_supported_modes() {
    let err = OpenMode::AppendWrite
        .ensure_one_of(&[OpenMode::Read])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Open mode are not supported; given ab. Only rb are supported."
    );
}

#[test]
fn readability() {
    assert!(OpenMode::Read.is_readable());
    assert!(!OpenMode::Read.is_writable());
    assert!(OpenMode::AppendReadWrite.is_readable());
    assert!(!OpenMode::CreateWrite.is_readable());
}
