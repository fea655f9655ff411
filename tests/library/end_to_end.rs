use std::fs;

use typed_read::{
    FileReader, InStream, Lockable, LockOperation, OpenMode, ReaderConfig, ScanValue, Stream,
};

#[test]
fn parses_a_small_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("report.txt");
    fs::write(&path, "1version: 3\nwidget 4 2.50\ngadget 1 10.00\n")?;

    let mut reader = FileReader::new(path.as_path())?;
    assert_eq!(reader.mode(), OpenMode::Read);

    assert!(reader.read_boolean()?);
    let header = reader.read_line()?.unwrap_or_default();
    assert_eq!(header, "version: 3\n");

    let mut total = 0.0;
    while let Some(row) = reader.read_array("%s %d %f")? {
        let qty = row[1].as_ref().and_then(ScanValue::as_int).unwrap_or(0);
        let price = row[2].as_ref().and_then(ScanValue::as_float).unwrap_or(0.0);
        total += qty as f64 * price;
    }
    assert!((total - 20.0).abs() < f64::EPSILON);
    assert!(reader.eof()?);

    reader.close()?;
    assert!(!reader.is_opened());
    Ok(())
}

#[test]
fn locked_reader_rereads_from_start() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.bin");
    fs::write(&path, b"42.5 tail")?;

    let config = ReaderConfig::builder()
        .lock(LockOperation::Shared)
        .build()?;
    let mut reader = FileReader::with_config(path.as_path(), config)?;

    assert_eq!(reader.read_float(4)?, 42.5);
    assert_eq!(reader.read_all(0)?, b"42.5 tail");
    reader.lock(LockOperation::Unlock, true)?;
    Ok(())
}
