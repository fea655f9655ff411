// crates/infra/src/persistence/opener.rs
use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
};

use typed_read_domain::ReaderConfig;
use typed_read_shared_kernel::{DomainError, InfrastructureError, Result, StreamName};

use super::lock::apply_lock;

/// Map a stream name onto a local path that exists.
///
/// # Errors
///
/// [`DomainError::UnsupportedScheme`] for URLs other than `file://`, and
/// [`InfrastructureError::FileDoesNotExist`] for missing paths.
pub fn resolve(name: &StreamName) -> Result<PathBuf> {
    if !name.is_local_file() {
        return Err(DomainError::UnsupportedScheme {
            scheme: name.scheme().unwrap_or_default().to_string(),
            name: name.to_string(),
        }
        .into());
    }

    let path = name.path();
    if !path.exists() {
        log::warn!("refusing to open {name}: file does not exist");
        return Err(InfrastructureError::FileDoesNotExist {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(path.to_path_buf())
}

pub(super) fn open_file(name: &StreamName, config: &ReaderConfig) -> Result<BufReader<File>> {
    let path = resolve(name)?;
    let file = File::open(&path).map_err(|source| InfrastructureError::FileRead {
        name: name.to_string(),
        source,
    })?;

    if let Some(operation) = config.lock {
        apply_lock(&file, name, operation, config.blocking_lock)?;
    }

    // serde や構造体リテラル経由の 0 はビルダー検証を通らない
    let capacity = config.buffer_capacity.max(1);
    Ok(BufReader::with_capacity(capacity, file))
}
