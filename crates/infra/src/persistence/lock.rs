// crates/infra/src/persistence/lock.rs
use std::{fs::File, io::ErrorKind};

use fs2::FileExt;
use typed_read_ports::{Lockable, Stream};
use typed_read_shared_kernel::{InfrastructureError, LockOperation, Result, StreamName};

use super::file_reader::FileReader;

pub(super) fn apply_lock(
    file: &File,
    name: &StreamName,
    operation: LockOperation,
    blocking: bool,
) -> Result<()> {
    let result = match operation {
        // 読み取り専用ストリームに排他ロックは取らせない
        LockOperation::Exclusive => {
            return Err(InfrastructureError::LockNotAllowed {
                operation: operation.to_string(),
                name: name.to_string(),
            }
            .into());
        }
        // std の同名メソッドと衝突しないようトレイト経由で呼ぶ
        LockOperation::Shared if blocking => FileExt::lock_shared(file),
        LockOperation::Shared => FileExt::try_lock_shared(file),
        LockOperation::Unlock => FileExt::unlock(file),
    };

    match result {
        Ok(()) => {
            log::debug!("{operation} lock applied to {name}");
            Ok(())
        }
        Err(source) => {
            if source.kind() == ErrorKind::WouldBlock {
                log::debug!("{operation} lock on {name} is contended");
            }
            Err(InfrastructureError::Lock {
                operation: operation.to_string(),
                name: name.to_string(),
                source,
            }
            .into())
        }
    }
}

impl Lockable for FileReader {
    fn lock(&mut self, operation: LockOperation, blocking: bool) -> Result<()> {
        let Some(file) = self.file() else {
            return Err(InfrastructureError::NotOpen {
                name: self.name().to_string(),
            }
            .into());
        };
        apply_lock(file, self.name(), operation, blocking)
    }
}
