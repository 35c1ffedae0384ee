//! # Filesystem-backed key/value storage
//!
//! [`FileStorage`] is the [`KeyValueStore`] used on desktop, where there is no
//! browser `localStorage`. Each key is one file holding the raw value:
//!
//! ```text
//! <base_dir>/
//! ├── user            # {"name":"jane","email":"jane@example.com"}
//! └── preferences     # {"notifications":true,"dark_mode":false}
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `lumen` for the
//! base directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/lumen/` |
//! | Linux | `~/.local/share/lumen/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\lumen\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::storage::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StoreError::Backend(format!("invalid storage key `{key}`")));
        }
        Ok(self.base.join(key))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
