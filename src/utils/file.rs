use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use crate::core::library::LibraryResult;
use crate::core::repository::Loaded;

pub(crate) fn read_json_array<T: DeserializeOwned>(path: &Path) -> LibraryResult<Loaded<T>> {
    // bytes, not text: content that is not utf-8 is malformed data, not an io failure
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no file at {}, starting empty", path.display());
            return Ok(Loaded::missing());
        }
        Err(err) => return Err(err.into()),
    };
    match serde_json::from_slice::<Vec<T>>(raw.as_slice()) {
        Ok(records) => Ok(Loaded::records(records)),
        Err(err) => {
            warn!("invalid json in {}, starting empty: {}", path.display(), err);
            Ok(Loaded::malformed(err.to_string().as_str()))
        }
    }
}

pub(crate) fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> LibraryResult<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(records.len())
}
