use std::ffi::OsString;
use std::path::Path;

use crate::error::{Error, Result};

pub const BACKGROUND_PREFIX: &str = "background_";
pub const THUMBNAIL_PREFIX: &str = "thumbnail_";
pub const WEBP_EXTENSION: &str = "webp";

/// `background_<stem>.webp`, where the stem drops only the last extension.
pub fn background_file_name(source: &Path) -> Result<OsString> {
    let stem = source
        .file_stem()
        .ok_or_else(|| Error::invalid("source", source.display()))?;
    let mut name = OsString::from(BACKGROUND_PREFIX);
    name.push(stem);
    name.push(".");
    name.push(WEBP_EXTENSION);
    Ok(name)
}

/// `thumbnail_<file name>`, extension kept as-is.
pub fn thumbnail_file_name(source: &Path) -> Result<OsString> {
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::invalid("source", source.display()))?;
    let mut name = OsString::from(THUMBNAIL_PREFIX);
    name.push(file_name);
    Ok(name)
}
