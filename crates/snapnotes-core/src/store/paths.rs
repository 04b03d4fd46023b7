//! Well-known store locations

use std::path::PathBuf;

use crate::error::{Result, SnapError};

/// Directory under the user's home that holds the store
pub const STORE_DIR: &str = ".snapnotes";
/// Store file name inside `STORE_DIR`
pub const STORE_FILE: &str = "notes.json";

/// `~/.snapnotes/notes.json`
pub fn default_store_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SnapError::Other("unable to determine home directory".to_string()))?;
    Ok(home.join(STORE_DIR).join(STORE_FILE))
}
