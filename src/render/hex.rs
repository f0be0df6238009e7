//! Hex text output for encoded groups.
//!
//! The asset file holds a single line: `<group>: 0x<hex>`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BgError, Result};

/// Number of leading bytes shown by [`header_preview`].
pub const HEADER_PREVIEW_LEN: usize = 12;

/// Lower-case hex with a `0x` prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// The asset file line for a group, newline included.
pub fn asset_line(group: &str, bytes: &[u8]) -> String {
    format!("{}: {}\n", group, to_hex(bytes))
}

/// Hex of the first [`HEADER_PREVIEW_LEN`] bytes, if there are that many.
pub fn header_preview(bytes: &[u8]) -> Option<String> {
    bytes.get(..HEADER_PREVIEW_LEN).map(to_hex)
}

/// Write the asset line to `dir/filename`, creating `dir` if needed.
pub fn write_asset(dir: &Path, filename: &str, group: &str, bytes: &[u8]) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| BgError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let path = dir.join(filename);
    fs::write(&path, asset_line(group, bytes)).map_err(|e| BgError::Io {
        path: path.clone(),
        message: format!("Failed to write asset: {}", e),
    })?;

    Ok(path)
}
