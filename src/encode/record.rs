//! Per-background record encoding.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! u16  stop count
//! u8   x1, y1, x2, y2
//! u8   layer type
//! u8   name length
//! [u8] name
//! [u16] palette indices (see `BackgroundDefinition::indexed_colours`)
//! ```

use crate::error::{BgError, Result};
use crate::types::{BackgroundDefinition, Palette};

use super::{INDEX_WIDTH, MAX_NAME_LEN};

/// Fixed header size before the name bytes.
pub const RECORD_HEADER_LEN: usize = 2 + 4 + 1 + 1;

/// Largest colour list whose stop count fits in a `u16`.
pub const MAX_STOPS: usize = u16::MAX as usize;

/// Encoded bytes of one background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    bytes: Vec<u8>,
    name_len: usize,
}

impl EncodedRecord {
    /// Encode a background against a finished palette.
    pub fn encode(bg: &BackgroundDefinition, palette: &Palette) -> Result<Self> {
        let mut bytes = Vec::with_capacity(record_len(bg));
        encode_record(bg, palette, &mut bytes)?;
        Ok(Self {
            bytes,
            name_len: bg.name.len(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes after the name: the palette indices.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[RECORD_HEADER_LEN + self.name_len..]
    }
}

/// Check the size limits of a background's header fields.
pub fn check_record(bg: &BackgroundDefinition) -> Result<()> {
    check_name(&bg.name)?;

    if bg.stop_count() > MAX_STOPS {
        return Err(BgError::TooManyStops {
            name: bg.name.clone(),
            count: bg.stop_count(),
        });
    }

    Ok(())
}

/// Check that a name fits its one-byte length field.
pub fn check_name(name: &str) -> Result<()> {
    if name.len() > MAX_NAME_LEN {
        return Err(BgError::NameTooLong {
            name: name.to_string(),
            len: name.len(),
        });
    }
    Ok(())
}

/// Encoded size of a background's record.
pub fn record_len(bg: &BackgroundDefinition) -> usize {
    RECORD_HEADER_LEN + bg.name.len() + bg.indexed_colours().len() * INDEX_WIDTH as usize
}

/// Append one background's record to `out`.
///
/// Nothing is appended when the record fails its checks or a colour
/// cannot be resolved.
pub fn encode_record(
    bg: &BackgroundDefinition,
    palette: &Palette,
    out: &mut Vec<u8>,
) -> Result<()> {
    check_record(bg)?;

    let indices = bg
        .indexed_colours()
        .iter()
        .map(|value| palette.resolve(value))
        .collect::<Result<Vec<u16>>>()?;

    out.reserve(record_len(bg));
    out.extend_from_slice(&(bg.stop_count() as u16).to_be_bytes());
    out.extend_from_slice(&bg.layer.direction());
    out.push(bg.layer.tag());
    out.push(bg.name.len() as u8);
    out.extend_from_slice(bg.name.as_bytes());
    for idx in indices {
        out.extend_from_slice(&idx.to_be_bytes());
    }

    Ok(())
}
