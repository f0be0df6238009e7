//! Asset group assembly: group header, shared palette, and records.

use crate::error::{BgError, Result};
use crate::types::{BackgroundDefinition, Palette};

use super::record::{check_name, check_record, encode_record, record_len};
use super::{INDEX_WIDTH, MAX_ENTRIES};

/// A fully encoded asset group.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedGroup {
    name: String,
    bytes: Vec<u8>,
    palette_size: usize,
    entry_count: usize,
}

impl EncodedGroup {
    /// Group name written in the header.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of unique colours in the shared palette.
    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Number of background records.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

/// Encode a catalogue into a single asset group.
///
/// Every size limit is checked before the first byte is written, and the
/// buffer is only returned once the whole group is encoded.
pub fn encode_group(group_name: &str, catalogue: &[BackgroundDefinition]) -> Result<EncodedGroup> {
    check_name(group_name)?;

    if catalogue.len() > MAX_ENTRIES {
        return Err(BgError::EntryCountOverflow {
            count: catalogue.len(),
        });
    }

    for bg in catalogue {
        check_record(bg)?;
    }

    // Pass 1: all indices are fixed before any record is encoded
    let palette = Palette::from_catalogue(catalogue)?;

    let mut out = Vec::with_capacity(group_len(group_name, &palette, catalogue));
    write_header(group_name, &palette, catalogue.len(), &mut out);

    // Pass 2
    for bg in catalogue {
        encode_record(bg, &palette, &mut out)?;
    }

    Ok(EncodedGroup {
        name: group_name.to_string(),
        bytes: out,
        palette_size: palette.len(),
        entry_count: catalogue.len(),
    })
}

/// Size of the group header up to and including the entry count.
pub fn header_len(group_name: &str, palette: &Palette) -> usize {
    1 + group_name.len() + 2 + palette.len() * 4 + 1 + 1
}

/// Total encoded size of a group.
pub fn group_len(group_name: &str, palette: &Palette, catalogue: &[BackgroundDefinition]) -> usize {
    header_len(group_name, palette) + catalogue.iter().map(record_len).sum::<usize>()
}

fn write_header(group_name: &str, palette: &Palette, entry_count: usize, out: &mut Vec<u8>) {
    out.push(group_name.len() as u8);
    out.extend_from_slice(group_name.as_bytes());

    out.extend_from_slice(&(palette.len() as u16).to_be_bytes());
    for colour in palette.colours() {
        out.extend_from_slice(&colour.value().to_be_bytes());
    }

    out.push(INDEX_WIDTH);
    out.push(entry_count as u8);
}
