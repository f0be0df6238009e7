//! Binary encoding of background catalogues.
//!
//! A group is written as a name header, the shared palette table, an
//! index-width marker with the entry count, then one record per
//! background. Every multi-byte integer is big-endian.

mod group;
mod record;

pub use group::{encode_group, group_len, header_len, EncodedGroup};
pub use record::{
    check_name, check_record, encode_record, record_len, EncodedRecord, MAX_STOPS,
    RECORD_HEADER_LEN,
};

/// Width in bytes of every palette index.
pub const INDEX_WIDTH: u8 = 2;

/// Longest name, in UTF-8 bytes, that fits a one-byte length field.
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Most backgrounds a group can hold.
pub const MAX_ENTRIES: usize = u8::MAX as usize;
