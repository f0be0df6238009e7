//! Output of encoded asset groups.

mod hex;

pub use hex::{asset_line, header_preview, to_hex, write_asset, HEADER_PREVIEW_LEN};
