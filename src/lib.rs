//! bgpack - Background asset packer
//!
//! Encodes a catalogue of background definitions (solid fills, linear and
//! radial gradients, image placeholders) into one compact binary group
//! whose colours live in a single shared palette referenced by index.

pub mod catalogue;
pub mod cli;
pub mod encode;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use catalogue::{Catalogue, CatalogueFormat, DEFAULT_GROUP_NAME};
pub use encode::{encode_group, encode_record, EncodedGroup, EncodedRecord};
pub use error::{BgError, Result};
pub use manifest::Manifest;
pub use render::{asset_line, to_hex, write_asset};
pub use types::{BackgroundDefinition, Colour, ColourValue, LayerType, Palette};
pub use validation::{validate_catalogue, Diagnostic, Severity, ValidationResult};
