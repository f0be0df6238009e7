//! Core domain types for bgpack.
//!
//! This module contains the colour, layer, background, and palette types
//! the encoder works on.

mod background;
mod colour;
mod layer;
mod palette;

pub use background::BackgroundDefinition;
pub use colour::{Colour, ColourValue};
pub use layer::{Direction, LayerType};
pub use palette::{Palette, MAX_PALETTE_SIZE};
