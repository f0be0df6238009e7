//! Shared palette deduplicated across a whole catalogue.

use std::collections::HashMap;

use crate::error::{BgError, Result};

use super::{BackgroundDefinition, Colour, ColourValue};

/// Largest palette whose size and indices fit in a `u16`.
pub const MAX_PALETTE_SIZE: usize = u16::MAX as usize;

/// Unique colours in first-occurrence order, with a reverse index.
///
/// Indices never change once assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
    index: HashMap<Colour, u16>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the palette for a catalogue.
    ///
    /// Entries are scanned in order and colours in listed order, so a
    /// colour's position is decided by its first occurrence.
    pub fn from_catalogue(catalogue: &[BackgroundDefinition]) -> Result<Self> {
        let mut palette = Self::new();
        for bg in catalogue {
            for value in &bg.colours {
                palette.insert(Colour::normalize(value)?)?;
            }
        }
        Ok(palette)
    }

    /// Insert a colour, returning its index. Existing colours keep theirs.
    pub fn insert(&mut self, colour: Colour) -> Result<u16> {
        if let Some(&idx) = self.index.get(&colour) {
            return Ok(idx);
        }

        if self.colours.len() >= MAX_PALETTE_SIZE {
            return Err(BgError::PaletteOverflow {
                count: self.colours.len() + 1,
            });
        }

        let idx = self.colours.len() as u16;
        self.colours.push(colour);
        self.index.insert(colour, idx);
        Ok(idx)
    }

    /// Index of a canonical colour.
    pub fn index_of(&self, colour: Colour) -> Option<u16> {
        self.index.get(&colour).copied()
    }

    /// Index of a raw colour value after normalisation.
    ///
    /// A colour missing from the palette means it was built from a
    /// different catalogue.
    pub fn resolve(&self, value: &ColourValue) -> Result<u16> {
        let colour = Colour::normalize(value)?;
        self.index_of(colour)
            .ok_or_else(|| BgError::MissingPaletteColour {
                colour: colour.to_string(),
            })
    }

    /// Colour at an index.
    pub fn get(&self, idx: u16) -> Option<Colour> {
        self.colours.get(idx as usize).copied()
    }

    /// Colours in index order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Iterate `(index, colour)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Colour)> + '_ {
        self.colours.iter().enumerate().map(|(i, c)| (i as u16, *c))
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayerType;

    fn bg(layer: LayerType, colours: &[&str]) -> BackgroundDefinition {
        BackgroundDefinition::new("test", layer, colours.iter().copied())
    }

    #[test]
    fn test_palette_new() {
        let palette = Palette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.get(0), None);
    }

    #[test]
    fn test_dedup_across_entries_and_forms() {
        let catalogue = vec![
            bg(LayerType::Solid, &["#000000"]),
            bg(LayerType::SmoothVertical, &["000000FF", "#ffffff"]),
            bg(LayerType::Radial, &["0xFFFFFFFF", "#000000"]),
        ];
        let palette = Palette::from_catalogue(&catalogue).unwrap();

        assert_eq!(palette.colours(), &[Colour::BLACK, Colour::WHITE]);
        assert_eq!(palette.index_of(Colour::BLACK), Some(0));
        assert_eq!(palette.index_of(Colour::WHITE), Some(1));
    }

    #[test]
    fn test_first_occurrence_order() {
        let catalogue = vec![
            bg(LayerType::SmoothDown, &["#111111", "#222222"]),
            bg(LayerType::SmoothDown, &["#333333", "#111111"]),
        ];
        let palette = Palette::from_catalogue(&catalogue).unwrap();

        let order: Vec<u32> = palette.colours().iter().map(|c| c.value()).collect();
        assert_eq!(order, vec![0x111111FF, 0x222222FF, 0x333333FF]);
    }

    #[test]
    fn test_image_colours_enter_palette() {
        let catalogue = vec![bg(LayerType::Image, &["#123456"])];
        let palette = Palette::from_catalogue(&catalogue).unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_invalid_colour_aborts() {
        let catalogue = vec![bg(LayerType::Solid, &["#12"])];
        assert!(matches!(
            Palette::from_catalogue(&catalogue),
            Err(BgError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_insert_existing_keeps_index() {
        let mut palette = Palette::new();
        assert_eq!(palette.insert(Colour::WHITE).unwrap(), 0);
        assert_eq!(palette.insert(Colour::BLACK).unwrap(), 1);
        assert_eq!(palette.insert(Colour::WHITE).unwrap(), 0);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_overflow() {
        let mut palette = Palette::new();
        for n in 0..MAX_PALETTE_SIZE as u32 {
            palette.insert(Colour::from_u32(n)).unwrap();
        }
        // Re-inserting at capacity is fine
        assert_eq!(palette.insert(Colour::from_u32(0)).unwrap(), 0);
        assert!(matches!(
            palette.insert(Colour::from_u32(u32::MAX)),
            Err(BgError::PaletteOverflow { count: 65536 })
        ));
    }

    #[test]
    fn test_resolve_missing_colour() {
        let palette = Palette::new();
        assert!(matches!(
            palette.resolve(&ColourValue::hex("#ffffff")),
            Err(BgError::MissingPaletteColour { .. })
        ));
    }
}
