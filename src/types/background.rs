//! Background definitions, the input records of an asset group.

use serde::{Deserialize, Serialize};

use super::{ColourValue, LayerType};

/// A single background entry in a catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundDefinition {
    /// Human-readable name, stored as UTF-8 in the record
    pub name: String,

    /// Layer type tag
    #[serde(alias = "layerType", alias = "type")]
    pub layer: LayerType,

    /// Colour stops in listed order (empty for Image and None)
    #[serde(default, alias = "palette")]
    pub colours: Vec<ColourValue>,
}

impl BackgroundDefinition {
    /// Create a new background definition.
    pub fn new<C: Into<ColourValue>>(
        name: impl Into<String>,
        layer: LayerType,
        colours: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            name: name.into(),
            layer,
            colours: colours.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a single-colour Solid background.
    pub fn solid(name: impl Into<String>, colour: impl Into<ColourValue>) -> Self {
        Self::new(name, LayerType::Solid, [colour])
    }

    /// Create an Image placeholder with no colour data.
    pub fn image(name: impl Into<String>) -> Self {
        Self::new(name, LayerType::Image, Vec::<ColourValue>::new())
    }

    /// Number of colour stops the record header declares.
    ///
    /// Image entries always declare zero, whatever colours are attached.
    pub fn stop_count(&self) -> usize {
        match self.layer {
            LayerType::Image => 0,
            _ => self.colours.len(),
        }
    }

    /// Colours that the record payload references by index.
    pub fn indexed_colours(&self) -> &[ColourValue] {
        match self.layer {
            LayerType::Image => &[],
            LayerType::Solid => &self.colours[..self.colours.len().min(1)],
            _ => &self.colours,
        }
    }
}
