//! Background catalogues: the stock set and catalogue files.
//!
//! A catalogue file lists backgrounds in encoding order:
//!
//! ```yaml
//! group: Background
//! backgrounds:
//!   - name: Solid Black
//!     layer: Solid
//!     colours: ["#000000"]
//! ```
//!
//! Files ending in `.json` are read as JSON, anything else as YAML.

mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BgError, Result};
use crate::types::BackgroundDefinition;

pub use builtin::builtin;

/// Group name used when neither the catalogue nor the manifest sets one.
pub const DEFAULT_GROUP_NAME: &str = "Background";

/// Serialisation format of a catalogue file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueFormat {
    Yaml,
    Json,
}

impl CatalogueFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogueFormat::Json,
            _ => CatalogueFormat::Yaml,
        }
    }
}

/// A loaded catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    /// Group name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Backgrounds in encoding order
    #[serde(default)]
    pub backgrounds: Vec<BackgroundDefinition>,
}

impl Catalogue {
    /// The stock catalogue with no group override.
    pub fn builtin() -> Self {
        Self {
            group: None,
            backgrounds: builtin(),
        }
    }

    /// Load a catalogue file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BgError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read catalogue: {}", e),
        })?;

        Self::parse(&content, CatalogueFormat::from_path(path))
    }

    /// Load a catalogue file, or the stock catalogue when no path is given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Parse a catalogue from a string.
    pub fn parse(content: &str, format: CatalogueFormat) -> Result<Self> {
        match format {
            CatalogueFormat::Yaml => serde_yaml::from_str(content).map_err(|e| BgError::Parse {
                message: format!("Invalid catalogue: {}", e),
                help: Some("Check the catalogue YAML syntax".to_string()),
            }),
            CatalogueFormat::Json => serde_json::from_str(content).map_err(|e| BgError::Parse {
                message: format!("Invalid catalogue: {}", e),
                help: Some("Check the catalogue JSON syntax".to_string()),
            }),
        }
    }

    /// Effective group name, falling back to `default`.
    pub fn group_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.group.as_deref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColourValue, LayerType};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_parse_yaml() {
        let yaml = r##"
group: Skies
backgrounds:
  - name: Dusk
    layer: S_Vertical
    colours: ["#1a1a2e", "#e94560"]
  - name: Photo
    layer: image
  - name: Navy
    layer: 2
    colours: [0x000080ff]
"##;
        let catalogue = Catalogue::parse(yaml, CatalogueFormat::Yaml).unwrap();

        assert_eq!(catalogue.group.as_deref(), Some("Skies"));
        assert_eq!(catalogue.backgrounds.len(), 3);
        assert_eq!(catalogue.backgrounds[0].layer, LayerType::SmoothVertical);
        assert_eq!(catalogue.backgrounds[1].layer, LayerType::Image);
        assert!(catalogue.backgrounds[1].colours.is_empty());
        assert_eq!(catalogue.backgrounds[2].colours, vec![ColourValue::Int(0x000080ff)]);
    }

    #[test]
    fn test_parse_json() {
        let json = r##"{"backgrounds": [{"name": "Solid", "layerType": 2, "palette": ["#b5b5b5"]}]}"##;
        let catalogue = Catalogue::parse(json, CatalogueFormat::Json).unwrap();

        assert_eq!(catalogue.group, None);
        assert_eq!(
            catalogue.backgrounds,
            vec![BackgroundDefinition::solid("Solid", "#b5b5b5")]
        );
    }

    #[test]
    fn test_parse_unknown_layer() {
        let yaml = "backgrounds:\n  - name: X\n    layer: Diagonal\n";
        let err = Catalogue::parse(yaml, CatalogueFormat::Yaml).unwrap_err();
        assert!(matches!(err, BgError::Parse { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogueFormat::from_path(&PathBuf::from("a.json")), CatalogueFormat::Json);
        assert_eq!(CatalogueFormat::from_path(&PathBuf::from("a.yaml")), CatalogueFormat::Yaml);
        assert_eq!(CatalogueFormat::from_path(&PathBuf::from("a")), CatalogueFormat::Yaml);
    }

    #[test]
    fn test_group_name_fallback() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.group_name(DEFAULT_GROUP_NAME), "Background");

        let named = Catalogue {
            group: Some("Skies".to_string()),
            ..catalogue
        };
        assert_eq!(named.group_name(DEFAULT_GROUP_NAME), "Skies");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalogue::load(Path::new("/nonexistent/catalogue.yaml")).unwrap_err();
        assert!(matches!(err, BgError::Io { .. }));
    }
}
