//! Project manifest (bgpack.yaml) parsing.
//!
//! The manifest sets the catalogue source, the group name, and where the
//! encoded asset is written. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalogue::DEFAULT_GROUP_NAME;
use crate::error::{BgError, Result};

/// Manifest filename looked up in the project directory.
pub const MANIFEST_FILENAME: &str = "bgpack.yaml";

/// Project manifest loaded from bgpack.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Catalogue file. The stock catalogue is used when unset.
    pub catalogue: Option<PathBuf>,

    /// Group name written into the asset header.
    pub group: String,

    /// Output directory for the asset file.
    pub output: PathBuf,

    /// Asset filename inside the output directory.
    pub filename: String,
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

fn default_filename() -> String {
    "background_ultimate_asset.txt".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            catalogue: None,
            group: DEFAULT_GROUP_NAME.to_string(),
            output: default_output(),
            filename: default_filename(),
        }
    }
}

impl Manifest {
    /// Load manifest from a bgpack.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BgError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let mut manifest = Self::parse(&content)?;

        // Catalogue paths are relative to the manifest
        if let (Some(catalogue), Some(dir)) = (&manifest.catalogue, path.parent()) {
            if catalogue.is_relative() {
                manifest.catalogue = Some(dir.join(catalogue));
            }
        }

        Ok(manifest)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserialises as unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BgError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load `bgpack.yaml` from a directory, or defaults if there is none.
    pub fn find(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Full path of the asset file.
    pub fn output_path(&self) -> PathBuf {
        self.output.join(&self.filename)
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BgError::Parse {
            message: format!("Failed to serialise manifest: {}", e),
            help: None,
        })
    }
}
