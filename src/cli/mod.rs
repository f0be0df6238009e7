pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod palette;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::display_path;

/// bgpack - Background asset packer
#[derive(Parser, Debug)]
#[command(name = "bgpack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode the catalogue into a hex asset file
    Build(build::BuildArgs),

    /// Print the deduplicated colour palette
    Palette(palette::PaletteArgs),

    /// List the backgrounds in the catalogue
    List(list::ListArgs),

    /// Validate the catalogue without encoding
    Validate(validate::ValidateArgs),

    /// Initialize a bgpack project (generates bgpack.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where the catalogue and group name come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Catalogue file (YAML or JSON); overrides the manifest
    #[arg(long, short)]
    pub catalogue: Option<PathBuf>,

    /// Group name written into the asset header
    #[arg(long, short)]
    pub group: Option<String>,

    /// Project directory containing bgpack.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

/// A catalogue ready to encode.
#[derive(Debug)]
pub struct Source {
    pub manifest: Manifest,
    pub catalogue: Catalogue,
    /// Effective group name: flag, then catalogue file, then manifest.
    pub group: String,
    /// Human-readable origin of the catalogue.
    pub origin: String,
}

impl SourceArgs {
    pub fn resolve(&self) -> Result<Source> {
        let manifest = Manifest::find(&self.project)?;

        let path = self.catalogue.as_deref().or(manifest.catalogue.as_deref());
        let catalogue = Catalogue::load_or_builtin(path)?;
        let origin = match path {
            Some(path) => display_path(path),
            None => "builtin catalogue".to_string(),
        };

        let group = match &self.group {
            Some(group) => group.clone(),
            None => catalogue.group_name(&manifest.group).to_string(),
        };

        Ok(Source {
            manifest,
            catalogue,
            group,
            origin,
        })
    }
}
