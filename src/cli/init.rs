//! Init command implementation.
//!
//! Generates a `bgpack.yaml` manifest, optionally with a starter catalogue
//! exported from the stock backgrounds.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalogue::Catalogue;
use crate::error::{BgError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};

/// Filename of the starter catalogue written by `--with-catalogue`.
pub const STARTER_CATALOGUE: &str = "backgrounds.yaml";

/// Initialize a bgpack project by generating a bgpack.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also write the stock catalogue to backgrounds.yaml
    #[arg(long)]
    pub with_catalogue: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);
    let catalogue_path = args.path.join(STARTER_CATALOGUE);

    refuse_overwrite(&manifest_path, args.force)?;
    if args.with_catalogue {
        refuse_overwrite(&catalogue_path, args.force)?;
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| BgError::Io {
            path: args.path.clone(),
            message: format!("Failed to create project directory: {}", e),
        })?;
    }

    let mut manifest = Manifest::default();

    if args.with_catalogue {
        let catalogue = Catalogue::builtin();
        let yaml = serde_yaml::to_string(&catalogue).map_err(|e| BgError::Parse {
            message: format!("Failed to serialise catalogue: {}", e),
            help: None,
        })?;
        write_file(&catalogue_path, &yaml)?;
        printer.success(
            "Exported",
            &format!(
                "{} to {}",
                plural(catalogue.backgrounds.len(), "background", "backgrounds"),
                display_path(&catalogue_path)
            ),
        );
        manifest.catalogue = Some(PathBuf::from(STARTER_CATALOGUE));
    }

    let mut yaml = String::from("# bgpack project manifest\n");
    yaml.push_str(&manifest.to_yaml()?);
    write_file(&manifest_path, &yaml)?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

fn refuse_overwrite(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(BgError::Io {
            path: path.to_path_buf(),
            message: "file already exists".to_string(),
        });
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| BgError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_args(path: &Path, with_catalogue: bool, force: bool) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            with_catalogue,
            force,
        }
    }

    #[test]
    fn test_init_writes_default_manifest() {
        let dir = tempfile::tempdir().unwrap();
        run(init_args(dir.path(), false, false), &Printer::plain()).unwrap();

        let manifest = Manifest::find(dir.path()).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        run(init_args(dir.path(), false, false), &Printer::plain()).unwrap();

        assert!(run(init_args(dir.path(), false, false), &Printer::plain()).is_err());
        assert!(run(init_args(dir.path(), false, true), &Printer::plain()).is_ok());
    }

    #[test]
    fn test_init_exports_loadable_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        run(init_args(dir.path(), true, false), &Printer::plain()).unwrap();

        let manifest = Manifest::find(dir.path()).unwrap();
        let path = manifest.catalogue.unwrap();
        assert_eq!(path, dir.path().join(STARTER_CATALOGUE));

        let catalogue = Catalogue::load(&path).unwrap();
        assert_eq!(catalogue, Catalogue::builtin());
    }
}
