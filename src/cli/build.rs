//! Build command implementation.
//!
//! Validates the catalogue, encodes it, and writes the hex asset file.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::encode::{encode_group, EncodedGroup};
use crate::error::{BgError, Result};
use crate::output::{display_path, plural, thousands, Printer};
use crate::render::{asset_line, header_preview, to_hex, write_asset};
use crate::validation::{print_diagnostics, validate_catalogue};

use super::SourceArgs;

/// Encode the catalogue into a hex asset file
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Asset filename inside the output directory
    #[arg(long)]
    pub filename: Option<String>,

    /// Print the asset line to stdout instead of writing a file
    #[arg(long, conflicts_with = "json")]
    pub stdout: bool,

    /// Print a JSON build summary to stdout
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable result of a build.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub group: String,
    pub path: Option<PathBuf>,
    pub bytes: usize,
    pub hex_length: usize,
    pub palette_size: usize,
    pub entries: usize,
}

impl BuildSummary {
    pub fn new(group: &EncodedGroup, path: Option<PathBuf>) -> Self {
        Self {
            group: group.name().to_string(),
            path,
            bytes: group.len(),
            hex_length: to_hex(group.as_bytes()).len(),
            palette_size: group.palette_size(),
            entries: group.entry_count(),
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let source = args.source.resolve()?;
    let backgrounds = &source.catalogue.backgrounds;

    printer.status(
        "Loading",
        &format!("{} from {}", plural(backgrounds.len(), "background", "backgrounds"), source.origin),
    );

    let validation = validate_catalogue(&source.group, backgrounds);
    if !validation.is_ok() {
        print_diagnostics(&validation, printer);
    }
    if validation.has_errors() {
        return Err(BgError::Validation {
            message: format!(
                "catalogue has {}",
                plural(validation.error_count(), "error", "errors")
            ),
            help: Some("Run `bgpack validate` for details".to_string()),
        });
    }

    printer.status("Encoding", &source.group);
    let group = encode_group(&source.group, backgrounds)?;

    if args.stdout {
        print!("{}", asset_line(group.name(), group.as_bytes()));
        report(&group, printer);
        return Ok(());
    }

    let dir = args.output.unwrap_or(source.manifest.output);
    let filename = args.filename.unwrap_or(source.manifest.filename);
    let path = write_asset(&dir, &filename, group.name(), group.as_bytes())?;

    printer.success("Written", &display_path(&path));
    report(&group, printer);

    if args.json {
        let summary = BuildSummary::new(&group, Some(path));
        let json = serde_json::to_string_pretty(&summary).map_err(|e| BgError::Parse {
            message: format!("Failed to serialise build summary: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    Ok(())
}

/// Size and header sanity report on stderr.
fn report(group: &EncodedGroup, printer: &Printer) {
    let bytes = group.as_bytes();

    printer.info("Size", &format!("{} bytes", thousands(group.len())));
    printer.info("Hex", &format!("{} chars", thousands(to_hex(bytes).len())));
    printer.info(
        "Palette",
        &plural(group.palette_size(), "unique colour", "unique colours"),
    );

    if let Some(preview) = header_preview(bytes) {
        printer.info("Header", &preview);
    }

    // The first byte is the group name length
    let expected = group.name().len();
    match bytes.first() {
        Some(&len) if len as usize == expected => {
            printer.info("Name length", &format!("{} (ok)", len));
        }
        Some(&len) => {
            printer.warning("Name length", &format!("{}, expected {}", len, expected));
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{builtin, DEFAULT_GROUP_NAME};

    #[test]
    fn test_summary_counts() {
        let group = encode_group(DEFAULT_GROUP_NAME, &builtin()).unwrap();
        let summary = BuildSummary::new(&group, None);

        assert_eq!(summary.group, "Background");
        assert_eq!(summary.entries, 19);
        assert_eq!(summary.palette_size, 25);
        assert_eq!(summary.hex_length, 2 + summary.bytes * 2);
    }

    #[test]
    fn test_run_writes_asset() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let args = BuildArgs {
            source: SourceArgs {
                catalogue: None,
                group: None,
                project: dir.path().to_path_buf(),
            },
            output: Some(out.clone()),
            filename: Some("bg.txt".to_string()),
            stdout: false,
            json: false,
        };

        run(args, &Printer::plain()).unwrap();

        let written = std::fs::read_to_string(out.join("bg.txt")).unwrap();
        assert!(written.starts_with("Background: 0x0a4261636b67726f756e64"));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_run_rejects_invalid_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        let catalogue = dir.path().join("bad.yaml");
        std::fs::write(
            &catalogue,
            "backgrounds:\n  - name: Bad\n    layer: Solid\n    colours: [\"#12\"]\n",
        )
        .unwrap();

        let args = BuildArgs {
            source: SourceArgs {
                catalogue: Some(catalogue),
                group: None,
                project: dir.path().to_path_buf(),
            },
            output: Some(dir.path().join("out")),
            filename: None,
            stdout: false,
            json: false,
        };

        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, BgError::Validation { .. }));
        assert!(!dir.path().join("out").exists());
    }
}
