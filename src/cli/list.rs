//! List command implementation.
//!
//! Prints every background with its layer type and colour stops.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};

use super::SourceArgs;

/// List the backgrounds in the catalogue
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let source = args.source.resolve()?;
    let backgrounds = &source.catalogue.backgrounds;

    printer.status(
        "Listing",
        &format!(
            "{} in {} ({})",
            plural(backgrounds.len(), "background", "backgrounds"),
            source.group,
            source.origin
        ),
    );

    for (i, bg) in backgrounds.iter().enumerate() {
        let stops = plural(bg.stop_count(), "stop", "stops");
        printer.info(
            bg.layer.name(),
            &format!("{} {} {}", printer.dim(&format!("{:>3}", i)), bg.name, printer.dim(&stops)),
        );
    }

    Ok(())
}
