use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Palette;

use super::SourceArgs;

/// Print the deduplicated colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let source = args.source.resolve()?;
    let backgrounds = &source.catalogue.backgrounds;
    let palette = Palette::from_catalogue(backgrounds)?;

    printer.status(
        "Collected",
        &format!(
            "{} from {}",
            plural(palette.len(), "colour", "colours"),
            plural(backgrounds.len(), "background", "backgrounds")
        ),
    );

    // Index and colour, one per line
    for (idx, colour) in palette.iter() {
        println!("{:>5}  {}", idx, colour);
    }

    Ok(())
}
