use clap::Args;

use crate::error::{BgError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_catalogue};

use super::SourceArgs;

/// Validate the catalogue without encoding
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let source = args.source.resolve()?;
    let backgrounds = &source.catalogue.backgrounds;

    printer.status(
        "Checking",
        &format!("{} from {}", plural(backgrounds.len(), "background", "backgrounds"), source.origin),
    );

    let result = validate_catalogue(&source.group, backgrounds);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(BgError::Validation {
            message: format!("catalogue has {}", plural(result.error_count(), "error", "errors")),
            help: None,
        });
    }

    Ok(())
}
