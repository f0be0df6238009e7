//! Validation of background catalogues.
//!
//! Errors mark catalogues the encoder would reject. Warnings mark data the
//! encoder accepts but silently drops or ignores. Used by both
//! `bgpack validate` and `bgpack build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::types::BackgroundDefinition;

/// Run all validation checks against a catalogue.
pub fn validate_catalogue(group: &str, catalogue: &[BackgroundDefinition]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_group_limits(group, catalogue));
    result.merge(checks::check_names(catalogue));
    result.merge(checks::check_colours(catalogue));
    result.merge(checks::check_layer_colours(catalogue));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let subject = match &d.entry {
            Some(entry) => format!("{} {}", printer.bold(entry), d.message),
            None => d.message.clone(),
        };
        let line = format!("{} {}", subject, printer.dim(&format!("[{}]", d.code)));

        match d.severity {
            Severity::Error => printer.error("error", &line),
            Severity::Warning => printer.warning("warning", &line),
        }
        if let Some(help) = &d.help {
            printer.info("help", help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("validation: {}, {}", errors, warnings));
    } else if result.has_warnings() {
        printer.success("Validated", &format!("catalogue ({})", warnings));
    } else {
        printer.success("Validated", "catalogue");
    }
}
