//! Validation checks for background catalogues.
//!
//! Each check looks at the whole catalogue and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::encode::{MAX_ENTRIES, MAX_NAME_LEN, MAX_STOPS};
use crate::types::{BackgroundDefinition, Colour, LayerType, MAX_PALETTE_SIZE};

use super::warning::{Diagnostic, ValidationResult};

/// Group name length and entry count limits.
pub fn check_group_limits(group: &str, catalogue: &[BackgroundDefinition]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if group.len() > MAX_NAME_LEN {
        result.push(
            Diagnostic::error(
                "bgpack::validate::group-name-too-long",
                format!("Group name is {} bytes (maximum is {})", group.len(), MAX_NAME_LEN),
            )
            .with_help("Use a shorter group name"),
        );
    }

    if catalogue.len() > MAX_ENTRIES {
        result.push(
            Diagnostic::error(
                "bgpack::validate::too-many-entries",
                format!("Catalogue has {} backgrounds (maximum is {})", catalogue.len(), MAX_ENTRIES),
            )
            .with_help("Split the catalogue into several groups"),
        );
    }

    result
}

/// Entry names that do not fit their length byte, or repeat.
pub fn check_names(catalogue: &[BackgroundDefinition]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for bg in catalogue {
        if bg.name.len() > MAX_NAME_LEN {
            result.push(
                Diagnostic::error(
                    "bgpack::validate::name-too-long",
                    format!("Name is {} bytes (maximum is {})", bg.name.len(), MAX_NAME_LEN),
                )
                .for_entry(&bg.name),
            );
        }

        if !seen.insert(bg.name.as_str()) {
            result.push(
                Diagnostic::warning("bgpack::validate::duplicate-name", "Name is used more than once")
                    .for_entry(&bg.name)
                    .with_help("Readers that look backgrounds up by name will only find the first"),
            );
        }
    }

    result
}

/// Colours that fail to normalise, and the resulting palette size.
pub fn check_colours(catalogue: &[BackgroundDefinition]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut unique: HashSet<Colour> = HashSet::new();

    for bg in catalogue {
        for value in &bg.colours {
            match Colour::normalize(value) {
                Ok(colour) => {
                    unique.insert(colour);
                }
                Err(_) => result.push(
                    Diagnostic::error(
                        "bgpack::validate::invalid-colour",
                        format!("Invalid colour: {}", value),
                    )
                    .for_entry(&bg.name)
                    .with_help("Use #RRGGBB, #RRGGBBAA, 0xRRGGBBAA, or an integer"),
                ),
            }
        }
    }

    if unique.len() > MAX_PALETTE_SIZE {
        result.push(Diagnostic::error(
            "bgpack::validate::palette-overflow",
            format!(
                "Catalogue has {} unique colours (maximum is {})",
                unique.len(),
                MAX_PALETTE_SIZE
            ),
        ));
    }

    result
}

/// Colour lists that do not suit their layer type.
pub fn check_layer_colours(catalogue: &[BackgroundDefinition]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for bg in catalogue {
        let count = bg.colours.len();
        let stops = bg.stop_count();

        if stops > MAX_STOPS {
            result.push(
                Diagnostic::error(
                    "bgpack::validate::too-many-stops",
                    format!("{} colour stops (maximum is {})", stops, MAX_STOPS),
                )
                .for_entry(&bg.name),
            );
            continue;
        }

        let diagnostic = match bg.layer {
            LayerType::Solid if count > 1 => Some(
                Diagnostic::warning(
                    "bgpack::validate::solid-extra-colours",
                    format!("Solid background lists {} colours; only the first is encoded", count),
                )
                .with_help("Remove the extra colours or use a gradient layer"),
            ),
            LayerType::Solid if count == 0 => Some(Diagnostic::warning(
                "bgpack::validate::solid-no-colour",
                "Solid background has no colour; no index is encoded",
            )),
            LayerType::Image if count > 0 => Some(Diagnostic::warning(
                "bgpack::validate::image-colours",
                format!("Image background lists {} colours that are never referenced", count),
            )),
            LayerType::None if count > 0 => Some(Diagnostic::warning(
                "bgpack::validate::none-colours",
                format!("None background lists {} colours", count),
            )),
            layer if layer.is_gradient() && count < 2 => Some(Diagnostic::warning(
                "bgpack::validate::short-gradient",
                format!("{} gradient has {} colour stops", layer, count),
            )),
            _ => None,
        };

        if let Some(d) = diagnostic {
            result.push(d.for_entry(&bg.name));
        }
    }

    result
}
