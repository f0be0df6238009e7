//! The stock background catalogue.

use crate::types::{BackgroundDefinition, LayerType};

/// Grey ramp shared by every pixelated gradient, dark to light.
const GREY_RAMP: [&str; 24] = [
    "#000000ff", "#020202ff", "#070707ff", "#0f0f0fff", "#161616ff", "#1e1e1eff",
    "#272727ff", "#333333ff", "#404040ff", "#4e4e4eff", "#5e5e5eff", "#6e6e6eff",
    "#808080ff", "#919191ff", "#a2a2a2ff", "#b3b3b3ff", "#c3c3c3ff", "#d2d2d2ff",
    "#dfdfdfff", "#eaeaeaff", "#f3f3f3ff", "#fafafaff", "#fefefeff", "#ffffffff",
];

const BLACK_TO_WHITE: [&str; 2] = ["#000000", "#ffffff"];
const WHITE_TO_BLACK: [&str; 2] = ["#ffffff", "#000000"];

/// Build the stock catalogue, in encoding order.
pub fn builtin() -> Vec<BackgroundDefinition> {
    let mut catalogue = vec![
        BackgroundDefinition::solid("Default", "#e8eded"),
        BackgroundDefinition::solid("Solid Black", "#000000"),
    ];

    let directions = [
        ("Vertical", "Pixelated", LayerType::SmoothVertical, LayerType::PixelVertical),
        ("Horizontal", "Pixelated", LayerType::SmoothHorizontal, LayerType::PixelHorizontal),
        ("Diagonal", "Pixel", LayerType::SmoothDown, LayerType::PixelDown),
        ("Reverse Diagonal", "Pixel", LayerType::SmoothUp, LayerType::PixelUp),
    ];
    let reversed_ramp: Vec<&str> = GREY_RAMP.iter().rev().copied().collect();

    for (label, pixel_prefix, smooth, pixel) in directions {
        catalogue.push(BackgroundDefinition::new(
            format!("Smooth {}", label),
            smooth,
            BLACK_TO_WHITE,
        ));
        catalogue.push(BackgroundDefinition::new(
            format!("{} {}", pixel_prefix, label),
            pixel,
            GREY_RAMP,
        ));
        catalogue.push(BackgroundDefinition::new(
            format!("Smooth {} Inverse", label),
            smooth,
            WHITE_TO_BLACK,
        ));
        catalogue.push(BackgroundDefinition::new(
            format!("{} {} Inverse", pixel_prefix, label),
            pixel,
            reversed_ramp.iter().copied(),
        ));
    }

    catalogue.push(BackgroundDefinition::new("Radial", LayerType::Radial, WHITE_TO_BLACK));

    catalogue
}
