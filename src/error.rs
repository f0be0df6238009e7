use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bgpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum BgError {
    #[error("Invalid colour format: {value:?}")]
    #[diagnostic(
        code(bgpack::colour),
        help("Use #RRGGBB, #RRGGBBAA, 0xRRGGBBAA, or an integer")
    )]
    InvalidColorFormat { value: String },

    #[error("Palette overflow: {count} unique colours (maximum is 65535)")]
    #[diagnostic(code(bgpack::palette_overflow))]
    PaletteOverflow { count: usize },

    #[error("Name too long: {name:?} is {len} bytes (maximum is 255)")]
    #[diagnostic(code(bgpack::name_too_long))]
    NameTooLong { name: String, len: usize },

    #[error("Too many entries: {count} backgrounds (maximum is 255)")]
    #[diagnostic(code(bgpack::entry_count_overflow))]
    EntryCountOverflow { count: usize },

    #[error("Too many colour stops in {name:?}: {count} (maximum is 65535)")]
    #[diagnostic(code(bgpack::too_many_stops))]
    TooManyStops { name: String, count: usize },

    #[error("Colour {colour} is missing from the palette")]
    #[diagnostic(
        code(bgpack::internal),
        help("This is a bug: the palette must be built from the same catalogue")
    )]
    MissingPaletteColour { colour: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bgpack::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bgpack::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(bgpack::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BgError>;
