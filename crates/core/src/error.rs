#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid base theme: {0}")]
    InvalidBaseTheme(String),

    #[error("Retro theme must define {0} color palette")]
    MissingRequiredPalette(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
