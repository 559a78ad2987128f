//! Error type for the fallible edges of the carousel: configuration and DOM binding.

/// Errors produced while loading configuration or applying a view to a host.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// A configuration value is out of its valid range.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    /// A slide entry from the host carried no display name.
    #[error("slide {position} has no display name")]
    MissingSlideName { position: usize },
    /// Configuration text could not be parsed.
    #[cfg(feature = "toml")]
    #[error("failed to parse carousel config: {0}")]
    Toml(#[from] toml::de::Error),
    /// The host DOM rejected an update.
    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
