// ============================================================================
// tcap-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ThumbnailConfig
//
// Fluent construction of ThumbnailConfig. Unset fields keep the defaults from
// config/mod.rs; `build` validates the result.

use super::ThumbnailConfig;
use crate::error::CoreResult;

/// Builder for creating ThumbnailConfig instances.
///
/// # Examples
///
/// ```rust
/// use tcap_core::config::ThumbnailConfigBuilder;
///
/// let config = ThumbnailConfigBuilder::new()
///     .still_duration_secs(0.5)
///     .video_quality(20)
///     .audio_bitrate("160k")
///     .in_place(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.video_quality, 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThumbnailConfigBuilder {
    config: ThumbnailConfig,
}

impl ThumbnailConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn still_duration_secs(mut self, secs: f64) -> Self {
        self.config.still_duration_secs = secs;
        self
    }

    #[must_use]
    pub fn video_quality(mut self, crf: u8) -> Self {
        self.config.video_quality = crf;
        self
    }

    #[must_use]
    pub fn audio_bitrate(mut self, bitrate: impl Into<String>) -> Self {
        self.config.audio_bitrate = bitrate.into();
        self
    }

    #[must_use]
    pub fn in_place(mut self, enabled: bool) -> Self {
        self.config.in_place = enabled;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> CoreResult<ThumbnailConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
