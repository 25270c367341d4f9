//! Core library for appending a still thumbnail segment to the end of a video.
//!
//! Given a source video and a still image, tcap-core produces a video that is
//! identical to the source but ends with a short segment showing the image, so
//! that scrubbing to the last frame shows a chosen thumbnail. Encoding is
//! delegated to ffmpeg; this crate probes the source, plans the filter graph,
//! runs the render, and places the result.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tcap_core::{AppendRequest, FfmpegEngine, append_thumbnail};
//! use tcap_core::config::ThumbnailConfigBuilder;
//!
//! let config = ThumbnailConfigBuilder::new()
//!     .still_duration_secs(0.3)
//!     .in_place(true)
//!     .build()
//!     .unwrap();
//!
//! let request = AppendRequest::new("/videos/clip.mp4", "/videos/clip.png").with_config(config);
//! let outcome = append_thumbnail(&FfmpegEngine::new(), &request, &mut |_| {}).unwrap();
//! println!("Updated {}", outcome.output_path.display());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod media;
pub mod processing;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{ThumbnailConfig, ThumbnailConfigBuilder};
pub use error::{CoreError, CoreResult, InputKind};
pub use external::{EncodingOptions, FfmpegEngine, MediaEngine, check_dependency};
pub use media::{MediaProperties, parse_frame_rate};
pub use processing::{
    AppendOutcome, AppendRequest, OutputTarget, RenderJob, RenderPlan, StillSpec,
    append_thumbnail, default_output_path, plan, render,
};
pub use utils::{format_duration, parse_ffmpeg_time};
