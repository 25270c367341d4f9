//! Source media inspection.
//!
//! `properties` defines the probed metadata and frame-rate parsing; `probe`
//! runs the ffprobe queries and applies the best-effort fallbacks.

pub mod probe;
pub mod properties;

pub use probe::{VideoStreamInfo, probe_media};
pub use properties::{MediaProperties, parse_frame_rate};
