//! The append pipeline.
//!
//! - `filter_graph`: typed builder for the concat graph
//! - `planner`: derives the graph from probed properties and still options
//! - `render`: the batched ffmpeg job
//! - `output`: direct write or atomic in-place replacement
//! - `append`: runs the steps above for one (video, image) pair

pub mod append;
pub mod filter_graph;
pub mod output;
pub mod planner;
pub mod render;

pub use append::{AppendOutcome, AppendRequest, append_thumbnail};
pub use output::{OutputTarget, default_output_path};
pub use planner::{RenderPlan, StillSpec, plan};
pub use render::{RenderJob, render};
