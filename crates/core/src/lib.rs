//! Batched video effect processing.
//!
//! Decodes a video into RGB frames, accumulates them in fixed-size batches,
//! applies a selected pixel effect to each full batch, and re-encodes the
//! transformed frames into an output video.

pub mod effects;
pub mod pipeline;
pub mod shared;
pub mod video;
