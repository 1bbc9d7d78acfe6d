use thiserror::Error;

/// Fatal pipeline failures.
///
/// Every failure from the codec collaborator is unrecoverable for the
/// current run; nothing here is retried. Malformed decoded frames never
/// surface as an error value: the driver recovers by skipping them.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Opening the source failed, it holds no video stream, or its codec
    /// is unsupported.
    #[error("failed to open video source: {0}")]
    SourceOpen(Box<dyn std::error::Error>),

    /// Opening the output sink failed.
    #[error("failed to open video sink: {0}")]
    SinkOpen(Box<dyn std::error::Error>),

    /// The decoder reported an error mid-stream.
    #[error("failed to decode frame: {0}")]
    Decode(Box<dyn std::error::Error>),

    /// Encoding a frame or finalizing the output failed.
    #[error("failed to encode output: {0}")]
    Encode(Box<dyn std::error::Error>),

    /// The single-use driver was executed a second time.
    #[error("pipeline already executed")]
    AlreadyExecuted,
}
