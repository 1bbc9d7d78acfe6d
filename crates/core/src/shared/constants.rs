/// Frames accumulated before each effect-and-encode pass.
pub const FRAMES_PER_BATCH: usize = 30;

/// Box blur radius used when the caller does not supply one.
pub const DEFAULT_BLUR_RADIUS: i32 = 5;

/// Processed-frame snapshots written per run when snapshots are enabled.
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 5;
