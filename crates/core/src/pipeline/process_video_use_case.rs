use std::path::Path;
use std::time::Instant;

use crate::effects::domain::pixel_effect::PixelEffect;
use crate::pipeline::frame_batch::FrameBatch;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::error::PipelineError;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;
use crate::video::domain::video_writer::VideoWriter;
use crate::video::infrastructure::snapshot_writer::SnapshotWriter;

/// Progress callback: (frames accepted so far, total frames if known).
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send>;

/// Counters describing one completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Frames pulled from the decoder.
    pub frames_in: usize,
    /// Frames transformed and handed to the encoder.
    pub frames_out: usize,
    /// Malformed frames rejected before batching.
    pub frames_skipped: usize,
    /// Flushes performed, a trailing partial one included.
    pub batches: usize,
}

/// Pulls decoded frames, accumulates them in fixed-size batches, applies
/// the selected effect to each full batch, and hands the transformed
/// frames to the encoder.
///
/// Fully synchronous: decode, effect and encode never overlap. Single-use:
/// `execute` consumes the owned collaborators, so calling it twice fails.
pub struct ProcessVideoUseCase {
    reader: Option<Box<dyn VideoReader>>,
    writer: Option<Box<dyn VideoWriter>>,
    effect: Option<Box<dyn PixelEffect>>,
    batch_capacity: usize,
    snapshots: Option<SnapshotWriter>,
    on_progress: Option<ProgressFn>,
    logger: Box<dyn PipelineLogger>,
}

impl ProcessVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        writer: Box<dyn VideoWriter>,
        effect: Box<dyn PixelEffect>,
        batch_capacity: usize,
        snapshots: Option<SnapshotWriter>,
        on_progress: Option<ProgressFn>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader: Some(reader),
            writer: Some(writer),
            effect: Some(effect),
            batch_capacity,
            snapshots,
            on_progress,
            logger,
        }
    }

    pub fn execute(&mut self, input: &Path, output: &Path) -> Result<RunReport, PipelineError> {
        let mut reader = self.reader.take().ok_or(PipelineError::AlreadyExecuted)?;
        let mut writer = self.writer.take().ok_or(PipelineError::AlreadyExecuted)?;
        let effect = self.effect.take().ok_or(PipelineError::AlreadyExecuted)?;

        let metadata = reader.open(input).map_err(PipelineError::SourceOpen)?;
        self.logger.info(&format!(
            "Source opened: {}x{} @ {:.2} fps, codec '{}', {} frames",
            metadata.width, metadata.height, metadata.fps, metadata.codec, metadata.total_frames
        ));

        let result = self.run_loop(&mut *reader, &mut *writer, &*effect, &metadata, output);

        // Open handles are released on success and failure alike. Closing
        // the sink drains codec-internal delayed frames, so a close failure
        // after a clean run still fails the run.
        let close_result = writer.close();
        reader.close();

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                if let Err(close_err) = close_result {
                    log::warn!("closing sink after failed run also failed: {close_err}");
                }
                return Err(e);
            }
        };
        if let Err(e) = close_result {
            return Err(PipelineError::Encode(e));
        }

        self.logger.summary();
        Ok(report)
    }

    fn run_loop(
        &mut self,
        reader: &mut dyn VideoReader,
        writer: &mut dyn VideoWriter,
        effect: &dyn PixelEffect,
        metadata: &VideoMetadata,
        output: &Path,
    ) -> Result<RunReport, PipelineError> {
        let mut batch = FrameBatch::new(self.batch_capacity);
        let mut report = RunReport::default();
        let mut sink_open = false;

        let mut frames = reader.frames();
        loop {
            let start = Instant::now();
            let Some(result) = frames.next() else { break };
            self.logger.timing("decode", elapsed_ms(start));

            let frame = result.map_err(PipelineError::Decode)?;
            report.frames_in += 1;

            // A frame that carries no data or disagrees with the source
            // geometry would corrupt the batch; reject it and keep going.
            if frame.is_empty()
                || frame.width() != metadata.width
                || frame.height() != metadata.height
            {
                log::warn!(
                    "skipping malformed frame {} ({}x{}, {} bytes)",
                    frame.index(),
                    frame.width(),
                    frame.height(),
                    frame.len()
                );
                report.frames_skipped += 1;
                continue;
            }

            // Geometry is unknown until the first frame decodes, so the
            // sink opens here rather than up front.
            if !sink_open {
                writer
                    .open(output, metadata)
                    .map_err(PipelineError::SinkOpen)?;
                sink_open = true;
            }

            batch.push(frame);

            let accepted = report.frames_in - report.frames_skipped;
            if let Some(on_progress) = &self.on_progress {
                on_progress(accepted, metadata.total_frames);
            }
            self.logger.progress(accepted, metadata.total_frames);

            if batch.is_full() {
                self.flush(&mut batch, effect, writer, &mut report)?;
            }
        }

        // A trailing partial batch is processed and encoded, not dropped.
        if !batch.is_empty() {
            self.flush(&mut batch, effect, writer, &mut report)?;
        }

        Ok(report)
    }

    fn flush(
        &mut self,
        batch: &mut FrameBatch,
        effect: &dyn PixelEffect,
        writer: &mut dyn VideoWriter,
        report: &mut RunReport,
    ) -> Result<(), PipelineError> {
        // The whole batch is transformed before any of it is encoded.
        let start = Instant::now();
        for frame in batch.frames_mut() {
            effect.apply(frame);
        }
        self.logger.timing("effect", elapsed_ms(start));

        let start = Instant::now();
        for frame in batch.frames() {
            if let Some(snapshots) = self.snapshots.as_mut() {
                if let Err(e) = snapshots.save(frame) {
                    log::warn!("frame snapshot failed: {e}");
                }
            }
            writer.write(frame).map_err(PipelineError::Encode)?;
            report.frames_out += 1;
        }
        self.logger.timing("encode", elapsed_ms(start));

        report.batches += 1;
        log::debug!("flushed batch {} ({} frames)", report.batches, batch.len());
        batch.reset();
        Ok(())
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
