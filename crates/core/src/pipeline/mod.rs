pub mod frame_batch;
pub mod pipeline_logger;
pub mod process_video_use_case;
