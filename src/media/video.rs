// SPDX-License-Identifier: MPL-2.0
//! Reading video container metadata with FFmpeg.
//!
//! Only the container header is read. No frame is decoded.

use super::VideoSource;
use crate::error::{Error, Result, VideoError};
use std::sync::Once;
use std::time::Duration;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once, with its log level lowered to errors.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Video metadata read from a container.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
}

/// Opens `source` and reads its duration and dimensions.
pub fn probe(source: &VideoSource) -> Result<VideoMetadata> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&source.as_input())
        .map_err(|e| VideoError::from_message(&e.to_string()))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;

    let parameters = video_stream.parameters();
    let context = ffmpeg_next::codec::context::Context::from_parameters(parameters)
        .map_err(|e| VideoError::from_message(&format!("codec context: {e}")))?;
    let decoder = context
        .decoder()
        .video()
        .map_err(|e| VideoError::from_message(&format!("decoder: {e}")))?;

    let stream_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        Some(
            video_stream.duration() as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator()),
        )
    } else {
        None
    };
    let container_secs = (ictx.duration() > 0)
        .then(|| ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE));

    let duration_secs = stream_secs
        .or(container_secs)
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .ok_or(VideoError::UnknownDuration)?;

    Ok(VideoMetadata {
        width: decoder.width(),
        height: decoder.height(),
        duration: container_duration(duration_secs)?,
    })
}

/// Converts a probed duration, rejecting values `Duration` cannot hold.
fn container_duration(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| VideoError::UnknownDuration.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn probe_missing_file_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = VideoSource::File(dir.path().join("missing.mp4"));
        assert!(matches!(probe(&source), Err(Error::Video(_))));
    }

    #[test]
    fn probe_garbage_file_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("garbage.mp4");
        std::fs::write(&path, b"definitely not a video").expect("write");
        assert!(probe(&VideoSource::File(path)).is_err());
    }

    #[test]
    fn container_duration_converts_seconds() {
        let duration = container_duration(2.5).expect("2.5s fits a Duration");
        assert_eq!(duration, Duration::from_millis(2_500));
    }

    #[test]
    fn oversized_container_duration_is_unknown() {
        let result = container_duration(1e30);
        assert!(matches!(
            result,
            Err(Error::Video(VideoError::UnknownDuration))
        ));
    }
}
