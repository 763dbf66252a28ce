// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Quiz(QuizError),
    Video(VideoError),
}

/// Problems reading a quiz file.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizError {
    /// The file is not valid TOML or does not match the quiz layout.
    Parse(String),
}

impl QuizError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            QuizError::Parse(_) => "error-load-quiz-parse",
        }
    }
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Parse(msg) => write!(f, "Invalid quiz file: {}", msg),
        }
    }
}

/// Specific error types for probing a video source.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    /// Video codec is not supported by the system's FFmpeg
    UnsupportedCodec(String),

    /// File appears corrupted or has invalid data
    CorruptedFile,

    /// Source exists but contains no video stream
    NoVideoStream,

    /// Container does not report a usable duration
    UnknownDuration,

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),

    /// Generic error with raw message
    Other(String),
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::UnsupportedCodec(_) => "error-load-video-unsupported-codec",
            VideoError::CorruptedFile => "error-load-video-corrupted",
            VideoError::NoVideoStream => "error-load-video-no-video-stream",
            VideoError::UnknownDuration => "error-load-video-unknown-duration",
            VideoError::IoError(_) => "error-load-video-io",
            VideoError::Other(_) => "error-load-video-general",
        }
    }

    /// Sorts a raw FFmpeg message into a specific `VideoError`.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec errors first, they often contain "not found" too
        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return VideoError::UnsupportedCodec(codec);
            }
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
            || msg_lower.contains("connection")
        {
            return VideoError::IoError(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return VideoError::NoVideoStream;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return VideoError::CorruptedFile;
        }

        VideoError::Other(msg.to_string())
    }

    fn extract_codec_name(msg: &str) -> Option<String> {
        let codecs = [
            "h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2",
        ];
        codecs
            .iter()
            .find(|codec| msg.contains(*codec))
            .map(|codec| codec.to_uppercase())
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::UnsupportedCodec(codec) => {
                write!(f, "Unsupported video codec: {}", codec)
            }
            VideoError::CorruptedFile => write!(f, "Video file is corrupted"),
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::UnknownDuration => write!(f, "Video duration is unknown"),
            VideoError::IoError(msg) => write!(f, "I/O error: {}", msg),
            VideoError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when showing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Quiz(e) => e.i18n_key(),
            Error::Video(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Quiz(e) => write!(f, "Quiz Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<QuizError> for Error {
    fn from(err: QuizError) -> Self {
        Error::Quiz(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn quiz_error_wraps_into_crate_error() {
        let err: Error = QuizError::Parse("missing field `correct`".into()).into();
        assert!(matches!(err, Error::Quiz(QuizError::Parse(_))));
        assert_eq!(err.i18n_key(), "error-load-quiz-parse");
        assert_eq!(
            format!("{}", err),
            "Quiz Error: Invalid quiz file: missing field `correct`"
        );
    }

    #[test]
    fn video_error_from_message_io() {
        let err = VideoError::from_message("No such file or directory");
        assert!(matches!(err, VideoError::IoError(_)));
    }

    #[test]
    fn video_error_from_message_no_stream() {
        let err = VideoError::from_message("No video stream found in file");
        assert!(matches!(err, VideoError::NoVideoStream));
    }

    #[test]
    fn video_error_from_message_codec() {
        let err = VideoError::from_message("Decoder hevc not found");
        assert_eq!(err, VideoError::UnsupportedCodec("HEVC".to_string()));
    }

    #[test]
    fn video_error_from_message_corrupted() {
        let err = VideoError::from_message("Invalid data found when processing input");
        assert!(matches!(err, VideoError::CorruptedFile));
    }

    #[test]
    fn video_error_falls_back_to_other() {
        let err = VideoError::from_message("something odd");
        assert_eq!(err, VideoError::Other("something odd".to_string()));
    }

    #[test]
    fn video_error_i18n_keys() {
        assert_eq!(
            VideoError::CorruptedFile.i18n_key(),
            "error-load-video-corrupted"
        );
        assert_eq!(
            VideoError::NoVideoStream.i18n_key(),
            "error-load-video-no-video-stream"
        );
        assert_eq!(
            Error::from(VideoError::UnknownDuration).i18n_key(),
            "error-load-video-unknown-duration"
        );
    }
}
