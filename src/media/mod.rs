// SPDX-License-Identifier: MPL-2.0
//! Video sources and container probing.

pub mod video;

pub use video::{probe, VideoMetadata};

use std::fmt;
use std::path::{Path, PathBuf};

const URL_SCHEMES: [&str; 5] = ["http://", "https://", "rtsp://", "rtmp://", "file://"];

/// Where the video comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    File(PathBuf),
    Url(String),
}

impl VideoSource {
    /// Interprets a command-line or quiz-file value. Anything with a known
    /// URL scheme is a URL, the rest is a path.
    pub fn from_arg(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Resolves a relative file path against `base` (the quiz file's
    /// directory). URLs and absolute paths are returned unchanged.
    #[must_use]
    pub fn relative_to(self, base: &Path) -> Self {
        match self {
            Self::File(path) if path.is_relative() => Self::File(base.join(path)),
            other => other,
        }
    }

    /// Value handed to FFmpeg, which accepts paths and URLs alike.
    pub fn as_input(&self) -> &Path {
        match self {
            Self::File(path) => path,
            Self::Url(url) => Path::new(url),
        }
    }

    /// Short name for the window title.
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Url(url) => url
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string(),
        }
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_detected_by_scheme() {
        assert!(matches!(
            VideoSource::from_arg("https://example.com/clip.mp4"),
            VideoSource::Url(_)
        ));
        assert!(matches!(
            VideoSource::from_arg("HTTP://example.com/clip.mp4"),
            VideoSource::Url(_)
        ));
        assert_eq!(
            VideoSource::from_arg("videos/clip.mp4"),
            VideoSource::File(PathBuf::from("videos/clip.mp4"))
        );
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let base = Path::new("/quizzes");
        assert_eq!(
            VideoSource::from_arg("clip.mp4").relative_to(base),
            VideoSource::File(PathBuf::from("/quizzes/clip.mp4"))
        );
        let url = VideoSource::from_arg("https://example.com/clip.mp4");
        assert_eq!(url.clone().relative_to(base), url);
    }

    #[test]
    fn display_name_uses_last_segment() {
        assert_eq!(
            VideoSource::from_arg("/videos/lesson.mp4").display_name(),
            "lesson.mp4"
        );
        assert_eq!(
            VideoSource::from_arg("https://example.com/a/clip.mp4").display_name(),
            "clip.mp4"
        );
    }
}
