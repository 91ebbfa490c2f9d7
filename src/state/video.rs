//! Video identity: which YouTube video is loaded and where it came from.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, AppResult};

/// Recognizes `watch?v=`, `youtu.be/`, `/embed/`, `/v/`, `/e/` and
/// `youtube.com/<seg>/<any>/<id>` shapes. Group 1 is the 11-character id.
const VIDEO_ID_PATTERN: &str = r"(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})";

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VIDEO_ID_PATTERN).expect("valid regex"));

/// Extract the canonical video identifier from a pasted URL.
pub fn extract_video_id(input: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// The currently loaded video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSession {
    /// 11-character canonical identifier
    pub video_id: String,
    /// The string the user (or an imported file) supplied, verbatim
    pub source_url: String,
}

impl VideoSession {
    /// A session showing `video_id` with no source URL recorded yet.
    pub fn with_default_id(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            source_url: String::new(),
        }
    }

    /// Parse a session out of a pasted URL.
    pub fn from_url(url: &str) -> AppResult<Self> {
        let video_id = extract_video_id(url).ok_or_else(|| AppError::InvalidUrl(url.to_string()))?;
        Ok(Self {
            video_id,
            source_url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_extracts_from_known_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=10",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/e/dQw4w9WgXcQ",
            "youtube.com/user/someone/dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(extract_video_id(url).as_deref(), Some(ID), "url: {}", url);
        }
    }

    #[test]
    fn test_rejects_unrecognized_shapes() {
        let inputs = [
            "",
            "dQw4w9WgXcQ",
            "https://vimeo.com/123456789",
            "https://youtu.be/short",
            "https://www.youtube.com/watch?list=abc",
        ];
        for input in inputs {
            assert_eq!(extract_video_id(input), None, "input: {}", input);
        }
    }

    #[test]
    fn test_id_with_dash_and_underscore() {
        assert_eq!(
            extract_video_id("https://youtu.be/a-b_c-d_e-f").as_deref(),
            Some("a-b_c-d_e-f")
        );
    }

    #[test]
    fn test_session_keeps_source_verbatim() {
        let session = VideoSession::from_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(session.video_id, ID);
        assert_eq!(session.source_url, "https://youtu.be/dQw4w9WgXcQ");
    }

    #[test]
    fn test_session_invalid_url() {
        let err = VideoSession::from_url("nope").unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(ref s) if s == "nope"));
    }
}
