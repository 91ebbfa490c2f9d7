use serde::{Deserialize, Serialize};

/// Emotion labels offered by the selector.
pub const EMOTIONS: &[&str] = &[
    "Neutral",
    "Happy",
    "Sad",
    "Angry",
    "Fear",
    "Surprise",
    "Disgust",
];

/// Gender labels offered by the selector.
pub const GENDERS: &[&str] = &["Male", "Female"];

pub const DEFAULT_EMOTION: &str = "Neutral";
pub const DEFAULT_GENDER: &str = "Male";

/// A labeled time segment of the video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimestampAnnotation {
    /// Unique identifier (creation instant in epoch milliseconds)
    pub id: i64,
    /// Segment start in seconds
    pub start: f64,
    /// Segment end in seconds; not required to be after `start`
    pub end: f64,
    /// Emotion label, stored as entered
    #[serde(default = "default_emotion")]
    pub emotion: String,
    /// Gender label, stored as entered
    #[serde(default = "default_gender")]
    pub gender: String,
}

fn default_emotion() -> String {
    DEFAULT_EMOTION.to_string()
}

fn default_gender() -> String {
    DEFAULT_GENDER.to_string()
}

impl TimestampAnnotation {
    /// Create an annotation spanning `span` seconds from `start`.
    pub fn new(id: i64, start: f64, span: f64) -> Self {
        Self {
            id,
            start,
            end: start + span,
            emotion: default_emotion(),
            gender: default_gender(),
        }
    }
}

/// Editable fields of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationField {
    Start,
    End,
    Emotion,
    Gender,
}
