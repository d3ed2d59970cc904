use std::fmt;

/// Best-effort text produced by a transcription engine.
///
/// The constructor trims surrounding whitespace. An empty transcript is
/// a valid value (silence or unintelligible audio), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            text: raw.as_ref().trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
