use std::fmt;

/// Lifecycle of a remote transcription job.
///
/// `Submitted → Polling → {Completed | Error | TimedOut}`; terminal
/// states have no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionJobStatus {
    Submitted,
    Polling,
    Completed,
    Error,
    TimedOut,
}

impl TranscriptionJobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionJobStatus::Submitted => "submitted",
            TranscriptionJobStatus::Polling => "polling",
            TranscriptionJobStatus::Completed => "completed",
            TranscriptionJobStatus::Error => "error",
            TranscriptionJobStatus::TimedOut => "timed_out",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptionJobStatus::Completed
                | TranscriptionJobStatus::Error
                | TranscriptionJobStatus::TimedOut
        )
    }

    /// Maps a provider-reported status string onto the job lifecycle.
    pub fn from_provider_status(s: &str) -> Result<Self, String> {
        match s {
            "queued" => Ok(TranscriptionJobStatus::Submitted),
            "processing" => Ok(TranscriptionJobStatus::Polling),
            "completed" => Ok(TranscriptionJobStatus::Completed),
            "error" => Ok(TranscriptionJobStatus::Error),
            other => Err(format!("Unknown transcription job status: {}", other)),
        }
    }
}

impl fmt::Display for TranscriptionJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
