use thiserror::Error;

/// Failure kinds surfaced to the user, one per pipeline stage.
///
/// The presentation layer branches on the variant, not the message text.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("invalid YouTube URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("error fetching transcript: {0}")]
    TranscriptUnavailable(String),

    #[error("error generating notes: {0}")]
    GenerationFailed(String),

    #[error("{0} environment variable is not set")]
    MissingApiKey(&'static str),
}

pub type Result<T> = std::result::Result<T, NotesError>;
