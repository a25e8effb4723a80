pub mod config;
pub mod error;
pub mod summarize;
pub mod transcript;

pub use error::{NotesError, Result};

/// One caption entry from the transcript source. Timing metadata is not
/// carried; only the text participates in the transcript.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub text: String,
}

/// Extract the video ID from a YouTube URL.
///
/// Returns `Ok(None)` when the input parses as a URL but no ID can be derived
/// (unrecognized host, missing `v` parameter); returns `Err` when the input is
/// not parseable as a URL at all.
pub fn parse_video_id(input: &str) -> Result<Option<String>> {
    let parsed = url::Url::parse(input.trim())?;

    match parsed.host_str() {
        Some("youtube.com") | Some("www.youtube.com") => {
            let id = parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned());
            Ok(id.filter(|id| !id.is_empty()))
        }
        Some("youtu.be") => {
            let id = parsed.path().trim_start_matches('/');
            Ok(if id.is_empty() { None } else { Some(id.to_string()) })
        }
        _ => Ok(None),
    }
}

/// Conventional thumbnail URL for a video ID.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("http://img.youtube.com/vi/{video_id}/0.jpg")
}
