use eyre::bail;
use log::debug;

use crate::{NotesError, Result};

/// Fixed instruction prepended to every transcript before submission.
const NOTES_PROMPT: &str = "You are a YouTube video summarizer. \
Create a detailed summary of the video, including all major topics and key insights. \
Summarize the video in a way that highlights its main ideas and any actionable advice. : ";

pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Produce detailed notes for a transcript via the Gemini API.
///
/// The model's text is returned verbatim. Any failure — HTTP error status,
/// network, malformed response — surfaces as [`NotesError::GenerationFailed`].
/// No retry, no streaming.
pub async fn summarize(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    transcript_text: &str,
) -> Result<String> {
    generate(client, api_key, model, transcript_text)
        .await
        .map_err(|e| NotesError::GenerationFailed(e.to_string()))
}

async fn generate(client: &reqwest::Client, api_key: &str, model: &str, transcript_text: &str) -> eyre::Result<String> {
    debug!("Generating notes with model {model}");

    let prompt = format!("{NOTES_PROMPT}{transcript_text}");
    let url = format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent");

    let body = serde_json::json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt }
                ]
            }
        ]
    });

    let resp = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("Gemini API returned {status}: {body}");
    }

    let json: serde_json::Value = resp.json().await?;
    extract_candidate_text(&json)
}

fn extract_candidate_text(json: &serde_json::Value) -> eyre::Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(str::to_string))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    bail!("unexpected Gemini API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_candidate_text() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "Here are the notes." }
                        ],
                        "role": "model"
                    }
                }
            ]
        });
        assert_eq!(extract_candidate_text(&json).unwrap(), "Here are the notes.");
    }

    #[test]
    fn test_extract_candidate_text_multiple_parts() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "First. " },
                            { "text": "Second." }
                        ]
                    }
                }
            ]
        });
        assert_eq!(extract_candidate_text(&json).unwrap(), "First. Second.");
    }

    #[test]
    fn test_extract_candidate_text_no_candidates() {
        let json = serde_json::json!({ "candidates": [] });
        assert!(extract_candidate_text(&json).is_err());
    }

    #[test]
    fn test_extract_candidate_text_empty_parts() {
        let json = serde_json::json!({
            "candidates": [
                { "content": { "parts": [] } }
            ]
        });
        assert!(extract_candidate_text(&json).is_err());
    }
}
