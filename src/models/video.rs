//! Video detail and playlist-video models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response of `GET videos/{uuid}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    #[serde(rename = "uuid_video")]
    pub uuid: String,
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub duration_sec: Option<u32>,
    /// Generated summary, rendered as markdown by the caller
    pub summary: String,
    pub timecode_transcript: Option<Vec<TranscriptSegment>>,
    #[serde(rename = "playlist")]
    pub playlist_id: Option<i64>,
    #[serde(rename = "user")]
    pub user_id: Option<i64>,
}

/// One transcript segment with its start offset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: String,
    pub duration: String,
}

/// Response of `GET playlists/{uuid}/videos/`, the lightweight listing
/// shown before any per-video detail is fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(rename = "uuid_playlist")]
    pub id: Uuid,
    pub title: String,
    pub playlist_thumbnail: Option<String>,
    pub videos: Vec<VideoListItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListItem {
    #[serde(rename = "uuid_video")]
    pub id: Uuid,
    pub title: String,
    pub thumbnail: String,
    pub duration_sec: u32,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_decodes_with_optional_fields_absent() {
        let json = r##"{
            "id": 12,
            "uuid_video": "1f0c0d8e-aaaa-4bbb-8ccc-0123456789ab",
            "video_id": "dQw4w9WgXcQ",
            "title": "Eigenvalues",
            "url": "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "thumbnail": null,
            "duration_sec": null,
            "summary": "# Eigenvalues\nA summary.",
            "timecode_transcript": null,
            "playlist": null,
            "user": null
        }"##;

        let video: Video = serde_json::from_str(json).expect("Should decode");
        assert_eq!(video.id, 12);
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
        assert!(video.timecode_transcript.is_none());
    }

    #[test]
    fn test_transcript_segments_decode_inside_video() {
        let json = r#"{
            "id": 1,
            "uuid_video": "u",
            "video_id": "v",
            "title": "t",
            "url": "https://example.com",
            "thumbnail": null,
            "duration_sec": 60,
            "summary": "s",
            "timecode_transcript": [
                {"text": "hello", "start": "0.0", "duration": "2.5"}
            ],
            "playlist": 3,
            "user": 4
        }"#;

        let video: Video = serde_json::from_str(json).expect("Should decode");
        let transcript = video.timecode_transcript.expect("Should have transcript");
        assert_eq!(transcript[0].text, "hello");
        assert_eq!(video.playlist_id, Some(3));
    }
}
