//! Course and playlist models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for `POST create-course/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    /// Video or playlist URL submitted by the user
    pub url: String,
}

/// Response of `POST create-course/`.
///
/// The backend creates either a single video or a playlist depending on the
/// submitted URL; `kind` says which of the two optional fields is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub video: Option<VideoSummary>,
    pub playlist: Option<CourseSummary>,
    pub user: Option<i64>,
}

/// Response of `GET my-courses/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyCoursesWrapper {
    pub playlists: Vec<CourseSummary>,
    pub single_videos: Vec<VideoSummary>,
}

/// One playlist in the my-courses listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(rename = "uuid_playlist")]
    pub id: Uuid,
    pub title: String,
    pub playlist_thumbnail: Option<String>,
    pub videos: Vec<VideoSummary>,
}

/// One video in a course listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    #[serde(rename = "uuid_video")]
    pub id: Uuid,
    pub title: String,
    pub thumbnail: String,
    pub duration_sec: u32,
}

/// Response of `GET playlists/{uuid}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "uuid_playlist")]
    pub id: Uuid,
    pub playlist_id: String,
    pub title: String,
    pub playlist_url: String,
    pub playlist_thumbnail: Option<String>,
    #[serde(rename = "user")]
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_courses_wrapper_decodes_backend_shape() {
        let json = r#"{
            "playlists": [{
                "uuid_playlist": "7a9a6bd2-0000-4000-8000-000000000001",
                "title": "Linear Algebra",
                "playlist_thumbnail": null,
                "videos": [{
                    "uuid_video": "7a9a6bd2-0000-4000-8000-000000000002",
                    "title": "Vectors",
                    "thumbnail": "https://img.example/v1.jpg",
                    "duration_sec": 612
                }]
            }],
            "single_videos": []
        }"#;

        let wrapper: MyCoursesWrapper = serde_json::from_str(json).expect("Should decode");
        assert_eq!(wrapper.playlists.len(), 1);
        assert_eq!(wrapper.playlists[0].title, "Linear Algebra");
        assert_eq!(wrapper.playlists[0].videos[0].duration_sec, 612);
        assert!(wrapper.single_videos.is_empty());
    }

    #[test]
    fn test_create_course_response_kind_field_maps_type() {
        let json = r#"{"type": "video", "video": null, "playlist": null, "user": 7}"#;
        let response: CreateCourseResponse = serde_json::from_str(json).expect("Should decode");
        assert_eq!(response.kind, "video");
        assert_eq!(response.user, Some(7));
    }
}
