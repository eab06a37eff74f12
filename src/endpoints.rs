//! Endpoint catalog for the Owlpeer REST API
//!
//! An [`Endpoint`] is a pure value describing a path plus optional query
//! parameters. It is used both to build the request URL and to derive the
//! cache key for cache-eligible requests; it carries no behavior beyond
//! path construction.

use uuid::Uuid;

/// An API endpoint: a relative path plus optional query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn with_query(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// The endpoint path without query parameters
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters in insertion order
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The path with query parameters appended in insertion order.
    ///
    /// This is the form sent on the wire; cache keys sort the parameters
    /// separately so that logically identical endpoints always collide.
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }

    // Course-related

    pub fn create_course() -> Self {
        Self::new("create-course/")
    }

    pub fn my_courses() -> Self {
        Self::new("my-courses/")
    }

    pub fn course_details(uuid: Uuid) -> Self {
        Self::new(format!("playlists/{}/", uuid))
    }

    pub fn course_videos(uuid: Uuid) -> Self {
        Self::new(format!("playlists/{}/videos/", uuid))
    }

    pub fn delete_course(uuid: Uuid) -> Self {
        Self::new(format!("my-courses/{}/delete/", uuid))
    }

    // Video-related

    pub fn video_details(uuid: Uuid) -> Self {
        Self::new(format!("videos/{}/", uuid))
    }

    pub fn delete_single_video(uuid: Uuid) -> Self {
        Self::new(format!("my-single-videos/{}/delete/", uuid))
    }

    // Flashcards

    pub fn get_flashcards(video_uuid: Uuid) -> Self {
        Self::with_query(
            "flashcards/",
            vec![("video_uuid".to_string(), video_uuid.to_string())],
        )
    }

    pub fn generate_flashcards() -> Self {
        Self::new("flashcards/")
    }

    // Mind map

    pub fn get_mind_map(video_uuid: Uuid) -> Self {
        Self::with_query(
            "mindmap/",
            vec![("video_uuid".to_string(), video_uuid.to_string())],
        )
    }

    pub fn generate_mind_map() -> Self {
        Self::new("mindmap/")
    }

    // Quiz

    pub fn get_quiz(video_uuid: Uuid) -> Self {
        Self::with_query(
            "quiz/",
            vec![("video_uuid".to_string(), video_uuid.to_string())],
        )
    }

    pub fn generate_quiz() -> Self {
        Self::new("quiz/")
    }

    pub fn submit_quiz() -> Self {
        Self::new("quiz/submit/")
    }

    pub fn explain_quiz() -> Self {
        Self::new("quiz/explain/")
    }

    // AI chat

    pub fn summary_chatbot() -> Self {
        Self::new("summary-chatbot/")
    }

    // Misc

    pub fn health_check() -> Self {
        Self::new("health/")
    }

    // Profile

    pub fn get_profile() -> Self {
        Self::new("auth/profile/")
    }

    pub fn update_profile() -> Self {
        Self::new("auth/profile/")
    }

    pub fn delete_user() -> Self {
        Self::new("auth/delete/")
    }

    // Billing

    pub fn upgrade_user() -> Self {
        Self::new("payment/ios/webhook/")
    }

    // Resources

    pub fn get_resources(video_uuid: Uuid) -> Self {
        Self::with_query(
            "perplexity/",
            vec![("video_uuid".to_string(), video_uuid.to_string())],
        )
    }

    pub fn generate_resources() -> Self {
        Self::new("perplexity/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_without_query() {
        assert_eq!(Endpoint::my_courses().full_path(), "my-courses/");
        assert_eq!(Endpoint::health_check().full_path(), "health/");
    }

    #[test]
    fn test_full_path_with_query() {
        let uuid = Uuid::nil();
        let endpoint = Endpoint::get_flashcards(uuid);
        assert_eq!(
            endpoint.full_path(),
            format!("flashcards/?video_uuid={}", uuid)
        );
    }

    #[test]
    fn test_uuid_paths_are_lowercase_hyphenated() {
        let uuid = Uuid::parse_str("A1A2A3A4-B1B2-C1C2-D1D2-D3D4D5D6D7D8").unwrap();
        let endpoint = Endpoint::course_details(uuid);
        assert_eq!(
            endpoint.path(),
            "playlists/a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8/"
        );
    }

    #[test]
    fn test_profile_endpoints_share_a_path() {
        // GET and PATCH address the same resource, so a profile update can
        // invalidate the cached GET through the same endpoint value.
        assert_eq!(Endpoint::get_profile(), Endpoint::update_profile());
    }

    #[test]
    fn test_identical_constructors_produce_equal_endpoints() {
        let uuid = Uuid::new_v4();
        assert_eq!(Endpoint::get_quiz(uuid), Endpoint::get_quiz(uuid));
    }
}
