//! Summary-chatbot message models

use serde::{Deserialize, Serialize};

/// Body for `POST summary-chatbot/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    pub video_uuid: String,
    pub user_message: String,
}

/// Typed form of the chatbot reply.
///
/// The chat service returns the raw body instead, because the backend
/// streams markdown that is handed to the renderer verbatim; this shape
/// exists for callers that want the structured variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub answer: String,
    pub video_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_wire_names() {
        let request = ChatMessageRequest {
            video_uuid: "v-1".to_string(),
            user_message: "What is a basis?".to_string(),
        };
        let json = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(json["video_uuid"], "v-1");
        assert_eq!(json["user_message"], "What is a basis?");
    }
}
