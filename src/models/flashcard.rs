//! Flashcard models

use serde::{Deserialize, Serialize};

/// Response of `GET flashcards/?video_uuid=` and `POST flashcards/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardSet {
    #[serde(rename = "uuid_flashcard")]
    pub id: String,
    pub flashcards: Vec<FlashcardItem>,
    pub video_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardItem {
    pub question: String,
    pub answer: String,
}

/// Body for `POST flashcards/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardRequest {
    pub video_uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_set_decodes_backend_shape() {
        let json = r#"{
            "uuid_flashcard": "fc-9",
            "flashcards": [
                {"question": "What is a vector?", "answer": "A direction with magnitude."}
            ],
            "video_title": "Vectors"
        }"#;

        let set: FlashcardSet = serde_json::from_str(json).expect("Should decode");
        assert_eq!(set.id, "fc-9");
        assert_eq!(set.flashcards.len(), 1);
        assert_eq!(set.video_title, "Vectors");
    }
}
