//! Quiz models: the quiz tree, submission, and explanation exchanges

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response of `GET quiz/?video_uuid=` and `POST quiz/`.
///
/// The backend answers with a `message` and no `quiz` when none has been
/// generated yet; the quiz service translates that case into its own
/// not-found error before callers see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub message: Option<String>,
    pub quiz: Option<Quiz>,
    pub video_title: Option<String>,
    pub created: Option<bool>,
    pub partial_progress: Option<PartialProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub uuid: Option<String>,
    #[serde(rename = "quiz_json")]
    pub questions: Vec<QuizQuestion>,
    pub questions_count: Option<u32>,
    pub quiz_duration_seconds: Option<u32>,
    #[serde(rename = "user")]
    pub user_id: Option<i64>,
    #[serde(rename = "quiz_video")]
    pub video_id: Option<i64>,
    pub created_at: Option<String>,
    pub is_completed: Option<bool>,
    pub score_percentage: Option<f32>,
    pub correct_answers_count: Option<u32>,
    pub user_answers: Option<Vec<UserAnswer>>,
    pub partial_answers: Option<HashMap<String, i32>>,
    pub ai_explanations: Option<HashMap<String, String>>,
    pub revealed_answers: Option<HashMap<String, bool>>,
    pub answered_questions_count: Option<u32>,
    pub has_partial_progress: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<String>,
    #[serde(rename = "correct_index")]
    pub correct_answer: i32,
}

/// Per-question state saved mid-quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialProgress {
    pub partial_answers: HashMap<String, i32>,
    pub ai_explanations: HashMap<String, String>,
    pub revealed_answers: HashMap<String, bool>,
    pub answered_questions_count: u32,
    pub has_progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnswer {
    pub is_correct: bool,
    pub correct_answer: i32,
    pub question_index: u32,
    pub selected_answer: i32,
}

/// Body for `POST quiz/submit/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmissionRequest {
    pub video_uuid: String,
    pub user_answers: Vec<i32>,
}

/// Response of `POST quiz/submit/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmissionResponse {
    pub message: String,
    pub results: QuizResults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResults {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score_percentage: f32,
    pub is_completed: bool,
    pub completed_at: String,
    pub user_answers: Vec<UserAnswerResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnswerResult {
    pub question_index: u32,
    pub selected_answer: i32,
    pub is_correct: bool,
    pub correct_answer: i32,
}

/// Body for `POST quiz/explain/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizExplanationRequest {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub video_uuid: String,
}

/// Response of `POST quiz/explain/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizExplanationResponse {
    pub explanation: String,
}
