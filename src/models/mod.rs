//! Typed request/response shapes for the Owlpeer REST API
//!
//! These are pure data: serde models mirroring the backend's JSON, with
//! `#[serde(rename)]` bridging its snake_case and legacy field names. They
//! carry no behavior beyond construction helpers.

pub mod billing;
pub mod chat;
pub mod course;
pub mod flashcard;
pub mod mindmap;
pub mod quiz;
pub mod resources;
pub mod user;
pub mod video;

pub use billing::PurchaseNotification;
pub use chat::{ChatMessageRequest, ChatMessageResponse};
pub use course::{
    CourseSummary, CreateCourseRequest, CreateCourseResponse, MyCoursesWrapper, Playlist,
    VideoSummary,
};
pub use flashcard::{FlashcardItem, FlashcardRequest, FlashcardSet};
pub use mindmap::{MindMapNode, MindMapRequest, MindMapResponse, MindMapTree};
pub use quiz::{
    PartialProgress, Quiz, QuizExplanationRequest, QuizExplanationResponse, QuizQuestion,
    QuizResponse, QuizResults, QuizSubmissionRequest, QuizSubmissionResponse, UserAnswer,
    UserAnswerResult,
};
pub use resources::Resources;
pub use user::{ProfileUpdateRequest, SubscriptionLevel, User};
pub use video::{TranscriptSegment, Video, VideoList, VideoListItem};
