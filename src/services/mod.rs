//! Domain services: one stateless façade per resource type
//!
//! Each service obtains a bearer token from the identity collaborator,
//! builds the typed request body where one is needed, and calls either the
//! cached or the uncached API client path for its endpoints. Which path a
//! method uses is a per-endpoint decision: listings and per-video artifacts
//! cache well, while detail views and anything generated-on-demand are
//! fetched fresh.

mod billing;
mod chat;
mod course;
mod flashcard;
mod mindmap;
mod quiz;
mod resources;
mod user;
mod video;

pub use billing::BillingService;
pub use chat::ChatService;
pub use course::CourseService;
pub use flashcard::FlashcardService;
pub use mindmap::MindMapService;
pub use quiz::{QuizError, QuizService};
pub use resources::ResourcesService;
pub use user::UserService;
pub use video::VideoService;
