//! SQLite storage implementation for stories.

mod model;
mod repository;

pub use model::StoryDB;
pub use repository::StoryRepository;
