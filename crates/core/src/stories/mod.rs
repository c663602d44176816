//! Stories module - domain models, services, and traits.

mod stories_model;
mod stories_service;
mod stories_traits;

pub use stories_model::{PassSummary, Story};
pub use stories_service::StoryService;
pub use stories_traits::{StoryRepositoryTrait, StoryServiceTrait};
