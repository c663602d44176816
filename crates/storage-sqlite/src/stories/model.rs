//! Database models for stories.

use diesel::prelude::*;

/// Database model for stories
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::stories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoryDB {
    pub id: String,
    pub title: String,
    pub url: String,
    pub points: i64,
}

// Conversion to domain models
impl From<StoryDB> for storywatch_core::stories::Story {
    fn from(db: StoryDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            url: db.url,
            points: db.points,
        }
    }
}

impl From<storywatch_core::stories::Story> for StoryDB {
    fn from(domain: storywatch_core::stories::Story) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            url: domain.url,
            points: domain.points,
        }
    }
}
