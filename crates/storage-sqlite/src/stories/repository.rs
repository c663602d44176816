use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::info;
use std::sync::Arc;

use super::model::StoryDB;
use crate::db::{apply_migrations, get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::stories;
use storywatch_core::errors::{DatabaseError, Error, Result};
use storywatch_core::stories::{Story, StoryRepositoryTrait};

pub struct StoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        StoryRepository { pool, writer }
    }
}

#[async_trait]
impl StoryRepositoryTrait for StoryRepository {
    async fn ensure_ready(&self) -> Result<()> {
        // Routed through the writer so racing first-time callers run one after another.
        let applied = self
            .writer
            .exec(|conn: &mut SqliteConnection| apply_migrations(conn))
            .await?;
        if !applied.is_empty() {
            info!("Created stories table (migrations: {})", applied.join(", "));
        }
        Ok(())
    }

    fn lookup(&self, story_id: &str) -> Result<Option<Story>> {
        let mut conn = get_connection(&self.pool)?;
        let found = stories::table
            .find(story_id)
            .select(StoryDB::as_select())
            .first::<StoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Story::from))
    }

    fn list(&self) -> Result<Vec<Story>> {
        let mut conn = get_connection(&self.pool)?;
        let stories_db = stories::table
            .select(StoryDB::as_select())
            .load::<StoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(stories_db.into_iter().map(Story::from).collect())
    }

    async fn create(&self, story: Story) -> Result<Story> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Story> {
                let story_db: StoryDB = story.into();
                diesel::insert_into(stories::table)
                    .values(&story_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Story::from(story_db))
            })
            .await
    }

    async fn refresh_points(&self, story_id: &str, new_points: i64) -> Result<()> {
        let story_id = story_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let updated = diesel::update(stories::table.find(story_id.as_str()))
                    .set(stories::points.eq(new_points))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Story {}",
                        story_id
                    ))));
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, spawn_writer};
    use tempfile::{tempdir, TempDir};

    fn story(id: &str, title: &str, url: &str, points: i64) -> Story {
        Story {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            points,
        }
    }

    async fn setup() -> (TempDir, StoryRepository) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("stories_test.db");
        let db_path = init(db_path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        let writer = spawn_writer(&pool).unwrap();
        let repo = StoryRepository::new(pool, writer);
        repo.ensure_ready().await.unwrap();
        (dir, repo)
    }

    #[tokio::test]
    async fn test_lookup_missing_returns_none() {
        let (_dir, repo) = setup().await;
        assert_eq!(repo.lookup("404").unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_then_lookup() {
        let (_dir, repo) = setup().await;
        let created = repo.create(story("1", "A", "http://a", 10)).await.unwrap();
        assert_eq!(created, story("1", "A", "http://a", 10));
        assert_eq!(
            repo.lookup("1").unwrap(),
            Some(story("1", "A", "http://a", 10))
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict_and_does_not_overwrite() {
        let (_dir, repo) = setup().await;
        repo.create(story("1", "A", "http://a", 10)).await.unwrap();

        let err = repo
            .create(story("1", "Other", "http://other", 99))
            .await
            .unwrap_err();

        assert!(err.is_conflict(), "unexpected error: {}", err);
        assert_eq!(
            repo.lookup("1").unwrap(),
            Some(story("1", "A", "http://a", 10))
        );
    }

    #[tokio::test]
    async fn test_refresh_points_only_touches_points() {
        let (_dir, repo) = setup().await;
        repo.create(story("1", "A", "http://a", 10)).await.unwrap();

        repo.refresh_points("1", 20).await.unwrap();

        assert_eq!(
            repo.lookup("1").unwrap(),
            Some(story("1", "A", "http://a", 20))
        );
    }

    #[tokio::test]
    async fn test_refresh_points_missing_is_not_found() {
        let (_dir, repo) = setup().await;
        let err = repo.refresh_points("missing", 5).await.unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_ensure_ready_is_idempotent_and_keeps_data() {
        let (_dir, repo) = setup().await;
        repo.create(story("1", "A", "http://a", 10)).await.unwrap();

        repo.ensure_ready().await.unwrap();
        repo.ensure_ready().await.unwrap();

        assert_eq!(repo.list().unwrap(), vec![story("1", "A", "http://a", 10)]);
    }

    #[tokio::test]
    async fn test_concurrent_ensure_ready_on_fresh_database() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("fresh.db");
        let db_path = init(db_path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        let writer = spawn_writer(&pool).unwrap();
        let repo = StoryRepository::new(pool, writer);

        let (first, second) = tokio::join!(repo.ensure_ready(), repo.ensure_ready());
        first.unwrap();
        second.unwrap();

        assert!(repo.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_every_story() {
        let (_dir, repo) = setup().await;
        repo.create(story("1", "A", "http://a", 10)).await.unwrap();
        repo.create(story("2", "B", "http://b", 5)).await.unwrap();

        let mut all = repo.list().unwrap();
        all.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(
            all,
            vec![story("1", "A", "http://a", 10), story("2", "B", "http://b", 5)]
        );
    }
}
