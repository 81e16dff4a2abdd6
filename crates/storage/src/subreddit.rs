use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use yarc_core::{validate_new_subreddit, SubredditError, SubredditInfo, SubredditRepository};

/// Category labels reported by [`SqliteSubredditRepository::list`].
pub const DEFAULT_CATEGORIES: &[&str] = &["popular", "all", "random"];

/// Extended result code for `SQLITE_CONSTRAINT_UNIQUE`.
const UNIQUE_VIOLATION_CODE: &str = "2067";
/// Column guarded by the `sub_name_unique` index, as SQLite reports it.
const SUB_NAME_UNIQUE_TARGET: &str = "subreddit.sub_name";

/// Persistent subreddit repository backed by SQLite.
#[derive(Clone)]
pub struct SqliteSubredditRepository {
    pool: SqlitePool,
}

impl SqliteSubredditRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubredditRepository for SqliteSubredditRepository {
    fn list(&self) -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    async fn insert(&self, name: &str, description: &str) -> Result<(), SubredditError> {
        validate_new_subreddit(name, description)?;

        sqlx::query("INSERT INTO subreddit (sub_name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    SubredditError::DuplicateName
                } else {
                    SubredditError::storage(err)
                }
            })?;

        info!(stage = "storage", sub_name = %name, "subreddit created");
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<SubredditInfo, SubredditError> {
        let row = sqlx::query("SELECT sub_name, description FROM subreddit WHERE sub_name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                if !matches!(err, sqlx::Error::RowNotFound) {
                    debug!(stage = "storage", sub_name = %name, error = %err, "subreddit lookup failed");
                }
                SubredditError::NotFound
            })?;

        Ok(SubredditInfo::new(
            row.get::<String, _>("sub_name"),
            row.get::<String, _>("description"),
        ))
    }

    // Visit counting is not persisted yet; a counter store has to land first.
    async fn incr_visit_count(&self, _name: &str) {}

    // Ranking is not implemented yet, so nothing is ever trending.
    async fn get_trending(&self, _limit: i64) -> Result<Vec<SubredditInfo>, SubredditError> {
        Ok(Vec::new())
    }
}

/// Returns `true` when `err` is a violation of the `sub_name_unique` index.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };
    db_err.code().as_deref() == Some(UNIQUE_VIOLATION_CODE)
        && db_err.message().contains(SUB_NAME_UNIQUE_TARGET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_repo() -> (Database, SqliteSubredditRepository) {
        let db = Database::connect("sqlite::memory:").await.expect("connect");
        db.run_migrations().await.expect("migrations");
        let repo = db.subreddits();
        (db, repo)
    }

    async fn row_count(db: &Database) -> i64 {
        sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM subreddit")
            .fetch_one(db.pool())
            .await
            .expect("count rows")
            .0
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let (_db, repo) = setup_repo().await;
        repo.insert("radiohead", "Dedicated to all human beings.")
            .await
            .expect("insert succeeds");

        let info = repo.get("radiohead").await.expect("get succeeds");
        assert_eq!(info.name, "radiohead");
        assert_eq!(info.description, "Dedicated to all human beings.");
        assert_eq!(info.members, 0);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_db, repo) = setup_repo().await;
        let err = repo.get("nonexistent").await.unwrap_err();
        assert!(matches!(err, SubredditError::NotFound));
    }

    #[tokio::test]
    async fn get_is_case_sensitive() {
        let (_db, repo) = setup_repo().await;
        repo.insert("Radiohead", "").await.expect("insert");
        assert!(matches!(
            repo.get("radiohead").await,
            Err(SubredditError::NotFound)
        ));
    }

    #[tokio::test]
    async fn get_collapses_read_failures_into_not_found() {
        let (db, repo) = setup_repo().await;
        sqlx::query("DROP TABLE subreddit")
            .execute(db.pool())
            .await
            .expect("drop table");
        let err = repo.get("radiohead").await.unwrap_err();
        assert!(matches!(err, SubredditError::NotFound));
    }

    #[tokio::test]
    async fn insert_returns_duplicate_on_conflict() {
        let (db, repo) = setup_repo().await;
        repo.insert("radiohead", "Dedicated to all human beings.")
            .await
            .expect("first insert");
        let err = repo.insert("radiohead", "duplicate").await.unwrap_err();
        assert!(matches!(err, SubredditError::DuplicateName));

        let info = repo.get("radiohead").await.expect("original kept");
        assert_eq!(info.description, "Dedicated to all human beings.");
        assert_eq!(row_count(&db).await, 1);
    }

    #[tokio::test]
    async fn insert_rejects_invalid_input_without_writing() {
        let (db, repo) = setup_repo().await;
        assert!(matches!(
            repo.insert("bad name!", "x").await,
            Err(SubredditError::InvalidName)
        ));
        assert!(matches!(
            repo.insert("", "x").await,
            Err(SubredditError::InvalidName)
        ));
        assert!(matches!(
            repo.insert("ok", &"x".repeat(600)).await,
            Err(SubredditError::InvalidDescription)
        ));
        assert!(matches!(
            repo.insert("ok", &"é".repeat(300)).await,
            Err(SubredditError::InvalidDescription)
        ));

        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn other_storage_failures_are_passed_through() {
        let (db, repo) = setup_repo().await;
        sqlx::query("DROP TABLE subreddit")
            .execute(db.pool())
            .await
            .expect("drop table");

        let err = repo.insert("radiohead", "x").await.unwrap_err();
        assert!(matches!(err, SubredditError::Storage(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn list_returns_categories() {
        let (_db, repo) = setup_repo().await;
        assert_eq!(repo.list(), vec!["popular", "all", "random"]);
    }

    #[tokio::test]
    async fn visits_do_not_make_anything_trend() {
        let (db, repo) = setup_repo().await;
        repo.insert("radiohead", "x").await.expect("insert");

        repo.incr_visit_count("radiohead").await;
        repo.incr_visit_count("ghost").await;

        for limit in [-1, 0, 1, 5] {
            let trending = repo.get_trending(limit).await.expect("trending");
            assert!(trending.is_empty(), "limit {limit} should be empty");
        }
        assert_eq!(row_count(&db).await, 1);
    }
}
