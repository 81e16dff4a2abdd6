use async_trait::async_trait;

use yarc_core::{SubredditError, SubredditInfo, SubredditRepository};

const RADIOHEAD_DESCRIPTION: &str = "Dedicated to all human beings.";

/// In-memory stand-in that answers with canned data.
///
/// Lets callers be exercised without a live database. Nothing is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSubredditRepository;

impl FixtureSubredditRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubredditRepository for FixtureSubredditRepository {
    fn list(&self) -> Vec<String> {
        vec!["meirl".to_string(), "dankmeme".to_string()]
    }

    async fn insert(&self, _name: &str, _description: &str) -> Result<(), SubredditError> {
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<SubredditInfo, SubredditError> {
        if name == "radiohead" {
            return Ok(SubredditInfo::new("radiohead", RADIOHEAD_DESCRIPTION).with_members(3));
        }
        Err(SubredditError::NotFound)
    }

    async fn incr_visit_count(&self, _name: &str) {}

    async fn get_trending(&self, _limit: i64) -> Result<Vec<SubredditInfo>, SubredditError> {
        Ok(vec![
            SubredditInfo::new("radiohead", RADIOHEAD_DESCRIPTION),
            SubredditInfo::new("underrated", "Let down and hanging around.").with_members(4),
        ])
    }
}
