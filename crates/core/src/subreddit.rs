use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUB_NAME_MIN_LEN: usize = 1;
pub const SUB_NAME_MAX_LEN: usize = 16;
pub const DESCRIPTION_MAX_LEN: usize = 512;

/// Public info of a subreddit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubredditInfo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub members: u32,
}

impl SubredditInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            members: 0,
        }
    }

    pub fn with_members(mut self, members: u32) -> Self {
        self.members = members;
        self
    }
}

/// Errors returned by every [`SubredditRepository`] implementation.
#[derive(Debug, Error)]
pub enum SubredditError {
    #[error("the subreddit name should be 1-16 alphanumerical or underscore characters")]
    InvalidName,
    #[error("the description should be at most 512 characters")]
    InvalidDescription,
    #[error("the subreddit name is used")]
    DuplicateName,
    #[error("the subreddit does not exist")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SubredditError {
    /// Wraps an opaque persistence failure without altering it.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }

    /// Returns `true` when the caller sent something it can correct.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Checks the length and character set of a subreddit name.
///
/// Names are restricted to `[A-Za-z0-9_]`, so byte length equals character
/// length.
pub fn validate_name(name: &str) -> Result<(), SubredditError> {
    let len = name.len();
    if !(SUB_NAME_MIN_LEN..=SUB_NAME_MAX_LEN).contains(&len) {
        return Err(SubredditError::InvalidName);
    }
    if !name
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
    {
        return Err(SubredditError::InvalidName);
    }
    Ok(())
}

/// Checks that a description is at most [`DESCRIPTION_MAX_LEN`] bytes long.
pub fn validate_description(description: &str) -> Result<(), SubredditError> {
    if description.len() > DESCRIPTION_MAX_LEN {
        return Err(SubredditError::InvalidDescription);
    }
    Ok(())
}

/// Runs the insert preconditions in order; the first failure wins.
pub fn validate_new_subreddit(name: &str, description: &str) -> Result<(), SubredditError> {
    validate_name(name)?;
    validate_description(description)
}

/// Capability set shared by the persistent and fixture repositories.
///
/// Implementations are selected at construction time and used through
/// `Arc<dyn SubredditRepository>`.
#[async_trait]
pub trait SubredditRepository: Send + Sync {
    /// Fixed list of community category labels.
    fn list(&self) -> Vec<String>;

    /// Validates and persists a new subreddit.
    ///
    /// Fails with [`SubredditError::InvalidName`] or
    /// [`SubredditError::InvalidDescription`] before touching the store, and
    /// with [`SubredditError::DuplicateName`] when the name is taken.
    async fn insert(&self, name: &str, description: &str) -> Result<(), SubredditError>;

    /// Looks a subreddit up by exact name. Any read failure is reported as
    /// [`SubredditError::NotFound`].
    async fn get(&self, name: &str) -> Result<SubredditInfo, SubredditError>;

    /// Records a view of `name`. Never fails; unknown names are ignored.
    ///
    /// Implementations that count visits must increment atomically in the
    /// shared store rather than read-modify-write in process.
    async fn incr_visit_count(&self, name: &str);

    /// Returns at most `limit` trending subreddits; `limit <= 0` yields none.
    async fn get_trending(&self, limit: i64) -> Result<Vec<SubredditInfo>, SubredditError>;
}
