//! Store-agnostic subreddit domain.
//!
//! Validation rules, the error taxonomy and the [`SubredditRepository`]
//! capability set live here so that the persistent and fixture variants in
//! `yarc-storage` can be swapped without callers noticing.
pub mod subreddit;

pub use subreddit::{
    validate_description, validate_name, validate_new_subreddit, SubredditError,
    SubredditInfo, SubredditRepository, DESCRIPTION_MAX_LEN, SUB_NAME_MAX_LEN, SUB_NAME_MIN_LEN,
};
