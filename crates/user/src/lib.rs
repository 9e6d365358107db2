//! Directed user→user follow graph and subscription listings.

mod error;
pub mod follow;
pub mod model;

pub use error::FollowError;
pub use follow::{DEFAULT_RECIPES_LIMIT, follow, list_following, parse_recipes_limit, unfollow};
pub use model::{Subscription, UserRow};
