pub mod auth;
pub mod path;

pub use auth::{Auth, OptionalAuth, issue_token};
pub use path::IdPath;
