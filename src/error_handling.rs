pub mod types;

pub use types::{ConfigError, LoginError, QueryError, WebError};
