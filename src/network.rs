// Network module root
pub mod http_client;
pub mod types;

pub use http_client::HttpClient;
pub use types::{PageResponse, SESSION_COOKIE};
