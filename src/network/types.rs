use reqwest::StatusCode;

/// Name of the session cookie the remote Redmine instance issues and expects.
pub const SESSION_COOKIE: &str = "_redmine_session";

/// One fully-read HTTP exchange, reduced to what the scraping core needs.
pub struct PageResponse {
    /// Raw status code. Redirects are never followed, so 3xx shows up here.
    pub status: StatusCode,
    /// Decoded response body.
    pub body: String,
    /// Value of the session cookie if this response rotated it.
    pub session_cookie: Option<String>,
}
