/// Mutable record for one logical session against the remote application.
///
/// # Fields Overview
///
/// - `session_token`: opaque `_redmine_session` cookie value, empty when
///   unauthenticated. Any response may rotate it; the latest value wins.
/// - `user_id`: the remote system's id for the authenticated principal,
///   empty until a login resolved one.
/// - `username` / `password`: last credentials handed to a login attempt.
#[derive(Debug, Default, Clone)]
pub struct SessionContext {
    pub session_token: String,
    pub user_id: String,
    pub username: String,
    pub password: String,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the session token and user id. Run at the start of every login
    /// attempt so a failed re-login cannot leave stale identity data behind.
    /// Credentials are left alone; the login flow overwrites them itself.
    pub fn reset(&mut self) {
        self.session_token.clear();
        self.user_id.clear();
    }

    /// Adopts a rotated session token if the response carried one.
    pub fn update_token(&mut self, token: Option<String>) {
        if let Some(token) = token {
            self.session_token = token;
        }
    }

    /// Cookie value to send with the next request, `None` when no session
    /// token has been captured yet.
    pub fn cookie(&self) -> Option<&str> {
        if self.session_token.is_empty() {
            None
        } else {
            Some(self.session_token.as_str())
        }
    }
}
