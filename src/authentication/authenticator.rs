use log::{info, warn};

use crate::authentication::identity;
use crate::error_handling::types::LoginError;
use crate::network::HttpClient;
use crate::session_management::SessionContext;

/// Drives the three-step login handshake and populates a [`SessionContext`].
///
/// # Fields Overview
///
/// - `client`: transport with redirects disabled, shared with the fetcher
/// - `base_url`: scheme + host of the Redmine instance, no trailing slash
pub struct Authenticator<'a> {
    client: &'a HttpClient,
    base_url: &'a str,
}

impl<'a> Authenticator<'a> {
    pub fn new(client: &'a HttpClient, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Logs in and reports success as a plain boolean. The failure reason is
    /// logged, never surfaced; callers only branch on whether the session is
    /// usable afterwards.
    pub async fn login(&self, ctx: &mut SessionContext, username: &str, password: &str) -> bool {
        match self.try_login(ctx, username, password).await {
            Ok(()) => {
                info!("login succeeded, user id {}", ctx.user_id);
                true
            }
            Err(e) => {
                warn!("login failed: {}", e);
                false
            }
        }
    }

    /// The handshake itself. Any failed step aborts the whole attempt; there
    /// is no partial retry. Session cookies are adopted eagerly after every
    /// exchange, so even a failing attempt leaves the freshest cookie behind.
    pub async fn try_login(
        &self,
        ctx: &mut SessionContext,
        username: &str,
        password: &str,
    ) -> Result<(), LoginError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(LoginError::EmptyCredentials);
        }

        ctx.reset();
        ctx.username = username.to_string();
        ctx.password = password.to_string();

        // Step 1: fetch the login form for a session cookie and a CSRF token.
        let login_url = format!("{}/login", self.base_url);
        let page = self.client.get(&login_url, &[], ctx.cookie()).await?;
        ctx.update_token(page.session_cookie);

        let token = identity::csrf_token(&page.body).ok_or(LoginError::CsrfTokenMissing)?;

        // Step 2: submit the credentials. Success shows up as a redirect to
        // back_url, but the status is not inspected; step 3 decides.
        let form = [
            ("utf8", "✓"),
            ("authenticity_token", token.as_str()),
            ("back_url", "/cardinfos"),
            ("username", username),
            ("password", password),
            ("login", "登录"),
        ];
        let submit = self
            .client
            .post_form(&login_url, &form, ctx.cookie())
            .await?;
        ctx.update_token(submit.session_cookie);

        // Step 3: read the landing page and recover who the server thinks
        // we are. No resolvable user id means the login did not take.
        let landing_url = format!("{}/cardinfos", self.base_url);
        let landing = self.client.get(&landing_url, &[], ctx.cookie()).await?;
        ctx.update_token(landing.session_cookie);

        let user_id = identity::resolve_user_id(&landing.body).ok_or(LoginError::UserIdNotFound)?;
        ctx.user_id = user_id;

        Ok(())
    }
}
