use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use reqwest::{redirect, Client, ClientBuilder};

use super::types::{PageResponse, SESSION_COOKIE};

/// HTTP transport for the scraping core.
///
/// Redirects are never followed: a redirect during login or a query is part of
/// the handshake (or a sign the server routed us somewhere unexpected) and is
/// handed back to the caller as-is. Cookies are managed by hand because only
/// one cookie matters and the session layer decides when it rotates.
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = ClientBuilder::new()
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { inner })
    }

    /// GET `url` with optional query parameters and session cookie.
    pub async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        session_cookie: Option<&str>,
    ) -> Result<PageResponse, reqwest::Error> {
        let mut request = self.inner.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(cookie) = session_cookie {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, cookie));
        }

        let response = request.send().await?;
        Self::into_page(response).await
    }

    /// POST a form-encoded body to `url` with optional session cookie.
    pub async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        session_cookie: Option<&str>,
    ) -> Result<PageResponse, reqwest::Error> {
        let mut request = self.inner.post(url).form(form);
        if let Some(cookie) = session_cookie {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, cookie));
        }

        let response = request.send().await?;
        Self::into_page(response).await
    }

    async fn into_page(response: reqwest::Response) -> Result<PageResponse, reqwest::Error> {
        let status = response.status();
        let session_cookie = session_cookie_value(response.headers());
        let body = response.text().await?;
        debug!(
            "response status={} body_len={} rotated_cookie={}",
            status,
            body.len(),
            session_cookie.is_some()
        );
        Ok(PageResponse {
            status,
            body,
            session_cookie,
        })
    }
}

/// Pulls the session cookie value out of the `Set-Cookie` headers, if any.
/// When the server sets it more than once, the last one wins.
pub fn session_cookie_value(headers: &HeaderMap) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE);
    let mut value = None;
    for header in headers.get_all(SET_COOKIE) {
        let Ok(raw) = header.to_str() else {
            continue;
        };
        if let Some(rest) = raw.strip_prefix(&prefix) {
            let cookie = rest.split(';').next().unwrap_or(rest);
            value = Some(cookie.to_string());
        }
    }
    value
}
