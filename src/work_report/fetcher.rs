use log::debug;

use crate::error_handling::types::QueryError;
use crate::network::HttpClient;
use crate::session_management::SessionContext;
use crate::work_report::report;

/// Fetches one day's recorded work time through an authenticated session.
///
/// Every call is an independent round trip: no retries, no caching. Callers
/// wanting several days call once per day.
pub struct WorkTimeFetcher<'a> {
    client: &'a HttpClient,
    base_url: &'a str,
}

impl<'a> WorkTimeFetcher<'a> {
    pub fn new(client: &'a HttpClient, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Queries the work report for `day` (ISO-8601 date). The subject is
    /// `user_id_override` when given, otherwise the session's resolved user.
    ///
    /// An empty string means the server answered but recorded nothing for
    /// that day. Transport faults propagate; they mean the request itself
    /// did not complete.
    pub async fn query(
        &self,
        ctx: &mut SessionContext,
        day: &str,
        user_id_override: Option<&str>,
    ) -> Result<String, QueryError> {
        let code = user_id_override
            .map(str::to_string)
            .unwrap_or_else(|| ctx.user_id.clone());

        let params = [
            ("utf8", "✓"),
            ("code", code.as_str()),
            ("event_time[]", day),
            ("commit", "查询"),
        ];

        let url = format!("{}/cardinfos", self.base_url);
        let page = self.client.get(&url, &params, ctx.cookie()).await?;
        // Sessions may rotate on every request.
        ctx.update_token(page.session_cookie);

        let work_time = report::work_time_cell(&page.body).unwrap_or_default();
        debug!("work time for {} (code {}): {:?}", day, code, work_time);
        Ok(work_time)
    }
}
