use std::sync::Arc;

use chrono::Local;
use log::info;
use warp::{http::StatusCode, reply, Rejection, Reply};

use crate::authentication::Authenticator;
use crate::configuration::Config;
use crate::network::HttpClient;
use crate::session_management::SessionContext;
use crate::web_interface::types::{ApiError, LoginRequest, WorkTimeResponse};
use crate::work_report::WorkTimeFetcher;

/// What went wrong while serving one `/work-time` request.
#[derive(Debug)]
pub(crate) enum WorkTimeFailure {
    /// Credentials rejected, or the handshake could not complete.
    LoginFailed,
    /// The query reached past login but the upstream request did not complete.
    Upstream(String),
}

/// POST /work-time -> today's work time for the given credentials.
pub async fn work_time_today(
    request: LoginRequest,
    config: Arc<Config>,
) -> Result<impl Reply, Rejection> {
    match fetch_today(&config, &request).await {
        Ok(answer) => Ok::<_, Rejection>(
            reply::with_status(reply::json(&answer), StatusCode::OK).into_response(),
        ),
        Err(WorkTimeFailure::LoginFailed) => Ok(reply::with_status(
            reply::json(&ApiError {
                message: "Login failed, check username and password".to_string(),
            }),
            StatusCode::UNAUTHORIZED,
        )
        .into_response()),
        Err(WorkTimeFailure::Upstream(message)) => Ok(reply::with_status(
            reply::json(&ApiError { message }),
            StatusCode::BAD_GATEWAY,
        )
        .into_response()),
    }
}

/// Logs in with a request-scoped session and queries today's work time.
/// Each request gets its own [`SessionContext`], so concurrent callers with
/// different credentials never see each other's session material.
pub(crate) async fn fetch_today(
    config: &Config,
    request: &LoginRequest,
) -> Result<WorkTimeResponse, WorkTimeFailure> {
    let client = HttpClient::new().map_err(|e| WorkTimeFailure::Upstream(e.to_string()))?;
    let base_url = config.base_url();
    let mut ctx = SessionContext::new();

    let authenticator = Authenticator::new(&client, base_url);
    if !authenticator
        .login(&mut ctx, &request.username, &request.password)
        .await
    {
        return Err(WorkTimeFailure::LoginFailed);
    }

    let today = Local::now().format("%Y-%m-%d").to_string();
    info!("querying work time for {} (user id {})", today, ctx.user_id);

    let fetcher = WorkTimeFetcher::new(&client, base_url);
    let user_id = ctx.user_id.clone();
    let work_time = fetcher
        .query(&mut ctx, &today, Some(&user_id))
        .await
        .map_err(|e| WorkTimeFailure::Upstream(e.to_string()))?;

    Ok(WorkTimeResponse {
        date: today,
        work_time,
    })
}
