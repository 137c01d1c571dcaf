use serde::{Deserialize, Serialize};

/// Credentials posted to `/work-time`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Answer for one day's work time.
#[derive(Debug, Serialize)]
pub struct WorkTimeResponse {
    pub date: String,
    pub work_time: String,
}

/// API error payload
#[derive(Serialize)]
pub struct ApiError {
    pub message: String,
}
