use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    EmptyBaseUrl(String),
    BadIPFormatting(String),
    NotInRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::EmptyBaseUrl(e) => write!(f, "Base URL error: {}", e),
            ConfigError::BadIPFormatting(e) => write!(f, "IP formatting error: {}", e),
            ConfigError::NotInRange(e) => write!(f, "Value out of range: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// Why a login attempt failed. All variants collapse to `false` at the
/// `Authenticator::login` boundary; the variant is only logged.
#[derive(Debug)]
pub enum LoginError {
    EmptyCredentials,
    CsrfTokenMissing,
    UserIdNotFound,
    Transport(reqwest::Error),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::EmptyCredentials => write!(f, "Username or password is empty"),
            LoginError::CsrfTokenMissing => write!(f, "Login page carried no csrf-token meta tag"),
            LoginError::UserIdNotFound => {
                write!(f, "Could not resolve a user id from the landing page")
            }
            LoginError::Transport(e) => write!(f, "Transport error during login: {}", e),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<reqwest::Error> for LoginError {
    fn from(err: reqwest::Error) -> Self {
        LoginError::Transport(err)
    }
}

/// A work-report query only fails when the request itself did not complete.
/// A missing table is an empty result, not an error.
#[derive(Debug)]
pub enum QueryError {
    Transport(reqwest::Error),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Transport(e) => write!(f, "Transport error during query: {}", e),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Transport(err)
    }
}

#[derive(Debug)]
pub enum WebError {
    InvalidBindAddress(String),
    ClientBuildFailed(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::InvalidBindAddress(e) => write!(f, "Invalid bind address: {}", e),
            WebError::ClientBuildFailed(e) => write!(f, "HTTP client build failed: {}", e),
        }
    }
}

impl std::error::Error for WebError {}
