pub mod configuration;
pub use configuration::Config;

pub mod error_handling;

pub mod network;
pub use network::HttpClient;

pub mod session_management;
pub use session_management::SessionContext;

pub mod authentication;
pub use authentication::Authenticator;

pub mod work_report;
pub use work_report::WorkTimeFetcher;

pub mod web_interface;
pub use web_interface::WebServer;
