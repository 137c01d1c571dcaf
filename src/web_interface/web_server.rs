use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use log::info;
use warp::{reply, Filter, Rejection};

use crate::configuration::Config;
use crate::error_handling::types::WebError;
use crate::web_interface::routes;
use crate::web_interface::types::LoginRequest;

/// Web server exposing the scraping core over HTTP.
pub struct WebServer {
    config: Arc<Config>,
}

impl WebServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Start the web server on the configured address and port.
    pub async fn start(&self) -> Result<(), WebError> {
        let ip: IpAddr = self
            .config
            .bind_address
            .parse()
            .map_err(|_| WebError::InvalidBindAddress(self.config.bind_address.clone()))?;

        // Clone shared deps into filters
        let config = self.config.clone();

        // GET / -> status page
        let dashboard = warp::path::end().and(warp::get()).and_then(|| async move {
            let html = r#"<html><head><title>cardtime</title></head>
                <body><h1>cardtime is running</h1><p>POST /work-time with {"username","password"}.</p></body></html>"#;
            Ok::<_, Rejection>(reply::html(html))
        });

        // POST /work-time -> today's work time
        let work_time = warp::path("work-time")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |request: LoginRequest| {
                let config = config.clone();
                async move { routes::work_time_today(request, config).await }
            });

        // Compose routes
        let routes = dashboard.or(work_time);

        let addr: SocketAddr = (ip, self.config.web_ui_port).into();
        info!("web interface listening on {}", addr);

        // Start server (warp 0.4)
        warp::serve(routes).run(addr).await;

        Ok(())
    }
}
