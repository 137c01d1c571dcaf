//! End-to-end login tests against a local stub server.
//!
//! The stub speaks just enough HTTP/1.1 for reqwest: every response closes
//! the connection, so each exchange arrives on a fresh accept and the
//! captured requests line up one-to-one with the scripted responses.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::authentication::Authenticator;
use crate::network::HttpClient;
use crate::session_management::SessionContext;

pub fn http_response(status_line: &str, set_cookie: Option<&str>, body: &str) -> String {
    let mut response = format!("HTTP/1.1 {}\r\n", status_line);
    response.push_str("Content-Type: text/html; charset=utf-8\r\n");
    response.push_str("Connection: close\r\n");
    if let Some(cookie) = set_cookie {
        response.push_str(&format!(
            "Set-Cookie: _redmine_session={}; path=/; HttpOnly\r\n",
            cookie
        ));
    }
    response.push_str(&format!("Content-Length: {}\r\n\r\n", body.len()));
    response.push_str(body);
    response
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

async fn read_request(sock: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = sock.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Serves the scripted responses in order, one connection each, and returns
/// the raw requests it saw.
pub fn spawn_stub(listener: TcpListener, responses: Vec<String>) -> JoinHandle<Vec<String>> {
    tokio::spawn(async move {
        let mut captured = Vec::new();
        for response in responses {
            let (mut sock, _) = listener.accept().await.unwrap();
            captured.push(read_request(&mut sock).await);
            sock.write_all(response.as_bytes()).await.unwrap();
            sock.shutdown().await.unwrap();
        }
        captured
    })
}

pub async fn stub_base_url() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("http://{}", addr))
}

const LOGIN_PAGE: &str = r#"<html><head><meta name="csrf-token" content="tok123"/></head>
<body><form action="/login" method="post"></form></body></html>"#;

const LANDING_PAGE: &str = r#"<html><head></head><body>
<div id="loggedas">Logged in as <a href="/people/901">alice</a></div>
</body></html>"#;

const LANDING_PAGE_NO_USER: &str =
    r#"<html><head></head><body><a href="/projects/1">p</a></body></html>"#;

#[tokio::test]
async fn full_login_handshake_resolves_user_and_carries_cookies() {
    let (listener, base_url) = stub_base_url().await;
    let stub = spawn_stub(
        listener,
        vec![
            http_response("200 OK", Some("cookie1"), LOGIN_PAGE),
            http_response("302 Found", Some("cookie2"), ""),
            http_response("200 OK", Some("cookie3"), LANDING_PAGE),
        ],
    );

    let client = HttpClient::new().unwrap();
    let auth = Authenticator::new(&client, &base_url);
    let mut ctx = SessionContext::new();

    assert!(auth.login(&mut ctx, "alice", "secret").await);
    assert_eq!(ctx.user_id, "901");
    assert_eq!(ctx.session_token, "cookie3");
    assert_eq!(ctx.username, "alice");

    let requests = stub.await.unwrap();
    assert_eq!(requests.len(), 3);
    // Step 1 has no cookie yet.
    assert!(!requests[0].contains("_redmine_session"));
    // Step 2 carries the cookie from step 1 and the form fields.
    assert!(requests[1].contains("_redmine_session=cookie1"));
    assert!(requests[1].contains("authenticity_token=tok123"));
    assert!(requests[1].contains("username=alice"));
    assert!(requests[1].contains("password=secret"));
    assert!(requests[1].contains("back_url=%2Fcardinfos"));
    assert!(requests[1].contains("utf8=%E2%9C%93"));
    // Step 3 carries the rotated cookie from step 2.
    assert!(requests[2].contains("_redmine_session=cookie2"));
}

#[tokio::test]
async fn missing_csrf_token_aborts_before_submit() {
    let (listener, base_url) = stub_base_url().await;
    let page = r#"<html><head><title>Login</title></head><body></body></html>"#;
    let stub = spawn_stub(
        listener,
        vec![http_response("200 OK", Some("cookie1"), page)],
    );

    let client = HttpClient::new().unwrap();
    let auth = Authenticator::new(&client, &base_url);
    let mut ctx = SessionContext::new();

    assert!(!auth.login(&mut ctx, "alice", "secret").await);
    assert!(ctx.user_id.is_empty());
    // The cookie from the failed attempt is still kept.
    assert_eq!(ctx.session_token, "cookie1");

    let requests = stub.await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn unresolvable_user_id_fails_login() {
    let (listener, base_url) = stub_base_url().await;
    let stub = spawn_stub(
        listener,
        vec![
            http_response("200 OK", Some("cookie1"), LOGIN_PAGE),
            http_response("302 Found", None, ""),
            http_response("200 OK", None, LANDING_PAGE_NO_USER),
        ],
    );

    let client = HttpClient::new().unwrap();
    let auth = Authenticator::new(&client, &base_url);
    let mut ctx = SessionContext::new();

    assert!(!auth.login(&mut ctx, "alice", "secret").await);
    assert!(ctx.user_id.is_empty());

    stub.await.unwrap();
}

#[tokio::test]
async fn relogin_clears_previous_identity() {
    let (listener, base_url) = stub_base_url().await;
    let stub = spawn_stub(
        listener,
        vec![
            // First attempt succeeds.
            http_response("200 OK", Some("cookie1"), LOGIN_PAGE),
            http_response("302 Found", Some("cookie2"), ""),
            http_response("200 OK", None, LANDING_PAGE),
            // Second attempt resolves no user id.
            http_response("200 OK", Some("cookie4"), LOGIN_PAGE),
            http_response("302 Found", None, ""),
            http_response("200 OK", None, LANDING_PAGE_NO_USER),
        ],
    );

    let client = HttpClient::new().unwrap();
    let auth = Authenticator::new(&client, &base_url);
    let mut ctx = SessionContext::new();

    assert!(auth.login(&mut ctx, "alice", "secret").await);
    assert_eq!(ctx.user_id, "901");

    assert!(!auth.login(&mut ctx, "alice", "changed").await);
    // No stale identifier leaks out of the failed re-login.
    assert!(ctx.user_id.is_empty());

    stub.await.unwrap();
}
