//! Markup inspection for the login handshake.
//!
//! Everything here is a pure function over a response body. Misses are
//! `None`, never errors; the caller decides what a miss means.

use regex::Regex;
use scraper::{Html, Selector};

/// An identifier-extraction strategy over a parsed landing page.
type Strategy = fn(&Html) -> Option<String>;

/// Applied in order, first hit wins.
const STRATEGIES: [Strategy; 2] = [from_logged_in_container, from_any_people_link];

/// CSRF token from the login page's `<meta name="csrf-token">` head tag.
///
/// A tag without a `content` attribute yields an empty token; only a missing
/// tag yields `None`.
pub fn csrf_token(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(r#"head meta[name="csrf-token"]"#).ok()?;
    let tag = document.select(&selector).next()?;
    Some(tag.value().attr("content").unwrap_or_default().to_string())
}

/// Resolves the authenticated user's id from the landing page.
pub fn resolve_user_id(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    STRATEGIES.iter().find_map(|strategy| strategy(&document))
}

/// Primary: the "logged in as" container links to the user's own page; the
/// id is the last path segment of that link.
fn from_logged_in_container(document: &Html) -> Option<String> {
    let selector = Selector::parse("div#loggedas a").ok()?;
    let link = document.select(&selector).next()?;
    let href = link.value().attr("href")?;
    let id = href.rsplit('/').next()?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

/// Fallback: any link to `/people/<digits>` anywhere in the document.
fn from_any_people_link(document: &Html) -> Option<String> {
    let pattern = Regex::new(r"/people/(\d+)").ok()?;
    let selector = Selector::parse("a").ok()?;
    document
        .select(&selector)
        .filter_map(|link| link.value().attr("href"))
        .find_map(|href| pattern.captures(href).map(|caps| caps[1].to_string()))
}
