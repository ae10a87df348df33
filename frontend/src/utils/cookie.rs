//! Session cookie access.
//!
//! The API hands back a bearer JWT on login; the browser keeps it in a
//! first-party cookie so every page (and the site server's admin gate) can
//! read it. Host builds have no `document`, so they use an in-memory jar.

pub const TOKEN_COOKIE_NAME: &str = "token";
pub const TOKEN_COOKIE_PATH: &str = "/";
/// Used when the token carries no `exp` claim.
pub const DEFAULT_TOKEN_MAX_AGE_SECS: i64 = 60 * 60 * 24;

pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

pub fn build_cookie(name: &str, value: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path={}; Max-Age={}; SameSite=Lax",
        name,
        value,
        TOKEN_COOKIE_PATH,
        max_age_secs.max(0)
    )
}

pub fn build_clear_cookie(name: &str) -> String {
    format!("{}=; Path={}; Max-Age=0; SameSite=Lax", name, TOKEN_COOKIE_PATH)
}

pub fn read_token() -> Option<String> {
    parse_cookie(&jar::read(), TOKEN_COOKIE_NAME)
}

pub fn write_token(token: &str, max_age_secs: Option<i64>) {
    let max_age = max_age_secs.unwrap_or(DEFAULT_TOKEN_MAX_AGE_SECS);
    jar::write(&build_cookie(TOKEN_COOKIE_NAME, token, max_age));
}

pub fn clear_token() {
    jar::write(&build_clear_cookie(TOKEN_COOKIE_NAME));
}

#[cfg(target_arch = "wasm32")]
mod jar {
    use wasm_bindgen::JsCast;

    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    pub fn read() -> String {
        document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    pub fn write(cookie: &str) {
        match document() {
            Some(doc) => {
                if doc.set_cookie(cookie).is_err() {
                    log::warn!("failed to write session cookie");
                }
            }
            None => log::warn!("no document available for session cookie"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod jar {
    use std::cell::RefCell;

    use super::parse_cookie;

    thread_local! {
        static JAR: RefCell<Vec<(String, String)>> = const { RefCell::new(Vec::new()) };
    }

    pub fn read() -> String {
        JAR.with(|jar| {
            jar.borrow()
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ")
        })
    }

    /// Mirrors `document.cookie = ...`: a `Max-Age=0` entry removes the cookie.
    pub fn write(cookie: &str) {
        let mut attributes = cookie.split(';').map(str::trim);
        let Some((name, value)) = attributes.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let expired = parse_cookie(cookie, "Max-Age").as_deref() == Some("0");
        JAR.with(|jar| {
            let mut jar = jar.borrow_mut();
            jar.retain(|(existing, _)| existing != name);
            if !expired && !value.is_empty() {
                jar.push((name.to_string(), value.to_string()));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cookie_finds_named_value() {
        let header = "theme=dark; token=abc.def.ghi; other=1";
        assert_eq!(parse_cookie(header, "token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(parse_cookie(header, "theme").as_deref(), Some("dark"));
        assert_eq!(parse_cookie(header, "missing"), None);
    }

    #[test]
    fn parse_cookie_ignores_empty_values() {
        assert_eq!(parse_cookie("token=; theme=dark", "token"), None);
    }

    #[test]
    fn build_cookie_sets_path_and_max_age() {
        let cookie = build_cookie("token", "abc", 3600);
        assert_eq!(cookie, "token=abc; Path=/; Max-Age=3600; SameSite=Lax");
        assert!(build_cookie("token", "abc", -5).contains("Max-Age=0"));
    }

    #[test]
    fn build_clear_cookie_expires_immediately() {
        assert!(build_clear_cookie("token").contains("Max-Age=0"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn token_round_trips_through_host_jar() {
        clear_token();
        assert_eq!(read_token(), None);
        write_token("abc.def.ghi", Some(60));
        assert_eq!(read_token().as_deref(), Some("abc.def.ghi"));
        clear_token();
        assert_eq!(read_token(), None);
    }
}
