use axum::{
    extract::Request,
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::session::{self, SessionError};

pub const TOKEN_COOKIE_NAME: &str = "token";

pub fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

pub fn extract_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == name && !value.trim().is_empty()).then(|| value.trim().to_string())
        })
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(rest.trim()).filter(|token| !token.is_empty())
    } else {
        None
    }
}

/// Session token from the `token` cookie, falling back to a bearer header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie_value(headers, TOKEN_COOKIE_NAME).or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_bearer_token)
            .map(str::to_string)
    })
}

pub fn login_redirect_target(path_and_query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(path_and_query.as_bytes()).collect();
    format!("/login?redirect={}", encoded)
}

#[derive(Debug, PartialEq)]
pub enum GateDecision {
    Allow,
    Login,
    Home,
}

pub fn decide(token: Option<&str>, now_ts: i64) -> GateDecision {
    let Some(token) = token else {
        return GateDecision::Login;
    };
    match session::decode_session(token, now_ts) {
        Ok(claims) if claims.is_admin() => GateDecision::Allow,
        Ok(claims) => {
            tracing::info!(sub = ?claims.sub, "Non-admin session turned away from admin pages");
            GateDecision::Home
        }
        Err(SessionError::Expired) => GateDecision::Login,
        Err(err) => {
            tracing::debug!(error = %err, "Rejecting unreadable admin session");
            GateDecision::Login
        }
    }
}

/// Sends visitors without an admin session away from `/admin` before the
/// SPA shell is served.
pub async fn admin_gate(req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if !is_admin_path(path) {
        return next.run(req).await;
    }

    let token = session_token(req.headers());
    match decide(token.as_deref(), chrono::Utc::now().timestamp()) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Login => {
            let target = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or(path);
            Redirect::temporary(&login_redirect_target(target)).into_response()
        }
        GateDecision::Home => Redirect::temporary("/").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::sign_for_tests;
    use axum::{
        body::Body,
        http::{header::LOCATION, HeaderValue, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt;

    const NOW: i64 = 1_750_000_000;

    fn app() -> Router {
        Router::new()
            .route("/admin", get(|| async { "dashboard" }))
            .route("/admin/houses", get(|| async { "houses" }))
            .route("/administrator", get(|| async { "not gated" }))
            .layer(axum::middleware::from_fn(admin_gate))
    }

    fn future_token(role: &str) -> String {
        let exp = chrono::Utc::now().timestamp() + 3600;
        sign_for_tests(&json!({ "sub": "1", "role": role, "exp": exp }))
    }

    #[test]
    fn admin_paths_are_exact_or_nested() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/bookings"));
        assert!(!is_admin_path("/administrator"));
        assert!(!is_admin_path("/houses/admin"));
    }

    #[test]
    fn cookie_wins_over_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; token=abc.def.ghi"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));

        headers.remove(COOKIE);
        assert_eq!(session_token(&headers).as_deref(), Some("other"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn login_redirect_encodes_the_original_path() {
        assert_eq!(login_redirect_target("/admin"), "/login?redirect=%2Fadmin");
        assert_eq!(
            login_redirect_target("/admin/bookings?status=Pending"),
            "/login?redirect=%2Fadmin%2Fbookings%3Fstatus%3DPending"
        );
    }

    #[test]
    fn decisions_follow_role_and_expiry() {
        let admin = sign_for_tests(&json!({ "role": "Admin", "exp": NOW + 10 }));
        let user = sign_for_tests(&json!({ "role": "User", "exp": NOW + 10 }));
        let expired = sign_for_tests(&json!({ "role": "Admin", "exp": NOW - 10 }));
        let no_exp = sign_for_tests(&json!({ "role": "Admin" }));

        assert_eq!(decide(Some(&admin), NOW), GateDecision::Allow);
        assert_eq!(decide(Some(&user), NOW), GateDecision::Home);
        assert_eq!(decide(Some(&expired), NOW), GateDecision::Login);
        assert_eq!(decide(Some(&no_exp), NOW), GateDecision::Login);
        assert_eq!(decide(Some("junk"), NOW), GateDecision::Login);
        assert_eq!(decide(None, NOW), GateDecision::Login);
    }

    #[tokio::test]
    async fn anonymous_visitors_are_sent_to_login() {
        let response = app()
            .oneshot(Request::builder().uri("/admin/houses").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/login?redirect=%2Fadmin%2Fhouses"
        );
    }

    #[tokio::test]
    async fn non_admins_are_sent_home() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/admin")
                    .header(COOKIE, format!("token={}", future_token("User")))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn admins_and_other_paths_pass_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/admin/houses")
                    .header(AUTHORIZATION, format!("Bearer {}", future_token("Admin")))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(Request::builder().uri("/administrator").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
