use crate::config::db::DB;
use crate::errors::{unauthorized, ApiResult};
use crate::model::admin::{Admin, AdminPublic, AdminSession};
use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Admin identity attached to guarded requests.
///
/// Inserted into the request's extension map once the session token has been
/// resolved; handlers pull it back out with `Extension<CurrentAdmin>`.
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub admin: AdminPublic,
    /// The token that authenticated this request (logout deletes it).
    pub session_id: String,
}

/// Middleware validating the admin session on guarded routes.
///
/// Requests to unguarded routes pass straight through. For guarded routes the
/// bearer credential is taken from the `token` cookie or the `Authorization`
/// header and resolved against the session table; a missing token and an
/// unknown or expired one are both 401s.
pub async fn check_access(db: Arc<DB>, mut request: Request, next: Next) -> ApiResult<Response> {
    if !is_guarded(request.method(), request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = get_cookie(&request, "token")
        .or(extract_bearer(&request))
        .ok_or(unauthorized("No session token provided"))?;

    let admin: Admin = AdminSession::find_valid(&db, &token)
        .await?
        .ok_or(unauthorized("Invalid or expired session"))?;

    request.extensions_mut().insert(CurrentAdmin {
        admin: AdminPublic::from(admin),
        session_id: token,
    });

    Ok(next.run(request).await)
}

// Paths here are relative to the /api nest. Everything under /admin needs a
// session except the two entry points; blog reads are public but blog writes
// share the public paths, so those are told apart by method.
fn is_guarded(method: &Method, path: &str) -> bool {
    if let Some(rest) = path.strip_prefix("/admin") {
        !matches!(rest, "/login" | "/create-default")
    } else if path == "/blog" || path.starts_with("/blog/") {
        *method != Method::GET
    } else {
        false
    }
}

// Helper function to extract Bearer token from Authorization header
fn extract_bearer(request: &Request) -> Option<String> {
    let auth_header = request.headers().get(header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?;

    Some(token.to_string())
}

// Helper function to get a cookie by name from the request
fn get_cookie(request: &Request, name: &str) -> Option<String> {
    let cookie_header = request.headers().get(header::COOKIE)?;
    let cookie_str = cookie_header.to_str().ok()?;

    cookie_str.split(';').find_map(|s| {
        let (cookie_name, cookie_value) = s.trim().split_once('=')?;

        if cookie_name == name {
            Some(cookie_value.to_string())
        } else {
            None
        }
    })
}
