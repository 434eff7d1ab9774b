use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::{
    jwt::JwtKeys,
    policy::{self, Access},
};
use crate::error::ApiError;

/// Token from an `Authorization: Bearer <token>` header. Any other shape counts as absent.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Auth gate installed as a route layer.
///
/// Public routes pass straight through. On protected routes a missing token
/// answers 401 and a token that fails verification answers 403; a valid token
/// puts its [`Claims`](super::claims::Claims) into the request extensions.
pub async fn require_bearer(
    State(keys): State<JwtKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let access = match request.extensions().get::<MatchedPath>() {
        Some(route) => policy::access_for(request.method(), route.as_str()),
        None => Access::Bearer,
    };
    if access == Access::Public {
        return Ok(next.run(request).await);
    }

    let Some(token) = bearer_token(request.headers()) else {
        debug!(method = %request.method(), uri = %request.uri(), "missing bearer token");
        return Err(ApiError::Unauthenticated);
    };

    let claims = keys.verify(token).map_err(|e| {
        warn!(error = %e, "invalid or expired token");
        ApiError::Forbidden
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn other_shapes_count_as_absent() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        assert_eq!(bearer_token(&headers_with("Bearer    ")), None);
        assert_eq!(bearer_token(&headers_with("abc.def.ghi")), None);
    }
}
