//! Which routes need a bearer token.
//!
//! Every route the router serves is listed here once. The auth gate looks up
//! the matched route in [`ROUTE_POLICY`]; anything missing from the table is
//! treated as protected.

use axum::http::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Bearer,
}

#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    pub method: &'static str,
    pub path: &'static str,
    pub access: Access,
}

impl RoutePolicy {
    const fn public(method: &'static str, path: &'static str) -> Self {
        Self { method, path, access: Access::Public }
    }

    const fn bearer(method: &'static str, path: &'static str) -> Self {
        Self { method, path, access: Access::Bearer }
    }
}

pub const ROUTE_POLICY: &[RoutePolicy] = &[
    RoutePolicy::public("GET", "/health"),
    RoutePolicy::public("POST", "/api/login"),
    RoutePolicy::public("GET", "/api/articles"),
    RoutePolicy::public("GET", "/api/articles/:id"),
    RoutePolicy::bearer("POST", "/api/articles"),
    RoutePolicy::bearer("PUT", "/api/articles/:id"),
    RoutePolicy::bearer("DELETE", "/api/articles/:id"),
];

/// Looks up the access rule for a matched route pattern (e.g. `/api/articles/:id`).
pub fn access_for(method: &Method, route: &str) -> Access {
    // axum answers HEAD with the GET handler
    let method = if method == Method::HEAD { "GET" } else { method.as_str() };
    ROUTE_POLICY
        .iter()
        .find(|p| p.method == method && p.path == route)
        .map(|p| p.access)
        .unwrap_or(Access::Bearer)
}
