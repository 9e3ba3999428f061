//! Tower layers applied to the router.
//!
//! Includes request tracing, timeout enforcement, response compression, and
//! a permissive CORS policy.

use std::time::Duration;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CORS policy allowing every origin, method, and header, with credentials.
///
/// Wildcards cannot be combined with `Access-Control-Allow-Credentials`, so
/// each allowance mirrors the request instead.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
