use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

/// Admin key presented by the caller, if any
#[derive(Clone, Debug)]
pub struct AdminKey(pub Option<String>);

/// Admin key extraction middleware
///
/// Reads the x-admin-key header, falling back to the Authorization header
/// (with or without a "Bearer " prefix), and stores the result in request
/// extensions. The capability check itself happens in the handlers.
pub async fn extract_admin_key(mut request: Request, next: Next) -> Response {
    let key = admin_key_from_request(&request);

    if key.is_none() {
        debug!("No admin key presented");
    }
    request.extensions_mut().insert(AdminKey(key));

    next.run(request).await
}

/// Extract the presented admin key from request headers
///
/// An empty header value counts as absent.
fn admin_key_from_request(request: &Request) -> Option<String> {
    let header_key = request
        .headers()
        .get("x-admin-key")
        .and_then(|value| value.to_str().ok())
        .filter(|key| !key.is_empty());
    if let Some(key) = header_key {
        return Some(key.to_string());
    }

    let auth_str = request.headers().get("authorization")?.to_str().ok()?;

    // Handle both "Bearer <key>" and a raw key
    let key = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);
    (!key.is_empty()).then(|| key.to_string())
}
