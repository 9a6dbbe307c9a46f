use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Extension key for storing the extracted client host
#[derive(Clone, Debug)]
pub struct ClientHost(pub String);

/// Middleware to extract the client host from a request
///
/// Priority:
/// 1. X-Forwarded-Host header (for requests through proxies)
/// 2. Host header
/// 3. ConnectInfo socket address (direct connection)
///
/// ConnectInfo is optional so the router also works when served without
/// connect info (router-level tests drive it with `oneshot`).
pub async fn extract_client_host(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    mut request: Request,
    next: Next,
) -> Response {
    let fallback = connect_info.map(|ConnectInfo(addr)| addr);
    let host = host_from_request(&request, fallback);

    // Store in request extensions
    if let Some(host) = host {
        request.extensions_mut().insert(ClientHost(host));
    }

    next.run(request).await
}

fn host_from_request(request: &Request, fallback: Option<SocketAddr>) -> Option<String> {
    if let Some(forwarded) = request.headers().get("x-forwarded-host") {
        forwarded.to_str().ok().map(|s| s.to_string())
    } else if let Some(host) = request.headers().get("host") {
        host.to_str().ok().map(|s| s.to_string())
    } else {
        fallback.map(|addr| addr.to_string())
    }
}
