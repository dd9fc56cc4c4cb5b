use crate::infrastructure::http::middleware::ApiError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

pub const TENANT_HEADER: &str = "X-Tenant-Id";

/// Tenant the current request acts on, inserted by [`require_tenant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant_id: Uuid,
}

/// Middleware resolving the tenant from the `X-Tenant-Id` header.
/// Requests without a parseable tenant id are rejected with 400.
pub async fn require_tenant(mut request: Request, next: Next) -> Response {
    let tenant_id = request
        .headers()
        .get(TENANT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok());

    let Some(tenant_id) = tenant_id else {
        tracing::debug!("Rejected request to {} without tenant context", request.uri());
        return ApiError::BadRequest("Invalid tenant context".to_string()).into_response();
    };

    request.extensions_mut().insert(TenantContext { tenant_id });
    next.run(request).await
}
