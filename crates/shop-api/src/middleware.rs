// ============================================================================
// Shop API - Auth Middleware
// File: crates/shop-api/src/middleware.rs
// ============================================================================
//! Bearer token verification and the admin gate.
//!
//! Both run through `axum::middleware::from_fn_with_state`. `require_admin`
//! relies on `require_auth` having run first.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use shop_core::domain::Identity;

use crate::error::ApiError;
use crate::state::AppState;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verify the bearer token and attach the caller's `Identity` to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = {
        let token = bearer_token(req.headers())
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".into()))?;
        state.auth_service.authenticate(token)?
    };

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Admin flag is read from the store on every request, not from the token.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = req
        .extensions()
        .get::<Identity>()
        .copied()
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".into()))?;

    state.auth_service.authorize_admin(&identity).await?;
    Ok(next.run(req).await)
}
