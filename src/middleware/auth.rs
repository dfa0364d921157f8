use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth::{extract_token, AuthError};
use crate::response::AppError;
use crate::state::AppState;

/// Resolves the bearer token to an [`crate::auth::AuthUser`] request
/// extension, or answers 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match extract_token(req.headers()) {
        Ok(token) => token,
        Err(err) => return AppError::from(err).into_response(),
    };

    match state.verifier().verify(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            if err == AuthError::MissingSecret {
                tracing::error!(
                    path = %req.uri().path(),
                    "rejecting request: token secret not configured"
                );
            } else {
                tracing::debug!(path = %req.uri().path(), error = %err, "bearer token rejected");
            }
            AppError::from(err).into_response()
        }
    }
}
