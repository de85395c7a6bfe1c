//! Caller identification middleware.
//!
//! Reelmark runs behind a gateway that authenticates requests and forwards
//! the caller identity in trusted headers. Requests without an identity
//! header are treated as guests: reads of protected resources are denied
//! downstream, aggregations come back empty, writes are refused.

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use reelmark_model::User;

pub const USER_ID_HEADER: &str = "x-reelmark-user";
pub const USERNAME_HEADER: &str = "x-reelmark-username";
pub const DISABLED_HEADER: &str = "x-reelmark-disabled";

pub async fn identify(mut request: Request, next: Next) -> Response {
    let user = user_from_headers(request.headers());
    request.extensions_mut().insert(user);
    next.run(request).await
}

fn user_from_headers(headers: &HeaderMap) -> User {
    let id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok());

    match id {
        Some(id) => {
            let username = headers
                .get(USERNAME_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let disabled = headers
                .get(DISABLED_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(|value| value == "true" || value == "1")
                .unwrap_or(false);
            User {
                id,
                username,
                guest: false,
                disabled,
            }
        }
        None => User {
            id: Uuid::nil(),
            username: "guest".to_string(),
            guest: true,
            disabled: false,
        },
    }
}
