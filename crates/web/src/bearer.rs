use std::future::{ready, Ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{dev::Payload, FromRequest, HttpRequest, HttpResponse, ResponseError};
use auth_core::{AuthError, AuthService, Identity};
use serde_json::json;

/// Boundary-level authentication failure. Every variant except `Token` with
/// a signing failure maps to 401; the status mapping lives here and nowhere
/// else.
#[derive(thiserror::Error, Debug)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Token(#[from] AuthError),
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthenticationError::Token(AuthError::Signing(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

/// Request guard for protected routes. Extracting it runs the whole chain:
/// bearer header -> token verification -> subject re-resolution.
pub struct AuthenticatedUser(pub Identity);

impl FromRequest for AuthenticatedUser {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate_request(req))
    }
}

fn authenticate_request(req: &HttpRequest) -> Result<AuthenticatedUser, AuthenticationError> {
    // Registered in `startup::run`; absence is a wiring bug, not a request error
    let service = req
        .app_data::<Data<AuthService>>()
        .expect("AuthService is not registered as application data");
    let token = bearer_token(req).ok_or(AuthError::MissingToken)?;
    let identity = service.verify(token)?;
    Ok(AuthenticatedUser(identity))
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}
