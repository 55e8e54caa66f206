use actix_web::web::{Data, Form};
use actix_web::{get, post, HttpResponse};
use auth_core::AuthService;
use serde::{Deserialize, Serialize};

use crate::bearer::{AuthenticatedUser, AuthenticationError};

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    access_token: String,
    token_type: String,
}

#[derive(Serialize)]
pub struct MeResponse {
    username: String,
}

#[get("/health_check")]
pub async fn health_check() -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().finish())
}

/// Exchanges a username/password pair for a signed bearer token.
#[post("/login")]
pub async fn login(
    form: Form<LoginForm>,
    service: Data<AuthService>,
) -> Result<HttpResponse, AuthenticationError> {
    let identity = service
        .authenticate(&form.username, &form.password)
        .ok_or(AuthenticationError::InvalidCredentials)?;
    tracing::info!(username = %identity.username, "Issuing access token");
    let access_token = service.issue_token(&identity)?;
    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
    }))
}

/// Returns the identity encoded in the presented bearer token.
#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(MeResponse {
        username: user.0.username,
    }))
}
