#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token has expired")]
    ExpiredToken,
    #[error("unknown subject")]
    UnknownSubject,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
