// Core of the bearer-token API: credential lookup, token issuance and
// verification. This crate knows nothing about HTTP; the web crate calls
// in through `AuthService` and maps `AuthError` to transport status codes.
pub mod auth_service;
pub mod credentials;
pub mod error;
pub mod token;

pub use auth_service::AuthService;
pub use credentials::{CredentialRecord, CredentialStore, Identity};
pub use error::AuthError;
pub use token::{Claims, TokenCodec};
