// This module provides the functionality for the Authentication Service.
// It owns the credential store and the token codec and is the only entry
// point the request boundary talks to.

use crate::credentials::{CredentialStore, Identity};
use crate::error::AuthError;
use crate::token::TokenCodec;

pub struct AuthService {
    store: CredentialStore,
    codec: TokenCodec,
}

impl AuthService {
    pub fn new(store: CredentialStore, codec: TokenCodec) -> Self {
        Self { store, codec }
    }

    /// Checks `secret` against the stored credential for `username`.
    /// Returns the identity on an exact match, `None` otherwise.
    pub fn authenticate(&self, username: &str, secret: &str) -> Option<Identity> {
        self.store
            .lookup(username)
            .filter(|record| record.secret == secret)
            .map(|record| record.identity())
    }

    pub fn issue_token(&self, identity: &Identity) -> Result<String, AuthError> {
        self.codec.issue(&identity.username)
    }

    /// Decodes and verifies `token`, then re-resolves its subject against
    /// the credential store to confirm the identity still exists.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.codec.decode(token)?;
        self.store
            .lookup(&claims.sub)
            .map(|record| record.identity())
            .ok_or(AuthError::UnknownSubject)
    }
}
