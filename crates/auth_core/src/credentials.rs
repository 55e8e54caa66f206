use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A read-only projection of a credential record. This is what handlers
/// get back once a request has been authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// One entry of the credential store. The secret is compared by exact
/// equality; there is no hashing and no timing mitigation here.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub secret: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            username: self.username.clone(),
        }
    }
}

/// In-memory username -> credential map, immutable for the lifetime of
/// the process. Seed data is injected by the caller at startup.
#[derive(Debug, Default)]
pub struct CredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl CredentialStore {
    pub fn from_records(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.username.clone(), record))
                .collect(),
        }
    }

    pub fn lookup(&self, username: &str) -> Option<&CredentialRecord> {
        self.records.get(username)
    }
}
