//! Secret generation
//!
//! Every setup run draws fresh values from the operating system's CSPRNG.
//! Previous values are never read back, so a re-run always rotates them.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::value_objects::Secret;

/// Generate a full-length secret
pub fn generate_secret() -> Secret {
    generate_token(Secret::BYTES)
}

/// Generate a secret of `bytes` random bytes (hex length is twice that)
pub fn generate_token(bytes: usize) -> Secret {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    Secret::from_bytes(&buf)
}

/// Credential slots of the primary stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSecrets {
    pub grafana_admin_password: Secret,
    pub umami_app_secret: Secret,
    pub postgres_password: Secret,
}

/// Credential slots of the session-replay sub-stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstackSecrets {
    pub jwt_secret: Secret,
    pub postgres_password: Secret,
    pub minio_access_key: Secret,
    pub minio_secret_key: Secret,
}

pub fn generate_stack_secrets() -> StackSecrets {
    StackSecrets {
        grafana_admin_password: generate_secret(),
        umami_app_secret: generate_secret(),
        postgres_password: generate_secret(),
    }
}

pub fn generate_substack_secrets() -> SubstackSecrets {
    SubstackSecrets {
        jwt_secret: generate_secret(),
        postgres_password: generate_secret(),
        minio_access_key: generate_token(10),
        minio_secret_key: generate_secret(),
    }
}

impl StackSecrets {
    pub fn all(&self) -> [&Secret; 3] {
        [
            &self.grafana_admin_password,
            &self.umami_app_secret,
            &self.postgres_password,
        ]
    }
}

impl SubstackSecrets {
    pub fn all(&self) -> [&Secret; 4] {
        [
            &self.jwt_secret,
            &self.postgres_password,
            &self.minio_access_key,
            &self.minio_secret_key,
        ]
    }
}
