use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::Sha256;

use crate::errors::AppError;

type HmacSha256 = Hmac<Sha256>;

const SALT_LENGTH: usize = 16;

/// Password hashing seam. The registration and authentication flows only
/// ever see this trait.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AppError>;
    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, AppError>;
}

/// Keyed HMAC-SHA256 hasher with a per-hash random salt.
///
/// Stored format is `salt$hex`; the pepper is the server-held secret, so a
/// leaked table alone cannot be brute-forced offline without it.
pub struct HmacPasswordHasher {
    pepper: String,
}

impl HmacPasswordHasher {
    pub fn new(pepper: impl Into<String>) -> Self {
        HmacPasswordHasher {
            pepper: pepper.into(),
        }
    }

    fn digest(&self, salt: &str, plain: &str) -> Result<String, AppError> {
        let mut mac = HmacSha256::new_from_slice(self.pepper.as_bytes())
            .map_err(|_| AppError::Internal("hmac rejected the pepper".to_string()))?;
        mac.update(salt.as_bytes());
        mac.update(plain.as_bytes());
        Ok(format!("{:x}", mac.finalize().into_bytes()))
    }
}

impl PasswordHasher for HmacPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        let salt: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LENGTH)
            .map(char::from)
            .collect();
        let digest = self.digest(&salt, plain)?;
        Ok(format!("{}${}", salt, digest))
    }

    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, AppError> {
        match hashed.split_once('$') {
            Some((salt, digest)) => Ok(self.digest(salt, plain)? == digest),
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for HmacPasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacPasswordHasher")
            .field("pepper", &"<redacted>")
            .finish()
    }
}
