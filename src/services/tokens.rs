use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::configuration::AuthSettings;
use crate::errors::AppError;
use crate::models::Identity;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub admin: bool,
}

/// Issues and verifies the bearer tokens the authentication boundary hands
/// out. Stateless: a token is valid iff its signature matches under the
/// configured secret and its expiry has not passed. There is no revocation
/// list and no refresh flow.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(settings: &AuthSettings) -> Self {
        TokenService {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            ttl_seconds: settings.token_ttl_seconds,
        }
    }

    /// Sign a token for `subject` with the configured TTL.
    pub fn issue(&self, subject: &str, is_admin: bool) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
            admin: is_admin,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| AppError::Internal(format!("token signing failed: {}", err)))
    }

    /// Fails closed: false on a bad signature, expiry, malformed input or a
    /// subject mismatch. Never errors.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode_claims(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(_) => false,
        }
    }

    pub fn subject(&self, token: &str) -> Result<String, AppError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    pub fn expiry(&self, token: &str) -> Result<DateTime<Utc>, AppError> {
        let claims = self.decode_claims(token)?;
        DateTime::from_timestamp(claims.exp, 0).ok_or(AppError::TokenInvalid)
    }

    pub fn issued_at(&self, token: &str) -> Result<DateTime<Utc>, AppError> {
        let claims = self.decode_claims(token)?;
        DateTime::from_timestamp(claims.iat, 0).ok_or(AppError::TokenInvalid)
    }

    pub fn is_admin(&self, token: &str) -> Result<bool, AppError> {
        self.decode_claims(token).map(|claims| claims.admin)
    }

    /// Subject and admin flag in one decode, for the request filter.
    pub fn identity(&self, token: &str) -> Result<Identity, AppError> {
        let claims = self.decode_claims(token)?;
        Ok(Identity {
            subject: claims.sub,
            is_admin: claims.admin,
        })
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // TTL elapse is exact, no grace window
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenInvalid,
            })
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> AuthSettings {
        AuthSettings {
            secret: "mySecretKeyForTestingTokenGenerationAndValidation12345".to_string(),
            token_ttl_seconds: 36_000,
        }
    }

    fn service() -> TokenService {
        TokenService::new(&test_settings())
    }

    #[test]
    fn issued_token_has_three_parts() {
        let token = service().issue("user@example.com", false).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn issued_token_validates_for_its_subject() {
        let service = service();
        let token = service.issue("user@example.com", false).unwrap();
        assert!(service.validate(&token, "user@example.com"));
    }

    #[test]
    fn validation_fails_for_a_different_subject() {
        let service = service();
        let token = service.issue("user@example.com", false).unwrap();
        assert!(!service.validate(&token, "different@example.com"));
    }

    #[test]
    fn subject_is_extracted() {
        let service = service();
        let token = service.issue("user@example.com", false).unwrap();
        assert_eq!(service.subject(&token).unwrap(), "user@example.com");
    }

    #[test]
    fn admin_claim_round_trips() {
        let service = service();
        let admin_token = service.issue("admin@example.com", true).unwrap();
        let user_token = service.issue("user@example.com", false).unwrap();

        assert!(service.is_admin(&admin_token).unwrap());
        assert!(!service.is_admin(&user_token).unwrap());
    }

    #[test]
    fn expiry_is_ttl_after_issuance() {
        let service = service();
        let token = service.issue("user@example.com", false).unwrap();

        let issued_at = service.issued_at(&token).unwrap();
        let expiry = service.expiry(&token).unwrap();

        assert!(expiry > Utc::now());
        assert_eq!((expiry - issued_at).num_seconds(), 36_000);
    }

    #[test]
    fn expired_token_is_reported_as_expired_not_invalid() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            admin: false,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(test_settings().secret.as_bytes()),
        )
        .unwrap();

        assert!(!service.validate(&token, "user@example.com"));
        assert_eq!(service.subject(&token).unwrap_err(), AppError::TokenExpired);
        assert_eq!(service.is_admin(&token).unwrap_err(), AppError::TokenExpired);
    }

    #[test]
    fn token_signed_with_another_secret_is_invalid() {
        let service = service();
        let other = TokenService::new(&AuthSettings {
            secret: "anEntirelyDifferentSecretKeyAlsoLongEnough999".to_string(),
            token_ttl_seconds: 36_000,
        });

        let token = other.issue("user@example.com", false).unwrap();

        assert!(!service.validate(&token, "user@example.com"));
        assert_eq!(service.subject(&token).unwrap_err(), AppError::TokenInvalid);
    }

    #[test]
    fn garbage_input_is_invalid() {
        let service = service();
        assert!(!service.validate("not-a-token", "user@example.com"));
        assert_eq!(
            service.subject("a.b").unwrap_err(),
            AppError::TokenInvalid
        );
        assert_eq!(service.identity("").unwrap_err(), AppError::TokenInvalid);
    }

    #[test]
    fn two_tokens_for_the_same_subject_both_validate() {
        let service = service();
        let first = service.issue("user@example.com", false).unwrap();
        let second = service.issue("user@example.com", false).unwrap();

        assert!(service.validate(&first, "user@example.com"));
        assert!(service.validate(&second, "user@example.com"));
        assert_eq!(service.subject(&first).unwrap(), service.subject(&second).unwrap());
    }

    #[test]
    fn identity_carries_subject_and_admin_flag() {
        let service = service();
        let token = service.issue("admin@example.com", true).unwrap();

        let identity = service.identity(&token).unwrap();
        assert_eq!(identity.subject, "admin@example.com");
        assert!(identity.is_admin);
    }

    #[test]
    fn debug_does_not_expose_the_secret() {
        let output = format!("{:?}", service());
        assert!(!output.contains("mySecretKey"));
        assert!(output.contains("<redacted>"));
    }
}
