/// Access token verification
use crate::config::AuthSettings;
use crate::error::{GatewayError, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use portal_core::TokenClaims;

/// How token signatures are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMode {
    /// HS256 with a shared secret
    SharedSecret,
    /// RS256 with the identity provider's public key
    PublicKey,
    /// Claims are read without checking the signature
    Unverified,
}

/// Decodes bearer tokens into claims.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
    mode: VerificationMode,
}

impl TokenVerifier {
    pub fn from_settings(settings: &AuthSettings) -> Result<Self> {
        match (&settings.jwt_secret, &settings.jwt_public_key) {
            (Some(secret), None) => Ok(Self::shared_secret(secret)),
            (None, Some(pem)) => Self::public_key(pem),
            (None, None) => Ok(Self::unverified()),
            (Some(_), Some(_)) => Err(GatewayError::Config(
                "set either auth.jwt_secret or auth.jwt_public_key, not both".to_string(),
            )),
        }
    }

    pub fn shared_secret(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: validation(Algorithm::HS256),
            mode: VerificationMode::SharedSecret,
        }
    }

    pub fn public_key(pem: &str) -> Result<Self> {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| GatewayError::Config(format!("invalid auth.jwt_public_key: {}", e)))?;
        Ok(Self {
            key,
            validation: validation(Algorithm::RS256),
            mode: VerificationMode::PublicKey,
        })
    }

    pub fn unverified() -> Self {
        let mut validation = validation(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(&[]),
            validation,
            mode: VerificationMode::Unverified,
        }
    }

    pub fn mode(&self) -> VerificationMode {
        self.mode
    }

    /// Verify and decode a token
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| GatewayError::Unauthorized(e.to_string()))
    }
}

/// Identity-provider tokens carry audiences the gateway does not check
fn validation(algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.validate_aud = false;
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn claims(exp: i64) -> TokenClaims {
        TokenClaims {
            sub: Some("user-123".to_string()),
            name: Some("Test User".to_string()),
            session_state: Some("sess-1".to_string()),
            exp: Some(exp),
            ..TokenClaims::default()
        }
    }

    fn token(secret: &str, exp: i64) -> String {
        encode(
            &Header::default(),
            &claims(exp),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn in_one_hour() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_shared_secret_round_trip() {
        let verifier = TokenVerifier::shared_secret("secret");
        let decoded = verifier.verify(&token("secret", in_one_hour())).unwrap();
        assert_eq!(decoded.sub.as_deref(), Some("user-123"));
        assert_eq!(decoded.session_state.as_deref(), Some("sess-1"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let verifier = TokenVerifier::shared_secret("secret");
        assert!(matches!(
            verifier.verify(&token("other", in_one_hour())),
            Err(GatewayError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let verifier = TokenVerifier::shared_secret("secret");
        let expired = chrono::Utc::now().timestamp() - 3600;
        assert!(verifier.verify(&token("secret", expired)).is_err());
    }

    #[test]
    fn test_unverified_reads_any_signature() {
        let verifier = TokenVerifier::unverified();
        assert_eq!(verifier.mode(), VerificationMode::Unverified);
        let decoded = verifier.verify(&token("whatever", 0)).unwrap();
        assert_eq!(decoded.name.as_deref(), Some("Test User"));
    }

    #[test]
    fn test_garbage_rejected_even_unverified() {
        assert!(TokenVerifier::unverified().verify("not-a-token").is_err());
    }

    #[test]
    fn test_mode_from_settings() {
        let settings = AuthSettings {
            jwt_secret: Some("s".to_string()),
            jwt_public_key: None,
        };
        let verifier = TokenVerifier::from_settings(&settings).unwrap();
        assert_eq!(verifier.mode(), VerificationMode::SharedSecret);

        let verifier = TokenVerifier::from_settings(&AuthSettings::default()).unwrap();
        assert_eq!(verifier.mode(), VerificationMode::Unverified);

        let settings = AuthSettings {
            jwt_secret: None,
            jwt_public_key: Some("not a pem".to_string()),
        };
        assert!(TokenVerifier::from_settings(&settings).is_err());
    }
}
