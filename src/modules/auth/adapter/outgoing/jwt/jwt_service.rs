use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    SessionClaims, TokenError, TokenProvider, SESSION_TOKEN_TYPE,
};

pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_session_token(&self, user: &AdminUser) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.session_token_expiry);
        let claims = SessionClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            jti: Uuid::new_v4().to_string(),
            exp: expiration.timestamp(),
            token_type: SESSION_TOKEN_TYPE.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // We will enforce manually

        let decoded = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let now = Utc::now().timestamp();
        if decoded.claims.exp < now {
            return Err(TokenError::Invalid);
        }

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(expiry: i64) -> JwtConfig {
        JwtConfig {
            issuer: "portfolio-api".to_string(),
            secret_key: "mysecretkey".to_string(),
            session_token_expiry: expiry,
        }
    }

    #[test]
    fn test_generate_and_verify_session_token() {
        let service = JwtTokenService::new(config(3600));
        let user = AdminUser::default();

        let token = service
            .generate_session_token(&user)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.token_type, SESSION_TOKEN_TYPE);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_each_token_gets_a_distinct_jti() {
        let service = JwtTokenService::new(config(3600));
        let user = AdminUser::default();

        let a = service.generate_session_token(&user).unwrap();
        let b = service.generate_session_token(&user).unwrap();

        let jti_a = service.verify_token(&a).unwrap().jti;
        let jti_b = service.verify_token(&b).unwrap().jti;
        assert_ne!(jti_a, jti_b);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = JwtTokenService::new(config(3600));

        let claims = service.verify_token("invalid.jwt.token");

        assert!(claims.is_err(), "Invalid token should fail verification");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative expiry: the token is already expired at issue time.
        let service = JwtTokenService::new(config(-60));

        let token = service
            .generate_session_token(&AdminUser::default())
            .expect("Token should be generated");

        assert!(service.verify_token(&token).is_err());
    }
}
