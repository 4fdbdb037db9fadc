use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::DecodedToken;
use super::claims::IncomingClaims;
use super::claims::IssuedToken;
use super::claims::timestamp;
use super::claims::OutgoingClaims;
use super::errors::TokenError;

/// Signed, time-bounded token codec.
///
/// Generic over the claims type so services define their own token payload.
/// Tokens are compact JWTs signed with HS256 (HMAC with SHA-256); issuer and
/// verifier share one process-wide secret handed in at construction.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign `claims` with an expiry of now + TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<IssuedToken, TokenError> {
        self.encode_at(claims, Utc::now())
    }

    /// Sign `claims` as if issued at `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed, or the
    ///   expiry falls outside the representable date range
    pub fn encode_at<T: Serialize>(
        &self,
        claims: &T,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = issued_at.checked_add_signed(self.ttl).ok_or_else(|| {
            TokenError::EncodingFailed(format!("expiry out of range for ttl {}", self.ttl))
        })?;

        let payload = OutgoingClaims {
            claims,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: timestamp(payload.exp),
        })
    }

    /// Verify and decode a token.
    ///
    /// The signature is checked before anything else, so a forged token is
    /// reported as `InvalidSignature` even when it is also expired.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the payload
    /// * `Expired` - Current time is past the `exp` claim
    /// * `Malformed` - Token structure, encoding, algorithm or claims are wrong
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<DecodedToken<T>, TokenError> {
        let token_data = decode::<IncomingClaims<T>>(token, &self.decoding_key, &self.validation)?;

        Ok(DecodedToken::from_incoming(token_data.claims))
    }
}
