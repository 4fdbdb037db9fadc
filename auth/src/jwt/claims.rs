use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Wire representation of a token payload.
///
/// The caller's claims are flattened next to the registered `iat` and `exp`
/// claims, so `{"user_id":1,...,"iat":..,"exp":..}` for an identity claims set.
#[derive(Debug, Serialize)]
pub(crate) struct OutgoingClaims<'a, T: Serialize> {
    #[serde(flatten)]
    pub claims: &'a T,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IncomingClaims<T> {
    #[serde(flatten)]
    pub claims: T,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Claims recovered from a verified token.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken<T> {
    pub claims: T,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<T> DecodedToken<T> {
    pub(crate) fn from_incoming(incoming: IncomingClaims<T>) -> Self {
        Self {
            claims: incoming.claims,
            issued_at: timestamp(incoming.iat),
            expires_at: timestamp(incoming.exp),
        }
    }

    /// Check if the token is expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

pub(crate) fn timestamp(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .unwrap_or_default()
}
