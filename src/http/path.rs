//! `:id` path segment extraction.
//!
//! Ids are read with number semantics: `1`, `1.0`, `1e0`, `+1` and `0x1`
//! all name user 1. A segment that is not a whole non-negative number
//! resolves to no id, which handlers report as not found.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ApiError;

/// The `:id` segment of a `/users/:id` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Option<u64>);

impl UserId {
    /// The numeric id, or `NotFound` if the segment can never match a record.
    pub fn get(self) -> Result<u64, ApiError> {
        self.0.ok_or(ApiError::NotFound)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Internal(format!("failed to decode id segment: {}", e)))?;
        Ok(UserId(parse_id(&raw)))
    }
}

/// Read `raw` as a number and keep it only if it is a whole value that fits
/// in a `u64`. Surrounding whitespace is ignored and a blank segment is 0.
pub(crate) fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0);
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok();
    }

    // Letters other than the exponent marker rule out `inf`, `NaN` and the
    // like before f64 parsing gets a chance to accept them.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    let n: f64 = s.parse().ok()?;
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then(|| n as u64)
}
