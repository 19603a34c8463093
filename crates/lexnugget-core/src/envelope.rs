//! Response-envelope normalisation.
//!
//! The backend answers some endpoints with `{"success": bool, "data": T}`
//! and others with a bare `T`. Both shapes are normalised here, once, so
//! call sites never branch on response shape themselves.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("envelope `success` field is not a boolean")]
    NonBooleanSuccess,
    #[error("envelope reported success but carried no `data` field")]
    MissingData,
    #[error("expected a {{success, data}} envelope, got a bare body")]
    UnexpectedShape,
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a lookup that can legitimately find nothing.
///
/// Combined with `Result` this gives the three-way
/// `Ok(Found) | Ok(NotFound) | Err(e)` — a missing record is never
/// conflated with a failed request.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Found(T),
    NotFound,
}

impl<T> Fetch<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Fetch::Found(t) => Some(t),
            Fetch::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Fetch::NotFound)
    }
}

/// A backend response normalised into one of the tolerated shapes.
#[derive(Debug, Clone)]
pub enum Envelope<T> {
    /// `{"success": true, "data": ...}`.
    Success(T),
    /// `{"success": false, ...}`; the whole body is retained.
    Failure { raw: Value },
    /// A bare body with no `success` discriminant.
    Bare(T),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Classify a response body into one of the tolerated shapes.
    pub fn parse(body: Value) -> Result<Self, EnvelopeError> {
        let success = match body.get("success") {
            None => return Ok(Envelope::Bare(serde_json::from_value(body)?)),
            Some(flag) => flag.as_bool().ok_or(EnvelopeError::NonBooleanSuccess)?,
        };
        if success {
            let data = body.get("data").cloned().ok_or(EnvelopeError::MissingData)?;
            Ok(Envelope::Success(serde_json::from_value(data)?))
        } else {
            Ok(Envelope::Failure { raw: body })
        }
    }

    /// Interpret the envelope as a lookup result: `success=false` means
    /// the record does not exist. A bare body is an unexpected shape for
    /// lookup endpoints and surfaces as an error rather than falling
    /// through silently.
    pub fn into_fetch(self) -> Result<Fetch<T>, EnvelopeError> {
        match self {
            Envelope::Success(data) => Ok(Fetch::Found(data)),
            Envelope::Failure { .. } => Ok(Fetch::NotFound),
            Envelope::Bare(_) => Err(EnvelopeError::UnexpectedShape),
        }
    }

    /// Unwrap the inner payload, tolerating a bare body. On a
    /// `success=false` envelope the raw body is re-parsed as `T`
    /// verbatim, matching endpoints whose contract is not fully fixed.
    pub fn into_data_or_raw(self) -> Result<T, EnvelopeError> {
        match self {
            Envelope::Success(data) | Envelope::Bare(data) => Ok(data),
            Envelope::Failure { raw } => Ok(serde_json::from_value(raw)?),
        }
    }
}
