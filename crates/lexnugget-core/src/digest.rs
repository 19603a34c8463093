//! AI-generated case digest payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A case digest produced by the external AI service.
///
/// Digests carry no identifier of their own; they are keyed externally by
/// DL citation number (or by a vector-store-id / citation pair) and the
/// body is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseDigest(pub Value);

impl CaseDigest {
    /// Convenience accessor for a top-level string field of the digest.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digest_passes_body_through() {
        let body = json!({"summary": "Appeal dismissed.", "dl_citation_no": "[2019] DLSC 7721"});
        let digest: CaseDigest = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(digest.field("summary"), Some("Appeal dismissed."));
        assert_eq!(serde_json::to_value(&digest).unwrap(), body);
    }
}
