//! HTTP client for the nugget backend.

use lexnugget_core::{AreaOfLaw, CaseDigest, Envelope, Fetch, Nugget, Page};
use reqwest::RequestBuilder;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::endpoints;
use crate::error::ClientError;

/// A bearer token for privileged operations.
///
/// Passed explicitly to each call rather than read from ambient storage,
/// so a revoked token is picked up on the next operation.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

/// Client for the case-law nugget REST backend.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given backend base URL.
    ///
    /// `base_url` should be like `https://api.example.test` (no trailing
    /// slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(req: RequestBuilder, token: Option<&BearerToken>) -> RequestBuilder {
        match token {
            Some(t) => req.bearer_auth(t.as_str()),
            None => req,
        }
    }

    async fn read_json(req: RequestBuilder) -> Result<Value, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }

    async fn expect_success(req: RequestBuilder) -> Result<(), ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Request generation of a case digest. The payload is passed through
    /// to the backend unchanged; absent, an empty object is sent.
    ///
    /// Failures propagate to the caller.
    pub async fn generate_digest(
        &self,
        payload: Option<Value>,
        token: Option<&BearerToken>,
    ) -> Result<Value, ClientError> {
        let url = endpoints::generate_digest(&self.base_url);
        let body = payload.unwrap_or_else(|| json!({}));
        info!(url = %url, "generating case digest");
        let req = Self::authorize(self.client.post(&url), token).json(&body);
        Self::read_json(req)
            .await
            .inspect_err(|e| warn!(error = %e, "case digest generation failed"))
    }

    /// Look up a stored case digest by DL citation number.
    ///
    /// A `success=false` envelope means the digest does not exist and
    /// yields `Fetch::NotFound`; transport and HTTP failures are errors,
    /// never conflated with not-found.
    pub async fn digest_by_citation(
        &self,
        citation: &str,
        token: Option<&BearerToken>,
    ) -> Result<Fetch<CaseDigest>, ClientError> {
        let url = endpoints::digest_by_citation(&self.base_url, citation);
        info!(url = %url, citation, "fetching case digest");
        let body = Self::read_json(Self::authorize(self.client.get(&url), token))
            .await
            .inspect_err(|e| warn!(citation, error = %e, "case digest fetch failed"))?;
        Ok(Envelope::parse(body)?.into_fetch()?)
    }

    /// Ask the AI service for a digest of the cited case, scoped to a
    /// vector store. The backend's response contract is not fully fixed:
    /// an enveloped `data` payload and a bare body are both accepted.
    pub async fn digest_from_ai(
        &self,
        vector_store_id: &str,
        citation: &str,
        token: Option<&BearerToken>,
    ) -> Result<CaseDigest, ClientError> {
        let url = endpoints::digest_from_ai(&self.base_url);
        let body = json!({
            "vector_store_id": vector_store_id,
            "dl_citation_no": urlencoding::encode(citation),
        });
        info!(url = %url, citation, "requesting AI case digest");
        let resp = Self::read_json(Self::authorize(self.client.post(&url), token).json(&body))
            .await
            .inspect_err(|e| warn!(citation, error = %e, "AI case digest request failed"))?;
        Ok(Envelope::parse(resp)?.into_data_or_raw()?)
    }

    /// Bookmark a nugget for the authenticated user.
    pub async fn add_bookmark(
        &self,
        nugget_id: u64,
        token: &BearerToken,
    ) -> Result<(), ClientError> {
        let url = endpoints::bookmark_add(&self.base_url);
        info!(nugget_id, "adding bookmark");
        let req = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(&json!({ "nugget_id": nugget_id }));
        Self::expect_success(req).await
    }

    /// Remove a bookmarked nugget for the authenticated user.
    pub async fn remove_bookmark(
        &self,
        nugget_id: u64,
        token: &BearerToken,
    ) -> Result<(), ClientError> {
        let url = endpoints::bookmark_remove(&self.base_url, nugget_id);
        info!(nugget_id, "removing bookmark");
        let req = self.client.delete(&url).bearer_auth(token.as_str());
        Self::expect_success(req).await
    }

    /// One page of the authenticated user's bookmarked nuggets.
    pub async fn personal_nuggets(
        &self,
        page: u32,
        token: &BearerToken,
    ) -> Result<Page<Nugget>, ClientError> {
        let url = endpoints::personal_nuggets(&self.base_url, page);
        info!(url = %url, "fetching personal nuggets");
        let body = Self::read_json(self.client.get(&url).bearer_auth(token.as_str())).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// One page of the flat area-of-law list. Unauthenticated.
    pub async fn areas_of_law(&self, page: u32) -> Result<Page<AreaOfLaw>, ClientError> {
        let url = endpoints::areas_of_law(&self.base_url, page);
        info!(url = %url, "fetching areas of law");
        let body = Self::read_json(self.client.get(&url)).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// One page of a judge's nuggets. Unauthenticated. The judge record
    /// itself rides along inside each returned nugget.
    pub async fn nuggets_by_judge(
        &self,
        judge_id: u64,
        page: u32,
        limit: u32,
    ) -> Result<Page<Nugget>, ClientError> {
        let url = endpoints::nuggets_by_judge(&self.base_url, judge_id, page, limit);
        info!(url = %url, "fetching nuggets by judge");
        let body = Self::read_json(self.client.get(&url)).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = ApiClient::new("https://api.example.test/".into());
        assert_eq!(client.base_url(), "https://api.example.test");
    }

    #[test]
    fn bearer_token_debug_is_redacted() {
        let token = BearerToken::new("tok123-secret");
        assert_eq!(format!("{token:?}"), "BearerToken(..)");
        assert_eq!(token.as_str(), "tok123-secret");
    }

    #[test]
    fn authorized_request_carries_bearer_header() {
        let token = BearerToken::new("tok123");
        let req = ApiClient::authorize(
            reqwest::Client::new().post("https://api.example.test/cases/digest"),
            Some(&token),
        )
        .json(&json!({"x": 1}))
        .build()
        .unwrap();
        assert_eq!(
            req.headers()[reqwest::header::AUTHORIZATION],
            "Bearer tok123"
        );
        assert_eq!(req.body().unwrap().as_bytes().unwrap(), &br#"{"x":1}"#[..]);
    }

    #[test]
    fn unauthorized_request_has_no_auth_header() {
        let req = ApiClient::authorize(
            reqwest::Client::new().get("https://api.example.test/area-of-law?page=1"),
            None,
        )
        .build()
        .unwrap();
        assert!(!req.headers().contains_key(reqwest::header::AUTHORIZATION));
    }

    /// Answer one connection on an ephemeral loopback port with the
    /// given status line and JSON body, then close.
    fn serve_once(status_line: &'static str, body: &'static str) -> std::net::SocketAddr {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // Read until the request head is complete.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        });
        addr
    }

    #[tokio::test]
    async fn http_500_surfaces_status_and_body() {
        let addr = serve_once(
            "500 Internal Server Error",
            r#"{"message": "digest service unavailable"}"#,
        );
        let client = ApiClient::new(format!("http://{addr}"));
        let result = client.generate_digest(Some(json!({"x": 1})), None).await;
        match result {
            Err(ClientError::Server { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("digest service unavailable"));
            }
            other => panic!("expected Server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_404_is_a_server_error_for_bookmarks() {
        let addr = serve_once("404 Not Found", r#"{"message": "no such nugget"}"#);
        let client = ApiClient::new(format!("http://{addr}"));
        let token = BearerToken::new("tok123");
        let result = client.remove_bookmark(42, &token).await;
        assert!(matches!(
            result,
            Err(ClientError::Server { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error_not_not_found() {
        // Port 1 is never listening; the three-way result must surface
        // this as Err rather than Fetch::NotFound.
        let client = ApiClient::new("http://127.0.0.1:1".into());
        let result = client.digest_by_citation("[2019] DLSC 7721", None).await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}
