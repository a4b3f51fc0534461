//! Remote search transport: one JSON request per query, no retries.

use std::time::Duration;

use serde_json::json;

use crate::{
   error::{KbSearchError, Result},
   types::RemotePayload,
};

/// A remote search backend. Implementations issue a single request carrying
/// the trimmed query; every failure mode (connect error, non-success status,
/// malformed body) surfaces as an `Err`, which the resolver treats as
/// recoverable.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
   async fn search(&self, query: &str) -> Result<RemotePayload>;
}

/// HTTP transport posting `{"query": ...}` to a fixed endpoint.
pub struct HttpTransport {
   client:   reqwest::Client,
   endpoint: String,
}

impl HttpTransport {
   pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
      let mut builder = reqwest::Client::builder();
      if let Some(deadline) = timeout {
         builder = builder.timeout(deadline);
      }

      let client = builder
         .build()
         .map_err(|e| KbSearchError::Http(format!("failed to build http client: {e}")))?;

      Ok(Self { client, endpoint: endpoint.into() })
   }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
   async fn search(&self, query: &str) -> Result<RemotePayload> {
      let response = self
         .client
         .post(&self.endpoint)
         .json(&json!({ "query": query }))
         .send()
         .await
         .map_err(|e| KbSearchError::Http(format!("request failed: {e}")))?;

      let status = response.status();
      if !status.is_success() {
         return Err(KbSearchError::Http(format!("unexpected status {status}")));
      }

      response
         .json::<RemotePayload>()
         .await
         .map_err(|e| KbSearchError::Http(format!("malformed payload: {e}")))
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_payload_without_items_is_empty_list() {
      let payload: RemotePayload = serde_json::from_str("{}").unwrap();
      assert!(payload.items.is_empty());
   }

   #[test]
   fn test_transport_construction() {
      assert!(HttpTransport::new("http://localhost:9/api/search", None).is_ok());
      assert!(HttpTransport::new("/api/search", Some(Duration::from_millis(250))).is_ok());
   }
}
