pub mod ranking;

use std::sync::Arc;

use crate::{
   config::Config,
   dataset::{DatasetSource, JsonFileSource},
   error::Result,
   transport::{HttpTransport, Transport},
   types::Resolution,
};

/// Decides how to satisfy a query: remote first, local ranking as fallback.
pub struct Resolver {
   transport:    Arc<dyn Transport>,
   dataset:      Arc<dyn DatasetSource>,
   sample_limit: usize,
}

impl Resolver {
   pub fn new(
      transport: Arc<dyn Transport>,
      dataset: Arc<dyn DatasetSource>,
      sample_limit: usize,
   ) -> Self {
      Self { transport, dataset, sample_limit }
   }

   /// Builds a resolver with the HTTP transport and JSON file source named by
   /// the config.
   pub fn from_config(config: &Config) -> Result<Self> {
      let transport = HttpTransport::new(config.endpoint.clone(), config.remote_timeout())?;
      let dataset = JsonFileSource::new(config.dataset_path.clone());
      Ok(Self::new(Arc::new(transport), Arc::new(dataset), config.sample_limit))
   }

   /// Resolves a query to an ordered list of items.
   ///
   /// A blank query short-circuits to [`Resolution::EmptyQuery`] without
   /// touching either tier. A successful remote response is returned verbatim,
   /// never re-ranked locally. Any remote failure silently falls back to
   /// loading and ranking the local dataset; only a failed dataset load makes
   /// this return an error.
   pub async fn resolve(&self, query: &str) -> Result<Resolution> {
      let query = query.trim();
      if query.is_empty() {
         return Ok(Resolution::EmptyQuery);
      }

      match self.transport.search(query).await {
         Ok(payload) => return Ok(Resolution::Remote(payload.items)),
         Err(e) => {
            tracing::debug!("remote search unavailable, using local dataset: {e}");
         },
      }

      let dataset = self.dataset.load().await?;
      Ok(Resolution::Local(ranking::rank(dataset, query, self.sample_limit)))
   }
}
