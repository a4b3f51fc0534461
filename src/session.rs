//! Sequencing for overlapping searches.
//!
//! Each search takes a monotonically increasing ticket; a result is only
//! reported if no newer search started while it was in flight. This stops a
//! slow, stale response from clobbering the outcome of a newer query.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{error::Result, search::Resolver, types::Resolution};

pub struct SearchSession {
   resolver: Resolver,
   latest:   AtomicU64,
}

impl SearchSession {
   pub fn new(resolver: Resolver) -> Self {
      Self { resolver, latest: AtomicU64::new(0) }
   }

   /// Resolves a query, returning `None` if a newer search superseded this one
   /// before it completed. The dataset load failure still surfaces as
   /// `Some(Err(..))` when current.
   pub async fn search(&self, query: &str) -> Option<Result<Resolution>> {
      let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

      let outcome = self.resolver.resolve(query).await;

      if self.latest.load(Ordering::SeqCst) == ticket { Some(outcome) } else { None }
   }

   /// The ticket a new search would have to beat; exposed for callers that
   /// manage their own result view.
   pub fn current_ticket(&self) -> u64 {
      self.latest.load(Ordering::SeqCst)
   }
}
