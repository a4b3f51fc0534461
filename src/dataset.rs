//! Local dataset loading with per-item validation.

use std::path::PathBuf;

use crate::{
   error::{KbSearchError, Result},
   types::Item,
};

/// A source of the full local dataset. Loaded wholesale on every fallback;
/// nothing is cached between queries.
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
   async fn load(&self) -> Result<Vec<Item>>;
}

/// Reads a JSON array of items from a file on each load.
///
/// Records missing a required field are a data-integrity problem in the
/// source data, not a reason to fail the whole query: each one is logged and
/// skipped. Only an unreadable or non-array file is a load failure.
pub struct JsonFileSource {
   path: PathBuf,
}

impl JsonFileSource {
   pub fn new(path: impl Into<PathBuf>) -> Self {
      Self { path: path.into() }
   }
}

#[async_trait::async_trait]
impl DatasetSource for JsonFileSource {
   async fn load(&self) -> Result<Vec<Item>> {
      let raw = tokio::fs::read(&self.path).await.map_err(|e| {
         KbSearchError::Dataset(format!("failed to read {}: {e}", self.path.display()))
      })?;

      let records: Vec<serde_json::Value> = serde_json::from_slice(&raw)
         .inspect_err(|e| tracing::warn!("failed to parse {}: {e}", self.path.display()))?;

      Ok(decode_items(records))
   }
}

fn decode_items(records: Vec<serde_json::Value>) -> Vec<Item> {
   let mut items = Vec::with_capacity(records.len());

   for (index, record) in records.into_iter().enumerate() {
      match serde_json::from_value::<Item>(record) {
         Ok(item) => items.push(item),
         Err(e) => {
            tracing::warn!(index, "skipping malformed dataset item: {e}");
         },
      }
   }

   items
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_malformed_items_are_skipped() {
      let records: Vec<serde_json::Value> = serde_json::from_str(
         r#"[
            {"title": "Recursion", "content": "Recursion basics", "tags": ["cs"]},
            {"title": "Missing content"},
            {"content": "Missing title"},
            {"title": "Sorting", "content": "Sorting basics"}
         ]"#,
      )
      .unwrap();

      let items = decode_items(records);
      assert_eq!(items.len(), 2);
      assert_eq!(items[0].title, "Recursion");
      assert_eq!(items[1].title, "Sorting");
   }

   #[test]
   fn test_optional_fields_default() {
      let records: Vec<serde_json::Value> =
         serde_json::from_str(r#"[{"title": "Bare", "content": "text"}]"#).unwrap();

      let items = decode_items(records);
      assert_eq!(items.len(), 1);
      assert!(items[0].tags.is_empty());
      assert!(items[0].description.is_none());
      assert!(items[0].examples.is_none());
      assert!(items[0].exercises.is_none());
   }
}
