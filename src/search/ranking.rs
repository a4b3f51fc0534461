//! Substring/prefix scoring with a sampling fallback.

use crate::types::{Item, ScoredItem};

/// Points for the query appearing anywhere in the item's searchable text.
const SUBSTRING_POINTS: u32 = 2;
/// Points for the title starting with the query.
const TITLE_PREFIX_POINTS: u32 = 1;

/// Scores one item against a lower-cased query.
///
/// The searchable text is title, tags, and content joined with spaces and
/// lower-cased, so a query may also match across a tag/content boundary.
pub fn score(item: &Item, query_lower: &str) -> u32 {
   let text =
      format!("{} {} {}", item.title, item.tags.join(" "), item.content).to_lowercase();

   let mut score = 0;
   if text.contains(query_lower) {
      score += SUBSTRING_POINTS;
   }
   if item.title.to_lowercase().starts_with(query_lower) {
      score += TITLE_PREFIX_POINTS;
   }
   score
}

/// Scores and orders a dataset against a query.
///
/// Items scoring above zero are returned in descending score order; the sort
/// is stable, so equal scores keep their dataset order. When nothing scores,
/// the first `sample_limit` items are returned unscored in dataset order so
/// the caller always has something to show. Never fails.
pub fn rank(dataset: Vec<Item>, query: &str, sample_limit: usize) -> Vec<Item> {
   let query_lower = query.to_lowercase();

   let mut scored: Vec<ScoredItem> = dataset
      .iter()
      .map(|item| ScoredItem { item: item.clone(), score: score(item, &query_lower) })
      .filter(|s| s.score > 0)
      .collect();

   if scored.is_empty() {
      let mut sample = dataset;
      sample.truncate(sample_limit);
      return sample;
   }

   // sort_by_key is stable: equal scores keep their dataset order.
   scored.sort_by_key(|s| std::cmp::Reverse(s.score));
   scored.into_iter().map(|s| s.item).collect()
}
