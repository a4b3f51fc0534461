//! Core data types shared across the resolver, ranker, and presentation layer.

use serde::{Deserialize, Serialize};

/// A single knowledge-base entry. Items are immutable inputs; ranking produces
/// a transient [`ScoredItem`] view instead of mutating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
   pub title:   String,
   pub content: String,

   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub description: Option<String>,

   #[serde(default, skip_serializing_if = "Vec::is_empty")]
   pub tags: Vec<String>,

   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub examples: Option<String>,

   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub exercises: Option<String>,
}

/// Success body of the remote search endpoint. A response without an `items`
/// field is an empty result list, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemotePayload {
   #[serde(default)]
   pub items: Vec<Item>,
}

/// An item annotated with its score for one ranking pass. Discarded once the
/// ordered item list has been produced.
#[derive(Debug, Clone)]
pub struct ScoredItem {
   pub item:  Item,
   pub score: u32,
}

/// Outcome of resolving a query, consumed by the presentation layer.
///
/// An empty item list inside `Remote` or `Local` renders as the "no results"
/// state. Dataset load failure is not a variant: it propagates as an error
/// from [`crate::search::Resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
   /// Items returned by the remote endpoint, trusted verbatim.
   Remote(Vec<Item>),
   /// Items ranked from the local dataset after the remote attempt failed.
   Local(Vec<Item>),
   /// The query was empty after trimming; render a prompt, not an error.
   EmptyQuery,
}

impl Resolution {
   /// The ordered items carried by this resolution, if any.
   pub fn items(&self) -> Option<&[Item]> {
      match self {
         Self::Remote(items) | Self::Local(items) => Some(items),
         Self::EmptyQuery => None,
      }
   }
}
