//! Presentation adapter: turns resolver output into render-ready HTML strings.
//!
//! Pure functions only; no UI state lives here. Every item field passes
//! through [`escape_html`] so markup in the data renders as literal text.

use crate::types::{Item, Resolution};

/// Shown when the query is blank after trimming.
pub const EMPTY_QUERY_PROMPT: &str = "Type a term to search";
/// Shown for an explicitly empty result list.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
/// Shown when the local dataset could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load the local knowledge base.";

const SUMMARY_CHARS: usize = 120;
const CARD_TAG_LIMIT: usize = 4;

/// Escapes `& < > " '` so item text is never parsed as markup.
pub fn escape_html(text: &str) -> String {
   let mut escaped = String::with_capacity(text.len());
   for ch in text.chars() {
      match ch {
         '&' => escaped.push_str("&amp;"),
         '<' => escaped.push_str("&lt;"),
         '>' => escaped.push_str("&gt;"),
         '"' => escaped.push_str("&quot;"),
         '\'' => escaped.push_str("&#39;"),
         _ => escaped.push(ch),
      }
   }
   escaped
}

/// Renders a full resolution outcome, including the prompt and no-results
/// states. Load failure is rendered by the caller from
/// [`LOAD_FAILURE_MESSAGE`] since it arrives as an error, not a resolution.
pub fn resolution_view(resolution: &Resolution) -> String {
   match resolution.items() {
      None => state_message(EMPTY_QUERY_PROMPT),
      Some([]) => state_message(NO_RESULTS_MESSAGE),
      Some(items) => summary_cards(items),
   }
}

pub fn state_message(message: &str) -> String {
   format!("<p class=\"state\">{}</p>", escape_html(message))
}

/// One summary card per item, in the order the resolver produced them.
pub fn summary_cards(items: &[Item]) -> String {
   if items.is_empty() {
      return state_message(NO_RESULTS_MESSAGE);
   }
   items.iter().map(summary_card).collect()
}

fn summary_card(item: &Item) -> String {
   let tags: String = item
      .tags
      .iter()
      .take(CARD_TAG_LIMIT)
      .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
      .collect();

   format!(
      "<div class=\"card\"><h3>{}</h3><p>{}</p><div class=\"tags\">{}</div></div>",
      escape_html(&item.title),
      escape_html(&summary_text(item)),
      tags,
   )
}

/// The card body: the description when present, otherwise the leading content
/// with an ellipsis.
fn summary_text(item: &Item) -> String {
   match &item.description {
      Some(description) => description.clone(),
      None => {
         let lead: String = item.content.chars().take(SUMMARY_CHARS).collect();
         format!("{lead}...")
      },
   }
}

/// The detail view for a selected card: full content plus the optional
/// examples and exercises sections.
pub fn detail_view(item: &Item) -> String {
   let mut view = format!(
      "<div class=\"modal\"><h2>{}</h2><p>{}</p><pre>{}</pre>",
      escape_html(&item.title),
      escape_html(item.description.as_deref().unwrap_or_default()),
      escape_html(&item.content),
   );

   if let Some(examples) = &item.examples {
      view.push_str(&format!("<h3>Examples</h3><pre>{}</pre>", escape_html(examples)));
   }
   if let Some(exercises) = &item.exercises {
      view.push_str(&format!("<h3>Exercises</h3><pre>{}</pre>", escape_html(exercises)));
   }

   view.push_str("</div>");
   view
}

#[cfg(test)]
mod tests {
   use super::*;

   fn item(title: &str) -> Item {
      Item {
         title:       title.to_string(),
         content:     "content body".to_string(),
         description: None,
         tags:        Vec::new(),
         examples:    None,
         exercises:   None,
      }
   }

   #[test]
   fn test_escape_html_covers_all_five() {
      assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
   }

   #[test]
   fn test_script_title_renders_as_text() {
      let card = summary_cards(&[item("<script>alert(1)</script>")]);
      assert!(!card.contains("<script>"));
      assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

      let detail = detail_view(&item("<script>alert(1)</script>"));
      assert!(!detail.contains("<script>"));
   }

   #[test]
   fn test_summary_prefers_description() {
      let mut it = item("Recursion");
      it.description = Some("short blurb".to_string());
      let card = summary_cards(&[it]);
      assert!(card.contains("short blurb"));
      assert!(!card.contains("content body..."));
   }

   #[test]
   fn test_summary_truncates_content() {
      let mut it = item("Long");
      it.content = "x".repeat(500);
      let card = summary_cards(&[it]);
      assert!(card.contains(&format!("{}...", "x".repeat(120))));
      assert!(!card.contains(&"x".repeat(121)));
   }

   #[test]
   fn test_card_caps_tags_at_four() {
      let mut it = item("Tagged");
      it.tags = (0..6).map(|i| format!("tag{i}")).collect();
      let card = summary_cards(&[it]);
      assert!(card.contains("tag3"));
      assert!(!card.contains("tag4"));
   }

   #[test]
   fn test_empty_list_renders_no_results() {
      assert!(summary_cards(&[]).contains(NO_RESULTS_MESSAGE));
   }

   #[test]
   fn test_resolution_states() {
      use crate::types::Resolution;

      assert!(resolution_view(&Resolution::EmptyQuery).contains(EMPTY_QUERY_PROMPT));
      assert!(resolution_view(&Resolution::Remote(Vec::new())).contains(NO_RESULTS_MESSAGE));

      let view = resolution_view(&Resolution::Local(vec![item("Recursion")]));
      assert!(view.contains("Recursion"));
   }

   #[test]
   fn test_detail_sections_only_when_present() {
      let mut it = item("Recursion");
      assert!(!detail_view(&it).contains("Examples"));

      it.examples = Some("fib(n)".to_string());
      it.exercises = Some("write fact(n)".to_string());
      let view = detail_view(&it);
      assert!(view.contains("<h3>Examples</h3>"));
      assert!(view.contains("<h3>Exercises</h3>"));
      assert!(view.contains("fib(n)"));
   }
}
