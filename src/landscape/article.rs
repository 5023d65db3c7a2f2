//! Article records on either side of the classification boundary.

use serde::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

use super::grid::GridCell;

/// One raw record as delivered by the article stream.
///
/// The stream hands these over in batches; the core never fetches. Field
/// renames follow the newswire JSON shape.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawArticle {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

/// A scored article living in the current batch.
///
/// `sentiment` is computed once from the combined title and abstract and is
/// immutable afterwards. `grid_cell` is assigned once by placement and is
/// `None` only when a later article displaced this one from its cell.
#[derive(Clone, Debug, Serialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub published_at: String,
    pub sentiment: Sentiment,
    pub grid_cell: Option<GridCell>,
}

impl Article {
    pub fn from_raw(raw: RawArticle, sentiment: Sentiment) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            summary: raw.summary,
            url: raw.url,
            published_at: raw.published_at,
            sentiment,
            grid_cell: None,
        }
    }

    /// The text the classifier sees: headline and abstract together.
    pub fn classification_text(raw: &RawArticle) -> String {
        format!("{} {}", raw.title, raw.summary)
    }
}
